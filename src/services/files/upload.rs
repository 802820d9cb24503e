use super::FileService;
use crate::errors::{PortalError, Result};
use crate::models::files::entities::LocalFile;
use crate::models::files::responses::UploadedFile;

pub async fn upload_file(service: &FileService, file: &LocalFile) -> Result<UploadedFile> {
    // 传输前先在客户端把关：扩展名与大小
    let extension = file.extension();
    if !service
        .limits()
        .allowed_types
        .iter()
        .any(|t| t.to_lowercase() == extension)
    {
        return Err(PortalError::validation(format!(
            "Tipe file tidak diizinkan: {}",
            file.name
        )));
    }

    if file.size() > service.limits().max_size {
        return Err(PortalError::validation(format!(
            "Ukuran file melebihi batas {} byte",
            service.limits().max_size
        )));
    }

    let uploaded = service.backend().upload_file(file).await?;
    tracing::info!("file terunggah: {} -> {}", file.name, uploaded.url);
    Ok(uploaded)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::FakeBackend;
    use crate::config::UploadConfig;

    fn limits() -> UploadConfig {
        UploadConfig {
            max_size: 1024,
            allowed_types: vec![".pdf".into(), ".docx".into(), ".zip".into()],
        }
    }

    #[tokio::test]
    async fn test_upload_allowed_file() {
        let backend = Arc::new(FakeBackend {
            uploaded_url: "https://files.example/abc.pdf".into(),
            ..FakeBackend::default()
        });
        let service = FileService::new(backend.clone(), limits());
        let uploaded = service
            .upload(&LocalFile::new("jawaban.pdf", vec![0; 10]))
            .await
            .unwrap();
        assert_eq!(uploaded.url, "https://files.example/abc.pdf");
        assert_eq!(*backend.upload_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rejects_disallowed_extension_before_transfer() {
        let backend = Arc::new(FakeBackend::default());
        let service = FileService::new(backend.clone(), limits());
        let err = service
            .upload(&LocalFile::new("virus.exe", vec![0; 10]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");
        // 后端压根没被调用
        assert_eq!(*backend.upload_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejects_oversized_file() {
        let backend = Arc::new(FakeBackend::default());
        let service = FileService::new(backend, limits());
        let err = service
            .upload(&LocalFile::new("besar.pdf", vec![0; 2048]))
            .await
            .unwrap_err();
        assert!(err.message().contains("melebihi batas"));
    }
}

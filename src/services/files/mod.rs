pub mod upload;

use std::sync::Arc;

use crate::client::ApiBackend;
use crate::config::UploadConfig;
use crate::errors::Result;
use crate::models::files::entities::LocalFile;
use crate::models::files::responses::UploadedFile;

/// 文件上传服务
///
/// 上传限制通过构造参数注入，库代码不读全局配置。
pub struct FileService {
    backend: Arc<dyn ApiBackend>,
    limits: UploadConfig,
}

impl FileService {
    pub fn new(backend: Arc<dyn ApiBackend>, limits: UploadConfig) -> Self {
        Self { backend, limits }
    }

    pub(crate) fn backend(&self) -> &dyn ApiBackend {
        self.backend.as_ref()
    }

    pub(crate) fn limits(&self) -> &UploadConfig {
        &self.limits
    }

    pub async fn upload(&self, file: &LocalFile) -> Result<UploadedFile> {
        upload::upload_file(self, file).await
    }
}

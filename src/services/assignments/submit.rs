use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::requests::SubmitRequest;
use crate::models::assignments::responses::AssignmentRecord;
use crate::models::files::entities::LocalFile;
use crate::services::FileService;

/// 一次提交弹窗会话的草稿状态
///
/// 弹窗打开时创建，关闭或提交成功后重置；in_flight 只归本协调器管。
#[derive(Debug, Default)]
pub struct SubmissionDraft {
    selected: Option<AssignmentRecord>,
    pub file: Option<LocalFile>,
    pub manual_url: String,
    pub note: String,
    in_flight: bool,
}

impl SubmissionDraft {
    /// 打开提交弹窗：预填已有的答案链接与备注
    pub fn open_for(record: AssignmentRecord) -> Self {
        Self {
            manual_url: record.answer_file.clone(),
            note: record.student_note.clone(),
            file: None,
            in_flight: false,
            selected: Some(record),
        }
    }

    pub fn selected(&self) -> Option<&AssignmentRecord> {
        self.selected.as_ref()
    }

    /// 选择本地文件：展示栏跟着换成文件名
    pub fn attach_file(&mut self, file: LocalFile) {
        self.manual_url = file.name.clone();
        self.file = Some(file);
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// 有文件或有手填链接才允许提交
    pub fn is_submittable(&self) -> bool {
        self.selected.is_some() && (self.file.is_some() || !self.manual_url.trim().is_empty())
    }

    /// 关闭弹窗/提交成功后重置
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub(crate) fn force_in_flight(&mut self) {
        self.in_flight = true;
    }
}

/// 提交流程：可选上传 -> 组包 -> 提交 -> 整表重拉 -> 清空草稿
///
/// 任何一步失败都只冒出一个面向用户的错误，草稿原样保留以便直接重试。
pub async fn submit_assignment(
    service: &AssignmentService,
    files: &FileService,
    draft: &mut SubmissionDraft,
) -> Result<Vec<AssignmentRecord>> {
    // 同一草稿同一时刻至多一次提交，第二次直接同步拒绝
    if draft.in_flight {
        return Err(PortalError::submission(
            "pengumpulan lain masih berjalan, tunggu sampai selesai",
        ));
    }

    let record = draft
        .selected()
        .cloned()
        .ok_or_else(|| PortalError::validation("tidak ada tugas yang dipilih"))?;

    if !draft.is_submittable() {
        return Err(PortalError::validation(
            "pilih file jawaban atau isi tautan terlebih dahulu",
        ));
    }

    draft.in_flight = true;
    let result = run_submit(service, files, &record, draft).await;
    draft.in_flight = false;

    match result {
        Ok(records) => {
            draft.reset();
            Ok(records)
        }
        // 草稿原样保留，用户可以直接重试
        Err(err) => Err(err),
    }
}

async fn run_submit(
    service: &AssignmentService,
    files: &FileService,
    record: &AssignmentRecord,
    draft: &SubmissionDraft,
) -> Result<Vec<AssignmentRecord>> {
    // 1. 有文件先上传；上传失败退化为用文件名占位，提交照常进行
    let file_url = match &draft.file {
        Some(file) => match files.upload(file).await {
            Ok(uploaded) => uploaded.url,
            Err(err) => {
                let degraded = PortalError::upload_degraded(format!(
                    "unggah gagal, memakai nama file sebagai penanda: {}",
                    err.message()
                ));
                tracing::warn!("{}", degraded);
                file.name.clone()
            }
        },
        None => draft.manual_url.clone(),
    };

    let request = SubmitRequest {
        file_jawaban_siswa: Some(file_url),
        catatan_siswa: Some(draft.note.clone()),
    };

    service
        .backend()
        .submit_assignment(record.task_id, &request)
        .await
        .map_err(as_submission_error)?;

    // 2. 永远整表重拉，不做本地补丁，保证和服务端状态一致
    let raw = service
        .backend()
        .fetch_assignments()
        .await
        .map_err(as_submission_error)?;
    Ok(raw.into_iter().map(AssignmentRecord::from).collect())
}

/// 会话失效原样透传（要触发重新登录），其余都折叠成一条提交错误
fn as_submission_error(err: PortalError) -> PortalError {
    if err.is_session_expired() {
        err
    } else {
        PortalError::submission(format!("Gagal mengumpulkan tugas: {}", err.message()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::FakeBackend;
    use crate::config::UploadConfig;
    use crate::models::assignments::entities::SubmissionStatus;

    fn upload_limits() -> UploadConfig {
        UploadConfig {
            max_size: 1024 * 1024,
            allowed_types: vec![".pdf".into(), ".zip".into()],
        }
    }

    fn services(backend: Arc<FakeBackend>) -> (AssignmentService, FileService) {
        (
            AssignmentService::new(backend.clone()),
            FileService::new(backend, upload_limits()),
        )
    }

    fn draft_with_file(file_name: &str) -> SubmissionDraft {
        let record =
            AssignmentRecord::sample(7, "RPL", SubmissionStatus::BelumMengerjakan);
        let mut draft = SubmissionDraft::open_for(record);
        draft.attach_file(LocalFile::new(file_name, vec![1, 2, 3]));
        draft.note = "sudah selesai".into();
        draft
    }

    #[tokio::test]
    async fn test_submit_uses_uploaded_url() {
        let backend = Arc::new(FakeBackend {
            uploaded_url: "https://files.example/uploads/42.pdf".into(),
            ..FakeBackend::default()
        });
        let (assignments, files) = services(backend.clone());
        let mut draft = draft_with_file("jawaban.pdf");

        assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap();

        let submitted = backend.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].0, 7);
        assert_eq!(
            submitted[0].1.file_jawaban_siswa.as_deref(),
            Some("https://files.example/uploads/42.pdf")
        );
        assert_eq!(submitted[0].1.catatan_siswa.as_deref(), Some("sudah selesai"));
        // 成功后草稿被清空
        assert!(draft.selected().is_none());
        assert!(draft.file.is_none());
    }

    #[tokio::test]
    async fn test_upload_failure_falls_back_to_file_name() {
        let backend = Arc::new(FakeBackend {
            upload_error: Some(PortalError::remote_data("HTTP error! status: 502")),
            ..FakeBackend::default()
        });
        let (assignments, files) = services(backend.clone());
        let mut draft = draft_with_file("answer.pdf");

        assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap();

        // 降级模式：提交仍然发生，引用退化成文件名
        let submitted = backend.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].1.file_jawaban_siswa.as_deref(), Some("answer.pdf"));
    }

    #[tokio::test]
    async fn test_empty_draft_is_rejected_without_network() {
        let backend = Arc::new(FakeBackend::default());
        let (assignments, files) = services(backend.clone());
        let record = AssignmentRecord::sample(7, "RPL", SubmissionStatus::BelumMengerjakan);
        let mut draft = SubmissionDraft::open_for(record);
        draft.manual_url.clear();

        let err = assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(backend.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_rejected_while_in_flight() {
        let backend = Arc::new(FakeBackend::default());
        let (assignments, files) = services(backend.clone());
        let mut draft = draft_with_file("jawaban.pdf");
        draft.force_in_flight();

        let err = assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(backend.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft_for_retry() {
        let backend = Arc::new(FakeBackend {
            submit_error: Some(PortalError::remote_data("HTTP error! status: 500")),
            ..FakeBackend::default()
        });
        let (assignments, files) = services(backend);
        let mut draft = draft_with_file("jawaban.pdf");

        let err = assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");
        // 草稿原样保留：文件、备注、选中的任务都还在
        assert!(draft.selected().is_some());
        assert!(draft.file.is_some());
        assert_eq!(draft.note, "sudah selesai");
        assert!(!draft.is_in_flight());
    }

    #[tokio::test]
    async fn test_session_expired_passes_through() {
        let backend = Arc::new(FakeBackend {
            submit_error: Some(PortalError::session_expired("HTTP 401")),
            ..FakeBackend::default()
        });
        let (assignments, files) = services(backend);
        let mut draft = draft_with_file("jawaban.pdf");

        let err = assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap_err();
        // 会话失效不许被折叠成普通提交错误
        assert!(err.is_session_expired());
    }

    #[tokio::test]
    async fn test_manual_url_used_when_no_file() {
        let backend = Arc::new(FakeBackend::default());
        let (assignments, files) = services(backend.clone());
        let record = AssignmentRecord::sample(9, "NLP", SubmissionStatus::Mengerjakan);
        let mut draft = SubmissionDraft::open_for(record);
        draft.manual_url = "https://drive.example/d/123".into();

        assignments
            .submit_assignment(&files, &mut draft)
            .await
            .unwrap();

        let submitted = backend.submitted.lock().unwrap();
        assert_eq!(
            submitted[0].1.file_jawaban_siswa.as_deref(),
            Some("https://drive.example/d/123")
        );
        assert_eq!(*backend.upload_calls.lock().unwrap(), 0);
    }
}

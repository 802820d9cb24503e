pub mod deadline;
pub mod delete;
pub mod detail;
pub mod filter;
pub mod group;
pub mod list;
pub mod stats;
pub mod submit;

use std::sync::Arc;

use super::{FileService, LoadGuard, Loaded};
use crate::client::ApiBackend;
use crate::errors::Result;
use crate::models::assignments::responses::{AssignmentRecord, SubmissionDetailView};

pub use deadline::{format_deadline, is_past_deadline};
pub use filter::{FilterState, SEMUA, filter_assignments, status_options, subject_options};
pub use group::group_by_subject;
pub use stats::{AssignmentStatistics, compute_statistics};
pub use submit::SubmissionDraft;

/// 学生任务页服务
pub struct AssignmentService {
    backend: Arc<dyn ApiBackend>,
    loads: LoadGuard,
}

impl AssignmentService {
    pub fn new(backend: Arc<dyn ApiBackend>) -> Self {
        Self {
            backend,
            loads: LoadGuard::default(),
        }
    }

    pub(crate) fn backend(&self) -> &dyn ApiBackend {
        self.backend.as_ref()
    }

    pub(crate) fn loads(&self) -> &LoadGuard {
        &self.loads
    }

    /// 拉取任务列表并归一化
    pub async fn load_assignments(&self) -> Result<Loaded<Vec<AssignmentRecord>>> {
        list::load_assignments(self).await
    }

    /// 拉取某个任务的提交明细
    pub async fn submission_detail(&self, task_id: i64) -> Result<SubmissionDetailView> {
        detail::submission_detail(self, task_id).await
    }

    /// 执行一次提交流程（上传 -> 提交 -> 整表重拉）
    pub async fn submit_assignment(
        &self,
        files: &FileService,
        draft: &mut SubmissionDraft,
    ) -> Result<Vec<AssignmentRecord>> {
        submit::submit_assignment(self, files, draft).await
    }

    /// 撤回提交并整表重拉
    pub async fn delete_submission(&self, task_id: i64) -> Result<Vec<AssignmentRecord>> {
        delete::delete_submission(self, task_id).await
    }
}

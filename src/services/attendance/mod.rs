pub mod detail;
pub mod filter;
pub mod list;
pub mod stats;

use std::sync::Arc;

use super::{LoadGuard, Loaded};
use crate::client::ApiBackend;
use crate::errors::Result;

pub use detail::AttendancePage;
pub use filter::filter_attendance;
pub use list::page_attendance;
pub use stats::{AttendanceSummary, summarize_attendance};

/// 考勤页服务
pub struct AttendanceService {
    backend: Arc<dyn ApiBackend>,
    loads: LoadGuard,
}

impl AttendanceService {
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

    /// 加载某课程的考勤页（课程信息 + 考勤明细，同时发出）
    pub async fn load_detail(
        &self,
        schedule_id: i64,
        student_id: i64,
    ) -> Result<Loaded<AttendancePage>> {
        detail::load_detail(self, schedule_id, student_id).await
    }
}

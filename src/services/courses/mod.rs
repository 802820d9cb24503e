pub mod list;

use std::sync::Arc;

use crate::client::{ApiBackend, CourseScope};
use crate::errors::Result;
use crate::models::courses::responses::CourseView;

/// 课程列表服务
pub struct CourseService {
    backend: Arc<dyn ApiBackend>,
}

impl CourseService {
    pub fn new(backend: Arc<dyn ApiBackend>) -> Self {
        Self { backend }
    }

    pub(crate) fn backend(&self) -> &dyn ApiBackend {
        self.backend.as_ref()
    }

    pub async fn list_courses(&self, scope: CourseScope) -> Result<Vec<CourseView>> {
        list::list_courses(self, scope).await
    }
}

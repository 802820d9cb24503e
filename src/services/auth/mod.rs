pub mod register;

use std::sync::Arc;

use crate::client::ApiBackend;
use crate::errors::Result;

pub use register::{FieldState, RegistrationField, RegistrationForm};

/// 注册服务（登录/登出在核心之外）
pub struct AuthService {
    backend: Arc<dyn ApiBackend>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn ApiBackend>) -> Self {
        Self { backend }
    }

    pub(crate) fn backend(&self) -> &dyn ApiBackend {
        self.backend.as_ref()
    }

    /// 提交教师注册表单
    pub async fn register_guru(&self, form: &mut RegistrationForm) -> Result<()> {
        register::register_guru(self, form).await
    }
}

use serde::{Deserialize, Serialize};

/// 教师注册请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterGuruRequest {
    pub nip: String,
    pub nama_lengkap: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

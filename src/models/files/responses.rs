use serde::{Deserialize, Serialize};

/// 上传接口的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    #[serde(default)]
    pub filename: String,
}

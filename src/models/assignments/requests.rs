use serde::{Deserialize, Serialize};

/// 提交/更新作业的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_jawaban_siswa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan_siswa: Option<String>,
}

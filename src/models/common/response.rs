use serde::{Deserialize, Serialize};

use crate::errors::{PortalError, Result};

// 后端统一的响应包装结构
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub count: i64,
}

impl<T> Envelope<T> {
    /// success=true 时取出 data，否则转换为远程数据错误
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(PortalError::remote_data("server melaporkan success=false"));
        }
        self.data
            .ok_or_else(|| PortalError::remote_data("envelope tanpa field data"))
    }
}

impl<T> Envelope<T> {
    pub fn success(data: T, count: i64) -> Self {
        Self {
            success: true,
            data: Some(data),
            count,
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            data: None,
            count: 0,
        }
    }
}

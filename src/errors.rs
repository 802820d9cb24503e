//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 所有远程调用层的错误都在调用点转换成这里的类型，不允许裸错误继续向上传播。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    Validation("E001", "Validation Error"),
    RemoteData("E002", "Remote Data Error"),
    SessionExpired("E003", "Session Expired"),
    Submission("E004", "Submission Error"),
    UploadDegraded("E005", "Upload Degraded"),
    FileOperation("E006", "File Operation Error"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Configuration("E009", "Configuration Error"),
}

impl PortalError {
    /// 会话失效必须触发登录跳转，不允许本地重试
    pub fn is_session_expired(&self) -> bool {
        matches!(self, PortalError::SessionExpired(_))
    }

    /// 可恢复错误：调用方可以保留现场并重试
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PortalError::RemoteData(_) | PortalError::Submission(_) | PortalError::UploadDegraded(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        PortalError::RemoteData(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::validation("test").code(), "E001");
        assert_eq!(PortalError::remote_data("test").code(), "E002");
        assert_eq!(PortalError::session_expired("test").code(), "E003");
        assert_eq!(PortalError::upload_degraded("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortalError::remote_data("test").error_type(),
            "Remote Data Error"
        );
        assert_eq!(
            PortalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PortalError::submission("Gagal mengumpulkan tugas");
        assert_eq!(err.message(), "Gagal mengumpulkan tugas");
    }

    #[test]
    fn test_session_expired_is_not_retryable() {
        let err = PortalError::session_expired("401");
        assert!(err.is_session_expired());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_format_simple() {
        let err = PortalError::remote_data("envelope success=false");
        let formatted = err.format_simple();
        assert!(formatted.contains("Remote Data Error"));
        assert!(formatted.contains("envelope success=false"));
    }
}

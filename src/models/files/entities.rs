use serde::{Deserialize, Serialize};

/// 待上传的本地文件
///
/// 上传失败时提交流程仍会用 name 作为占位引用，所以文件名必须保留
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalFile {
    pub name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// 从磁盘读取（CLI 与测试用）
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }

    /// 小写扩展名，带点，例如 ".pdf"
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

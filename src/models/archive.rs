//! # 归档文件数据模型
//!
//! 备份目录下的镜像归档文件，每次列出时重新枚举。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 构造
//! - 被 `commands/load.rs`, `commands/delete.rs`, `commands/list.rs` 使用

use std::path::PathBuf;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// 镜像归档文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    /// 完整路径
    pub path: PathBuf,

    /// 文件大小（字节）
    pub size_bytes: u64,
}

impl ArchiveFile {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        ArchiveFile { path, size_bytes }
    }

    /// 文件名（不含目录）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// 以 MB 为单位的大小
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }

    /// 格式化大小，保留两位小数
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_mb())
    }
}

impl std::fmt::Display for ArchiveFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_display() {
        let archive = ArchiveFile::new(PathBuf::from("/backups/nginx_latest.tar"), 3 * 1024 * 1024 / 2);
        assert_eq!(archive.size_display(), "1.50 MB");
        assert_eq!(archive.file_name(), "nginx_latest.tar");
    }
}

//! # 归档文件收集器
//!
//! 在备份目录中按 glob 模式收集归档文件列表。
//!
//! ## 功能
//! - 仅扫描目录第一层
//! - glob 模式匹配文件名
//! - 按文件名排序，保证编号稳定
//!
//! ## 依赖关系
//! - 被 `commands/load.rs`, `commands/delete.rs`, `commands/list.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::models::ArchiveFile;

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 归档文件收集器
pub struct FileCollector {
    /// 扫描目录
    dir: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            patterns: Vec::new(),
        }
    }

    /// 按扩展名匹配（如 `tar` -> `*.tar`）
    pub fn with_extension(self, extension: &str) -> Self {
        self.with_pattern(&format!("*.{}", extension))
    }

    /// 设置匹配模式（逗号分隔的多模式）；无效模式忽略并记录日志
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match Pattern::new(s) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(pattern = s, error = %e, "ignoring invalid file pattern");
                    None
                }
            })
            .collect();
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<ArchiveFile> {
        if !self.dir.is_dir() {
            tracing::debug!(dir = %self.dir.display(), "archive directory does not exist");
            return vec![];
        }

        let mut files: Vec<ArchiveFile> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| {
                let size = e.metadata().map(|m| m.len()).unwrap_or(0);
                ArchiveFile::new(e.path().to_path_buf(), size)
            })
            .collect();

        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

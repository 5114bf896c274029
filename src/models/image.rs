//! # 镜像引用数据模型
//!
//! 每次列出时从容器引擎实时获取，不做持久化。
//!
//! ## 依赖关系
//! - 被 `engine/` 解析列表时构造
//! - 被 `commands/save.rs`, `commands/list.rs` 使用

use serde::Deserialize;

/// 没有仓库名和标签的悬空镜像
pub const DANGLING_REPO_TAG: &str = "<none>:<none>";

/// 容器镜像引用
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    /// `repository:tag`，作为显示和导出的唯一键
    pub repo_tag: String,

    /// 引擎给出的镜像 ID
    pub id: String,

    /// 人类可读的大小（如 `72.8MB`）
    pub size: String,
}

impl ImageRef {
    #[cfg(test)]
    pub fn new(repo_tag: impl Into<String>, id: impl Into<String>, size: impl Into<String>) -> Self {
        ImageRef {
            repo_tag: repo_tag.into(),
            id: id.into(),
            size: size.into(),
        }
    }

    /// 是否为悬空镜像
    pub fn is_dangling(&self) -> bool {
        self.repo_tag == DANGLING_REPO_TAG
    }

    /// 导出归档的文件名：`/` 和 `:` 替换为 `_`
    pub fn archive_file_name(&self, extension: &str) -> String {
        format!("{}.{}", sanitize_name(&self.repo_tag), extension)
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repo_tag)
    }
}

/// 将镜像引用转为可用作文件名的字符串
pub fn sanitize_name(repo_tag: &str) -> String {
    repo_tag.replace(['/', ':'], "_")
}

//! # 容器引擎模块
//!
//! 将容器引擎 CLI（docker / podman）视为不透明的外部命令，
//! 通过 `ContainerEngine` trait 暴露所需的五个操作。
//!
//! ## 依赖关系
//! - 被 `session/` 和 `commands/` 使用
//! - 子模块: cli（真实子进程实现）, listing（列表解析）

pub mod cli;
pub mod listing;

#[cfg(test)]
pub mod fake;

pub use cli::CliEngine;

use crate::error::Result;
use crate::models::ImageRef;

use std::path::Path;

/// 容器引擎操作
pub trait ContainerEngine {
    /// 引擎程序名（用于提示信息）
    fn program(&self) -> &str;

    /// 检查引擎是否安装，返回版本信息
    fn check_installed(&self) -> Result<String>;

    /// 检查守护进程是否在运行
    fn check_daemon(&self) -> Result<()>;

    /// 列出本地镜像（不含悬空镜像）
    fn list_images(&self) -> Result<Vec<ImageRef>>;

    /// 将镜像导出到归档文件
    fn save_image(&self, image: &ImageRef, dest: &Path) -> Result<()>;

    /// 从归档文件导入镜像，返回引擎的输出摘要
    fn load_archive(&self, archive: &Path) -> Result<String>;
}

//! # 数据模型模块
//!
//! 定义镜像引用和归档文件数据模型。
//!
//! ## 依赖关系
//! - 被 `engine/`, `batch/` 和 `commands/` 使用
//! - 子模块: image, archive

pub mod archive;
pub mod image;

pub use archive::ArchiveFile;
pub use image::ImageRef;

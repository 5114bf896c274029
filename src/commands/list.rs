//! # 列表命令实现
//!
//! 以表格显示当前镜像或已保存的归档文件，并返回列表供后续选择。
//!
//! ## 依赖关系
//! - 被 `commands/save.rs`, `commands/load.rs`, `commands/delete.rs` 复用
//! - 使用 `batch/collector.rs` 枚举归档
//! - 使用 `tabled` 渲染表格

use super::Context;
use crate::batch::FileCollector;
use crate::config::Config;
use crate::error::Result;
use crate::models::{ArchiveFile, ImageRef};
use crate::utils::output::Output;

use tabled::{Table, Tabled};

/// 镜像表格行
#[derive(Debug, Clone, Tabled)]
struct ImageRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Image")]
    repo_tag: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// 归档表格行
#[derive(Debug, Clone, Tabled)]
struct ArchiveRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// 枚举备份目录中的归档文件
pub fn collect_archives(config: &Config) -> Vec<ArchiveFile> {
    FileCollector::new(config.backup_dir())
        .with_extension(&config.archive_extension)
        .collect()
}

/// 打印编号的镜像表格
pub fn print_image_table(out: &Output, images: &[ImageRef]) {
    let rows: Vec<ImageRow> = images
        .iter()
        .enumerate()
        .map(|(i, img)| ImageRow {
            index: i + 1,
            repo_tag: img.repo_tag.clone(),
            id: img.id.clone(),
            size: img.size.clone(),
        })
        .collect();
    out.block(Table::new(&rows));
    out.blank();
}

/// 打印编号的归档表格
pub fn print_archive_table(out: &Output, archives: &[ArchiveFile]) {
    let rows: Vec<ArchiveRow> = archives
        .iter()
        .enumerate()
        .map(|(i, a)| ArchiveRow {
            index: i + 1,
            name: a.file_name(),
            size: a.size_display(),
        })
        .collect();
    out.block(Table::new(&rows));
    out.blank();
}

/// 列出当前镜像
pub fn images(ctx: &mut Context<'_>) -> Result<Vec<ImageRef>> {
    let out = *ctx.out();
    out.header("Current Container Images");

    let images = ctx.engine.list_images()?;
    if images.is_empty() {
        out.warning("No container images found");
        out.blank();
        return Ok(images);
    }

    out.success(&format!("Found {} image(s):", images.len()));
    out.blank();
    print_image_table(&out, &images);
    Ok(images)
}

/// 列出已保存的归档文件
pub fn archives(ctx: &mut Context<'_>) -> Vec<ArchiveFile> {
    let out = *ctx.out();
    out.header("Saved Archive Files");

    let archives = collect_archives(ctx.config);
    if archives.is_empty() {
        out.warning(&format!(
            "No .{} files found in {}",
            ctx.config.archive_extension,
            ctx.config.backup_dir().display()
        ));
        out.blank();
        return archives;
    }

    out.success(&format!("Found {} archive file(s):", archives.len()));
    out.blank();
    print_archive_table(&out, &archives);
    archives
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{test_config, with_context};
    use super::*;
    use crate::engine::fake::FakeEngine;
    use crate::utils::prompt::ScriptedPrompt;

    #[test]
    fn test_list_images_returns_engine_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&["nginx:latest", "redis:7"]);
        let mut prompt = ScriptedPrompt::default();

        let images = with_context(&config, &engine, &mut prompt, |ctx| images(ctx)).unwrap();
        let keys: Vec<_> = images.iter().map(|i| i.repo_tag.as_str()).collect();
        assert_eq!(keys, vec!["nginx:latest", "redis:7"]);
    }

    #[test]
    fn test_list_images_propagates_engine_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut engine = FakeEngine::with_images(&["nginx:latest"]);
        engine.listing_fails = true;
        let mut prompt = ScriptedPrompt::default();

        let result = with_context(&config, &engine, &mut prompt, |ctx| images(ctx));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_archives() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.tar"), b"12").unwrap();
        std::fs::write(dir.path().join("a.tar"), b"1").unwrap();
        std::fs::write(dir.path().join("readme.md"), b"1").unwrap();
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]);
        let mut prompt = ScriptedPrompt::default();

        let found = with_context(&config, &engine, &mut prompt, |ctx| archives(ctx));
        let names: Vec<_> = found.iter().map(|a| a.file_name()).collect();
        assert_eq!(names, vec!["a.tar", "b.tar"]);
    }
}

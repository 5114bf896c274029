//! # save 命令实现
//!
//! 将全部或选中的镜像导出为备份目录下的归档文件。
//!
//! ## 功能
//! - `[A]` 全部 / `[S]` 指定镜像
//! - 文件名由 `repository:tag` 转换（`/` 和 `:` 替换为 `_`）
//! - 单个镜像失败不影响其余镜像
//!
//! ## 依赖关系
//! - 使用 `commands/list.rs` 显示镜像
//! - 使用 `batch/runner.rs` 顺序执行

use super::{ask_scope, list, pick, Context, Outcome, Scope};
use crate::batch::BatchRunner;
use crate::error::Result;

/// 执行 save 命令
pub fn execute(ctx: &mut Context<'_>) -> Result<Outcome> {
    let out = *ctx.out();
    out.header("Save Container Images");

    let scope = ask_scope(ctx, "Save ALL images", "Save SPECIFIC images")?;

    let images = ctx.engine.list_images()?;
    if images.is_empty() {
        out.warning("No container images found. Nothing to save!");
        out.blank();
        return Ok(Outcome::Completed);
    }

    let selected = match scope {
        Scope::All => images,
        Scope::Specific => {
            out.blank();
            list::print_image_table(&out, &images);
            out.info("Enter image numbers (e.g., 1,3-5 or 1,2,4):");
            let input = ctx.ask("Select:")?;
            pick(&images, &input)
        }
    };

    if selected.is_empty() {
        out.warning("No images selected. Operation cancelled!");
        out.blank();
        return Ok(Outcome::Completed);
    }

    out.separator();
    out.info(&format!("Saving {} image(s)...", selected.len()));
    out.separator();

    let config = ctx.config;
    let engine = ctx.engine;
    let result = BatchRunner::new(&out)
        .with_interrupt(ctx.interrupt)
        .with_activity("saving")
        .run(&selected, |image| {
            let file_name = image.archive_file_name(&config.archive_extension);
            let dest = config.archive_path(&file_name);
            out.mapping(&image.repo_tag, &file_name);
            engine.save_image(image, &dest)?;
            Ok(format!("Saved {}", file_name))
        });

    out.separator();
    out.done(&format!(
        "Completed! {} images saved successfully",
        result.summary()
    ));
    out.blank();

    Ok(if result.interrupted {
        Outcome::Interrupted
    } else {
        Outcome::Completed
    })
}

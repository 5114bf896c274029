//! # delete 命令实现
//!
//! 删除选中的归档文件。删除前必须键入 `YES` 确认，否则不动任何文件。
//! 确认区分大小写：`yes` 不算确认。
//!
//! ## 依赖关系
//! - 使用 `commands/list.rs` 枚举和显示归档
//! - 使用 `batch/runner.rs` 顺序执行

use super::{list, pick, Context, Outcome};
use crate::batch::BatchRunner;
use crate::error::{DimgrError, Result};

use colored::Color;
use std::fs;

/// 确认删除需要键入的文本
pub const CONFIRMATION_TOKEN: &str = "YES";

/// 执行 delete 命令
pub fn execute(ctx: &mut Context<'_>) -> Result<Outcome> {
    let out = *ctx.out();

    let archives = list::archives(ctx);
    if archives.is_empty() {
        return Ok(Outcome::Completed);
    }

    out.info("Enter file numbers to delete (e.g., 1,3-5 or 1,2,4):");
    let input = ctx.ask("Select:")?;
    let selected = pick(&archives, &input);

    if selected.is_empty() {
        out.warning("No files selected. Operation cancelled!");
        out.blank();
        return Ok(Outcome::Completed);
    }

    out.separator();
    out.warning(&format!(
        "You are about to delete {} file(s)!",
        selected.len()
    ));
    out.warning("This action is PERMANENT and cannot be undone!");
    out.separator();
    out.blank();

    out.line("Files to be deleted:");
    for archive in &selected {
        out.line(&format!("  {}", out.paint(&archive.file_name(), Color::Red)));
    }
    out.blank();

    let confirm = ctx.ask(&format!(
        "Are you sure? Type '{}' to confirm:",
        CONFIRMATION_TOKEN
    ))?;
    if confirm != CONFIRMATION_TOKEN {
        tracing::info!(count = selected.len(), "deletion not confirmed");
        out.warning("Deletion cancelled. Files are safe!");
        out.blank();
        return Ok(Outcome::Completed);
    }

    out.blank();
    let result = BatchRunner::new(&out)
        .with_interrupt(ctx.interrupt)
        .run(&selected, |archive| {
            fs::remove_file(&archive.path).map_err(|e| DimgrError::FileDeleteError {
                path: archive.path.display().to_string(),
                source: e,
            })?;
            Ok(format!("Deleted {}", archive.file_name()))
        });

    out.separator();
    out.done(&format!("Completed! {} files deleted", result.summary()));
    out.blank();

    Ok(if result.interrupted {
        Outcome::Interrupted
    } else {
        Outcome::Completed
    })
}

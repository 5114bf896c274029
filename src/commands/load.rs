//! # load 命令实现
//!
//! 将备份目录中的全部或选中归档文件导入容器引擎。
//!
//! ## 依赖关系
//! - 使用 `commands/list.rs` 枚举和显示归档
//! - 使用 `batch/runner.rs` 顺序执行

use super::{ask_scope, list, pick, Context, Outcome, Scope};
use crate::batch::BatchRunner;
use crate::error::Result;

/// 执行 load 命令
pub fn execute(ctx: &mut Context<'_>) -> Result<Outcome> {
    let out = *ctx.out();
    out.header("Load Container Images");

    let scope = ask_scope(ctx, "Load ALL archive files", "Load SPECIFIC archive files")?;

    let archives = list::collect_archives(ctx.config);
    if archives.is_empty() {
        out.warning(&format!(
            "No .{} files found in {}",
            ctx.config.archive_extension,
            ctx.config.backup_dir().display()
        ));
        out.blank();
        return Ok(Outcome::Completed);
    }

    let selected = match scope {
        Scope::All => archives,
        Scope::Specific => {
            out.blank();
            list::print_archive_table(&out, &archives);
            out.info("Enter file numbers (e.g., 1,3-5 or 1,2,4):");
            let input = ctx.ask("Select:")?;
            pick(&archives, &input)
        }
    };

    if selected.is_empty() {
        out.warning("No files selected. Operation cancelled!");
        out.blank();
        return Ok(Outcome::Completed);
    }

    out.separator();
    out.info(&format!("Loading {} file(s)...", selected.len()));
    out.separator();

    let engine = ctx.engine;
    let result = BatchRunner::new(&out)
        .with_interrupt(ctx.interrupt)
        .with_activity("loading")
        .run(&selected, |archive| {
            let summary = engine.load_archive(&archive.path)?;
            Ok(if summary.is_empty() {
                format!("Loaded {}", archive.file_name())
            } else {
                summary
            })
        });

    out.separator();
    out.done(&format!(
        "Completed! {} files loaded successfully",
        result.summary()
    ));
    out.blank();

    Ok(if result.interrupted {
        Outcome::Interrupted
    } else {
        Outcome::Completed
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{test_config, with_context};
    use super::*;
    use crate::engine::fake::FakeEngine;
    use crate::utils::prompt::ScriptedPrompt;
    use std::fs;

    fn seed(dir: &std::path::Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"layer").unwrap();
        }
    }

    #[test]
    fn test_load_all_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), &["redis_7.tar", "alpine_3.tar", "notes.txt"]);
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]).fail_load("alpine_3.tar");
        let mut prompt = ScriptedPrompt::new([""]);

        let outcome = with_context(&config, &engine, &mut prompt, execute).unwrap();

        assert_eq!(outcome, Outcome::Completed);
        let loaded: Vec<_> = engine
            .loaded
            .borrow()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(loaded, vec!["alpine_3.tar", "redis_7.tar"]);
    }

    #[test]
    fn test_load_specific() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), &["a.tar", "b.tar", "c.tar"]);
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]);
        let mut prompt = ScriptedPrompt::new(["s", "2"]);

        with_context(&config, &engine, &mut prompt, execute).unwrap();

        let loaded = engine.loaded.borrow();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].ends_with("b.tar"));
    }

    #[test]
    fn test_load_without_archives() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]);
        let mut prompt = ScriptedPrompt::new(["a"]);

        with_context(&config, &engine, &mut prompt, execute).unwrap();
        assert!(engine.loaded.borrow().is_empty());
    }
}

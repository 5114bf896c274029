//! # 命令执行模块
//!
//! 实现菜单中各操作的业务逻辑。每个操作从引擎或备份目录重新获取列表，
//! 因此选择的序号不会过期。
//!
//! ## 依赖关系
//! - 被 `session/` 调用
//! - 使用 `batch/`, `engine/`, `models/`, `utils/`
//! - 子模块: save, load, list, delete, help

pub mod delete;
pub mod help;
pub mod list;
pub mod load;
pub mod save;

use crate::batch::parse_selection;
use crate::config::Config;
use crate::engine::ContainerEngine;
use crate::error::Result;
use crate::utils::interrupt::InterruptFlag;
use crate::utils::output::Output;
use crate::utils::prompt::Prompt;

/// 菜单可执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Load,
    ListImages,
    ListArchives,
    Delete,
    Help,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Save => write!(f, "save"),
            Operation::Load => write!(f, "load"),
            Operation::ListImages => write!(f, "list-images"),
            Operation::ListArchives => write!(f, "list-archives"),
            Operation::Delete => write!(f, "delete"),
            Operation::Help => write!(f, "help"),
        }
    }
}

/// 操作结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 正常结束（包括用户取消）
    Completed,
    /// 批次被 Ctrl-C 提前终止
    Interrupted,
}

/// 操作执行上下文
pub struct Context<'a> {
    pub config: &'a Config,
    pub engine: &'a dyn ContainerEngine,
    pub prompt: &'a mut dyn Prompt,
    pub interrupt: &'a InterruptFlag,
}

impl<'a> Context<'a> {
    pub fn out(&self) -> &Output {
        &self.config.output
    }

    /// 提问；输入结束视为空回答
    pub fn ask(&mut self, question: &str) -> Result<String> {
        let question = self.config.output.bold(question);
        Ok(self.prompt.ask(&question)?.unwrap_or_default())
    }
}

/// 全部 / 指定 选择范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Specific,
}

impl Scope {
    /// 只有 `s` 表示指定，其余（包括空输入）都视为全部
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("s") {
            Scope::Specific
        } else {
            Scope::All
        }
    }
}

/// 询问 `[A]ll / [S]pecific`
fn ask_scope(ctx: &mut Context<'_>, all_label: &str, specific_label: &str) -> Result<Scope> {
    let out = *ctx.out();
    out.info("Choose an option:");
    out.line(&format!("  [A] {}", all_label));
    out.line(&format!("  [S] {}", specific_label));
    out.blank();
    let answer = ctx.ask("Your choice (A/S):")?;
    Ok(Scope::from_answer(&answer))
}

/// 根据用户输入从列表中取出选中条目（保持升序）
pub fn pick<T: Clone>(items: &[T], input: &str) -> Vec<T> {
    parse_selection(input, items.len())
        .into_iter()
        .map(|i| items[i - 1].clone())
        .collect()
}

/// 执行一个菜单操作
pub fn run(op: Operation, ctx: &mut Context<'_>) -> Result<Outcome> {
    tracing::info!(operation = %op, "running operation");
    match op {
        Operation::Save => save::execute(ctx),
        Operation::Load => load::execute(ctx),
        Operation::ListImages => list::images(ctx).map(|_| Outcome::Completed),
        Operation::ListArchives => {
            list::archives(ctx);
            Ok(Outcome::Completed)
        }
        Operation::Delete => delete::execute(ctx),
        Operation::Help => {
            help::execute(ctx.config);
            Ok(Outcome::Completed)
        }
    }
}

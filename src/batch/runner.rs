//! # 批量执行器
//!
//! 按顺序对每个选中条目执行一个可能失败的操作。
//!
//! ## 功能
//! - 单项失败只记录，不中断批次
//! - 条目之间检查用户中断标志
//! - 引擎命令阻塞期间显示 spinner
//! - 汇总 `成功数/总数`
//!
//! ## 依赖关系
//! - 被 `commands/save.rs`, `commands/load.rs`, `commands/delete.rs` 调用
//! - 使用 `utils/progress.rs` 创建 spinner
//! - 使用 `utils/interrupt.rs` 检查中断

use crate::error::Result;
use crate::utils::interrupt::InterruptFlag;
use crate::utils::output::Output;
use crate::utils::progress;

use std::fmt::Display;

/// 单个条目处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 处理失败
    Failed(String, String), // (条目名称, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 计划处理的条目数
    pub total: usize,
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
    /// 是否因用户中断提前结束
    pub interrupted: bool,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Failed(name, err) => {
                self.failed += 1;
                self.failures.push((name, err));
            }
        }
    }

    /// 已执行的条目数
    pub fn attempted(&self) -> usize {
        self.success + self.failed
    }

    /// `成功数/总数`
    pub fn summary(&self) -> String {
        format!("{}/{}", self.success, self.total)
    }
}

/// 批量执行器
pub struct BatchRunner<'a> {
    out: &'a Output,
    interrupt: Option<&'a InterruptFlag>,
    /// spinner 文本；None 表示不显示
    activity: Option<String>,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(out: &'a Output) -> Self {
        Self {
            out,
            interrupt: None,
            activity: None,
        }
    }

    /// 在条目之间检查中断标志
    pub fn with_interrupt(mut self, flag: &'a InterruptFlag) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// 执行每个条目时显示的 spinner 文本
    pub fn with_activity(mut self, activity: &str) -> Self {
        self.activity = Some(activity.to_string());
        self
    }

    /// 顺序处理条目列表
    pub fn run<T, F>(&self, items: &[T], mut action: F) -> BatchResult
    where
        T: Display,
        F: FnMut(&T) -> Result<String>,
    {
        let total = items.len();
        let mut batch_result = BatchResult {
            total,
            ..Default::default()
        };

        for (i, item) in items.iter().enumerate() {
            if self.interrupt.is_some_and(|flag| flag.is_raised()) {
                tracing::info!(
                    done = batch_result.attempted(),
                    total,
                    "batch interrupted by user"
                );
                batch_result.interrupted = true;
                break;
            }

            let name = item.to_string();
            self.out.step(i + 1, total, &name);

            let spinner = self.activity.as_deref().map(progress::create_spinner);
            let outcome = action(item);
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let result = match outcome {
                Ok(msg) => {
                    self.out.success(&msg);
                    ProcessResult::Success
                }
                Err(e) => {
                    tracing::debug!(item = %name, error = %e, "batch item failed");
                    self.out.failure(&e.to_string());
                    ProcessResult::Failed(name, e.to_string())
                }
            };
            batch_result.merge(result);
        }

        batch_result
    }
}

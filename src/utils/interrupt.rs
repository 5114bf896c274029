//! # 中断标志
//!
//! Ctrl-C 不直接终止进程，而是置位一个原子标志；批量执行器在条目之间
//! 检查该标志，会话循环据此询问是否返回主菜单。
//!
//! ## 依赖关系
//! - 被 `main.rs` 安装
//! - 被 `batch/runner.rs` 和 `session/` 读取
//! - 使用 `ctrlc` crate

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 用户中断标志
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装 Ctrl-C 处理函数，返回与之关联的标志
    pub fn install() -> Result<Self, ctrlc::Error> {
        let flag = Self::new();
        let handle = flag.clone();
        ctrlc::set_handler(move || {
            handle.raise();
        })?;
        Ok(flag)
    }

    /// 置位
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// 是否已置位
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// 读取并清除
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }
}

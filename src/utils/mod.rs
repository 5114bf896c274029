//! # 工具函数模块
//!
//! 提供美化输出、进度提示、交互输入、中断处理等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `session/` 使用
//! - 子模块: output, progress, prompt, interrupt

pub mod interrupt;
pub mod output;
pub mod progress;
pub mod prompt;

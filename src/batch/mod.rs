//! # 批量处理模块
//!
//! 选择解析、归档收集与顺序批量执行。
//!
//! ## 功能
//! - 解析 `1,3-5` 形式的选择
//! - 收集备份目录下的归档文件
//! - 顺序执行，单项失败不中断
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir` + `glob` 收集文件
//! - 使用 `indicatif` 显示 spinner

pub mod collector;
pub mod runner;
pub mod selector;

pub use collector::FileCollector;
pub use runner::BatchRunner;
pub use selector::parse_selection;

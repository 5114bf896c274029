//! # 统一错误处理模块
//!
//! 定义 dimgr 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dimgr 统一错误类型
#[derive(Error, Debug)]
pub enum DimgrError {
    // ─────────────────────────────────────────────────────────────
    // 环境错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Container engine '{program}' is not installed or not in PATH")]
    EngineNotInstalled { program: String },

    #[error("Container engine daemon is not running ('{program} info' failed)\n{stderr}")]
    DaemonNotRunning { program: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch '{command}'")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to parse image listing: {0}")]
    ListingParse(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to delete file: {path}")]
    FileDeleteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read user input")]
    InputError(#[source] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DimgrError>;

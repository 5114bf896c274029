//! # 运行配置
//!
//! 启动时构造一次，之后只读传递：备份目录、引擎程序名、归档扩展名、
//! 以及输出格式化能力。
//!
//! ## 依赖关系
//! - 由 `main.rs` 从 `cli::Cli` 构造
//! - 被 `session/` 和 `commands/` 使用

use crate::cli::Cli;
use crate::utils::output::Output;

use std::fs;
use std::path::{Path, PathBuf};

/// 归档文件扩展名
pub const ARCHIVE_EXTENSION: &str = "tar";

/// 运行配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 归档文件目录
    pub backup_dir: PathBuf,
    /// 容器引擎程序名
    pub engine: String,
    /// 归档扩展名（不含点）
    pub archive_extension: String,
    /// 输出格式化
    pub output: Output,
}

impl Config {
    pub fn new(backup_dir: impl Into<PathBuf>, engine: impl Into<String>, output: Output) -> Self {
        Config {
            backup_dir: backup_dir.into(),
            engine: engine.into(),
            archive_extension: ARCHIVE_EXTENSION.to_string(),
            output,
        }
    }

    /// 从命令行参数构造；`NO_COLOR` 环境变量同样关闭颜色
    pub fn from_cli(cli: &Cli) -> Self {
        let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
        Config::new(&cli.backup_dir, &cli.engine, Output::new(color))
    }

    /// 确保备份目录存在；创建失败时退回当前目录
    pub fn ensure_backup_dir(mut self) -> Self {
        if let Err(e) = fs::create_dir_all(&self.backup_dir) {
            tracing::debug!(
                dir = %self.backup_dir.display(),
                error = %e,
                "cannot create backup directory, falling back to current directory"
            );
            self.output.warning(&format!(
                "Error creating backup directory '{}': {}",
                self.backup_dir.display(),
                e
            ));
            self.backup_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        }
        self
    }

    /// 某镜像归档在备份目录中的完整路径
    pub fn archive_path(&self, file_name: &str) -> PathBuf {
        self.backup_dir.join(file_name)
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }
}

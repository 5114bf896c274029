//! # CLI 模块
//!
//! 使用 `clap` 定义启动参数。程序本身是交互式菜单，没有子命令；
//! 参数只负责构造一次性的运行配置。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 解析结果传给 `config.rs`

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// dimgr - 容器镜像备份管理器
#[derive(Parser, Debug)]
#[command(name = "dimgr")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Interactively save container images to tar archives and load them back",
    long_about = None
)]
pub struct Cli {
    /// Directory where image archives are stored
    #[arg(long, env = "DIMGR_BACKUP_DIR", default_value = "backups")]
    pub backup_dir: PathBuf,

    /// Container engine executable (docker, podman, ...)
    #[arg(long, env = "DIMGR_ENGINE", default_value = "docker")]
    pub engine: String,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 根据 `-v` 次数得到默认日志级别
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dimgr"]).unwrap();
        assert_eq!(cli.engine, "docker");
        assert!(!cli.no_color);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "dimgr",
            "--backup-dir",
            "/srv/images",
            "--engine",
            "podman",
            "--no-color",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.backup_dir, PathBuf::from("/srv/images"));
        assert_eq!(cli.engine, "podman");
        assert!(cli.no_color);
        assert_eq!(cli.log_level(), "debug");
    }
}

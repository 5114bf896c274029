//! # dimgr - 容器镜像备份管理器
//!
//! 交互式地把容器镜像保存为 tar 归档，并从归档重新导入。
//! 容器引擎（docker / podman）作为外部命令调用。
//!
//! ## 菜单
//! 1. 保存镜像  2. 导入归档  3. 列出镜像  4. 列出归档
//! 5. 删除归档  6. 帮助      7. 退出
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (启动参数定义)
//!   ├── config.rs   (运行配置)
//!   ├── session/    (菜单状态机)
//!   │     └── commands/  (各操作逻辑)
//!   │           ├── batch/   (选择解析、文件收集、批量执行)
//!   │           ├── engine/  (容器引擎 CLI 封装)
//!   │           └── models/  (数据模型)
//!   ├── utils/      (输出、进度、输入、中断)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod engine;
mod error;
mod models;
mod session;
mod utils;

use anyhow::Context as _;
use clap::Parser;
use cli::Cli;
use config::Config;
use engine::CliEngine;
use session::state::ExitStatus;
use session::Session;
use tracing_subscriber::EnvFilter;
use utils::interrupt::InterruptFlag;
use utils::prompt::TermPrompt;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_tracing(&cli);

    let config = Config::from_cli(&cli).ensure_backup_dir();

    match run(&config) {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            config.output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

/// 日志输出到 stderr；`RUST_LOG` 优先于 `-v`
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dimgr={}", cli.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> anyhow::Result<ExitStatus> {
    let interrupt = InterruptFlag::install().context("failed to install Ctrl-C handler")?;
    let engine = CliEngine::new(&config.engine);
    let mut prompt = TermPrompt::new();

    let mut session = Session::new(config, &engine, &mut prompt, &interrupt);
    session.display_header();
    if let Err(e) = session.check_environment() {
        config.output.error(&e.to_string());
        // 终端中等待回车后再退出
        if console::user_attended() {
            session.pause_before_exit();
        }
        return Ok(ExitStatus::Failure);
    }

    Ok(session.run())
}

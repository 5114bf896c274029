//! # 基于子进程的引擎实现
//!
//! 每次操作都同步调用引擎 CLI 并等待退出；退出码 0 视为成功，
//! 否则携带 stderr 返回 `CommandFailed`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 构造
//! - 使用 `engine/listing.rs` 解析镜像列表

use super::listing::{parse_image_listing, IMAGE_LIST_FORMAT};
use super::ContainerEngine;
use crate::error::{DimgrError, Result};
use crate::models::ImageRef;

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

/// 调用外部 CLI 的容器引擎
#[derive(Debug, Clone)]
pub struct CliEngine {
    program: String,
}

impl CliEngine {
    pub fn new(program: impl Into<String>) -> Self {
        CliEngine {
            program: program.into(),
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// 运行引擎命令，非零退出码转换为错误
    fn run(&self, args: &[&str]) -> Result<Output> {
        let command = self.command_line(args);
        tracing::debug!(%command, "running engine command");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    DimgrError::EngineNotInstalled {
                        program: self.program.clone(),
                    }
                } else {
                    DimgrError::CommandSpawn {
                        command: command.clone(),
                        source: e,
                    }
                }
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(%command, status = ?output.status.code(), %stderr, "engine command failed");
            Err(DimgrError::CommandFailed { command, stderr })
        }
    }
}

impl ContainerEngine for CliEngine {
    fn program(&self) -> &str {
        &self.program
    }

    fn check_installed(&self) -> Result<String> {
        match self.run(&["--version"]) {
            Ok(out) => Ok(String::from_utf8_lossy(&out.stdout).trim().to_string()),
            Err(DimgrError::CommandFailed { .. }) => Err(DimgrError::EngineNotInstalled {
                program: self.program.clone(),
            }),
            Err(e) => Err(e),
        }
    }

    fn check_daemon(&self) -> Result<()> {
        match self.run(&["info"]) {
            Ok(_) => Ok(()),
            Err(DimgrError::CommandFailed { stderr, .. }) => Err(DimgrError::DaemonNotRunning {
                program: self.program.clone(),
                stderr,
            }),
            Err(e) => Err(e),
        }
    }

    fn list_images(&self) -> Result<Vec<ImageRef>> {
        let out = self.run(&["images", "--format", IMAGE_LIST_FORMAT])?;
        parse_image_listing(&String::from_utf8_lossy(&out.stdout))
    }

    fn save_image(&self, image: &ImageRef, dest: &Path) -> Result<()> {
        let dest = dest.to_string_lossy();
        self.run(&["save", "-o", &dest, &image.repo_tag])?;
        Ok(())
    }

    fn load_archive(&self, archive: &Path) -> Result<String> {
        let archive = archive.to_string_lossy();
        let out = self.run(&["load", "-i", &archive])?;
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_installed() {
        let engine = CliEngine::new("dimgr-no-such-engine-binary");
        match engine.check_installed() {
            Err(DimgrError::EngineNotInstalled { program }) => {
                assert_eq!(program, "dimgr-no-such-engine-binary")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_command_line_formatting() {
        let engine = CliEngine::new("podman");
        assert_eq!(engine.command_line(&["load", "-i", "a.tar"]), "podman load -i a.tar");
        assert_eq!(engine.program(), "podman");
    }
}

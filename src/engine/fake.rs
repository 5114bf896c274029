//! 测试用的内存引擎：记录调用，按名称注入失败。

use super::ContainerEngine;
use crate::error::{DimgrError, Result};
use crate::models::ImageRef;

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub images: Vec<ImageRef>,
    pub installed: bool,
    pub daemon_running: bool,
    pub listing_fails: bool,
    /// 导出时失败的 `repo:tag`
    pub failing_saves: HashSet<String>,
    /// 导入时失败的文件名
    pub failing_loads: HashSet<String>,
    pub saved: RefCell<Vec<(String, PathBuf)>>,
    pub loaded: RefCell<Vec<PathBuf>>,
}

impl FakeEngine {
    pub fn with_images(repo_tags: &[&str]) -> Self {
        FakeEngine {
            images: repo_tags
                .iter()
                .enumerate()
                .map(|(i, t)| ImageRef::new(*t, format!("{:012x}", i + 1), "10MB"))
                .collect(),
            installed: true,
            daemon_running: true,
            ..Default::default()
        }
    }

    pub fn fail_save(mut self, repo_tag: &str) -> Self {
        self.failing_saves.insert(repo_tag.to_string());
        self
    }

    pub fn fail_load(mut self, file_name: &str) -> Self {
        self.failing_loads.insert(file_name.to_string());
        self
    }

    pub fn save_count(&self) -> usize {
        self.saved.borrow().len()
    }
}

impl ContainerEngine for FakeEngine {
    fn program(&self) -> &str {
        "fake"
    }

    fn check_installed(&self) -> Result<String> {
        if self.installed {
            Ok("fake version 1.0".to_string())
        } else {
            Err(DimgrError::EngineNotInstalled {
                program: "fake".to_string(),
            })
        }
    }

    fn check_daemon(&self) -> Result<()> {
        if self.daemon_running {
            Ok(())
        } else {
            Err(DimgrError::DaemonNotRunning {
                program: "fake".to_string(),
                stderr: "cannot connect".to_string(),
            })
        }
    }

    fn list_images(&self) -> Result<Vec<ImageRef>> {
        if self.listing_fails {
            return Err(DimgrError::CommandFailed {
                command: "fake images".to_string(),
                stderr: "listing broken".to_string(),
            });
        }
        Ok(self.images.clone())
    }

    fn save_image(&self, image: &ImageRef, dest: &Path) -> Result<()> {
        self.saved
            .borrow_mut()
            .push((image.repo_tag.clone(), dest.to_path_buf()));
        if self.failing_saves.contains(&image.repo_tag) {
            return Err(DimgrError::CommandFailed {
                command: format!("fake save {}", image.repo_tag),
                stderr: "no space left on device".to_string(),
            });
        }
        std::fs::write(dest, image.id.as_bytes()).map_err(|e| DimgrError::CommandFailed {
            command: format!("fake save {}", image.repo_tag),
            stderr: e.to_string(),
        })
    }

    fn load_archive(&self, archive: &Path) -> Result<String> {
        self.loaded.borrow_mut().push(archive.to_path_buf());
        let name = archive
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if self.failing_loads.contains(&name) {
            return Err(DimgrError::CommandFailed {
                command: format!("fake load {}", name),
                stderr: "invalid tar header".to_string(),
            });
        }
        Ok(format!("Loaded image: {}", name))
    }
}

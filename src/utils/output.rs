//! # 美化输出工具
//!
//! 提供统一的终端输出样式。`Output` 在启动时构造一次，随 `Config` 传递，
//! 不依赖全局颜色状态。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{Color, Colorize};
use std::fmt::Display;

/// 终端输出格式化能力
#[derive(Debug, Clone, Copy)]
pub struct Output {
    color: bool,
}

impl Output {
    pub fn new(color: bool) -> Self {
        Output { color }
    }

    fn tag(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// 加粗文本
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// 带颜色的文本
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// 打印成功消息
    pub fn success(&self, msg: &str) {
        println!("{} {}", self.tag("[OK]", Color::Green), msg);
    }

    /// 打印错误消息
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", self.tag("[ERR]", Color::Red), msg);
    }

    /// 打印失败消息（批量中的单项失败，输出到 stdout 与进度保持顺序）
    pub fn failure(&self, msg: &str) {
        println!("{} {}", self.tag("[FAIL]", Color::Red), msg);
    }

    /// 打印警告消息
    pub fn warning(&self, msg: &str) {
        println!("{} {}", self.tag("[WARN]", Color::Yellow), msg);
    }

    /// 打印信息消息
    pub fn info(&self, msg: &str) {
        println!("{} {}", self.tag("[*]", Color::Blue), msg);
    }

    /// 打印完成消息
    pub fn done(&self, msg: &str) {
        println!("{} {}", self.tag("[DONE]", Color::Green), msg);
    }

    /// 打印进度条目，如 `[2/5] nginx:latest`
    pub fn step(&self, index: usize, total: usize, name: &str) {
        println!(
            "{} {}",
            self.tag(&format!("[{}/{}]", index, total), Color::Cyan),
            name
        );
    }

    /// 打印源 -> 目标
    pub fn mapping(&self, from: &str, to: &str) {
        println!("    {} {} {}", self.dim(from), self.paint("->", Color::Cyan), to);
    }

    /// 打印标题栏
    pub fn header(&self, title: &str) {
        let line = "─".repeat(60);
        println!("\n{}", self.dim(&line));
        println!("  {}", self.bold(title));
        println!("{}\n", self.dim(&line));
    }

    /// 打印分隔线
    pub fn separator(&self) {
        println!("{}", self.dim(&"─".repeat(60)));
    }

    /// 打印粗分隔线
    pub fn rule(&self, color: Color) {
        println!("{}", self.paint(&"═".repeat(60), color));
    }

    /// 打印居中的横幅文本
    pub fn banner(&self, text: &str, color: Color) {
        let centered = format!("{:^60}", text);
        if self.color {
            println!("{}", centered.color(color).bold());
        } else {
            println!("{}", centered);
        }
    }

    /// 打印任意可显示内容（如表格）
    pub fn block(&self, content: impl Display) {
        println!("{}", content);
    }

    /// 打印普通行
    pub fn line(&self, msg: &str) {
        println!("{}", msg);
    }

    /// 打印空行
    pub fn blank(&self) {
        println!();
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = Output::new(false);
        assert_eq!(out.bold("title"), "title");
        assert_eq!(out.paint("x", Color::Red), "x");
    }
}

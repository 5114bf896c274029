//! # 交互输入
//!
//! `Prompt` 抽象出"提问并读取一行"，交互会话只依赖该 trait，
//! 测试中用脚本化实现替代终端。
//!
//! ## 依赖关系
//! - 被 `session/` 和 `commands/` 使用
//! - 使用 `console` crate 读写终端

use crate::error::{DimgrError, Result};

use console::Term;
#[cfg(test)]
use std::collections::VecDeque;
use std::io::BufRead;

/// 交互式提问
pub trait Prompt {
    /// 显示问题并读取一行（已去除首尾空白）；输入结束时返回 None
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// 基于终端的实现
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    pub fn new() -> Self {
        TermPrompt {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.term
            .write_str(&format!("{} ", question))
            .map_err(DimgrError::InputError)?;
        self.term.flush().map_err(DimgrError::InputError)?;

        if self.term.is_term() {
            let line = self.term.read_line().map_err(DimgrError::InputError)?;
            return Ok(Some(line.trim().to_string()));
        }

        // 非终端（管道输入）时需要区分 EOF
        let mut line = String::new();
        let n = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(DimgrError::InputError)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// 按预设顺序返回答案，答案用完视为输入结束
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    /// 收到的问题，便于测试断言
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// 剩余未消费的答案数
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().map(|a| a.trim().to_string()))
    }
}

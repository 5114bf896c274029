//! # 会话状态机
//!
//! 交互循环的全部控制流都由 `transition` 这张转移表决定。
//!
//! ```text
//! Menu ──选择 1-6──▶ Running(op) ──完成──▶ AwaitContinue ──回车──▶ Menu
//!  │                    │ 中断/出错                 │ exit
//!  │ 7 / EOF            ▼                          ▼
//!  └──────────────▶ Exit ◀── N ── Recovering ── Y ──▶ Menu
//! ```
//!
//! 连续 `MAX_CONSECUTIVE_FAILURES` 次操作出错后直接以失败状态退出。
//!
//! ## 依赖关系
//! - 被 `session/mod.rs` 驱动
//! - 使用 `commands::Operation`

use crate::commands::Operation;

/// 连续出错上限
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;

/// 主菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    /// 菜单编号与选项，按显示顺序
    pub const ALL: [(&'static str, MenuChoice); 7] = [
        ("1", MenuChoice::Run(Operation::Save)),
        ("2", MenuChoice::Run(Operation::Load)),
        ("3", MenuChoice::Run(Operation::ListImages)),
        ("4", MenuChoice::Run(Operation::ListArchives)),
        ("5", MenuChoice::Run(Operation::Delete)),
        ("6", MenuChoice::Run(Operation::Help)),
        ("7", MenuChoice::Exit),
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .find(|(key, _)| *key == input)
            .map(|(_, choice)| *choice)
    }

    /// 菜单描述文本
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Run(Operation::Save) => "Save images to archive files",
            MenuChoice::Run(Operation::Load) => "Load archive files as images",
            MenuChoice::Run(Operation::ListImages) => "List current images",
            MenuChoice::Run(Operation::ListArchives) => "List saved archive files",
            MenuChoice::Run(Operation::Delete) => "Delete archive files",
            MenuChoice::Run(Operation::Help) => "Help & About",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// 进程退出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Normal,
    Failure,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Normal => 0,
            ExitStatus::Failure => 1,
        }
    }
}

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// 显示菜单并等待选择
    Menu,
    /// 正在执行某个操作
    Running(Operation),
    /// 操作完成，等待回车继续或 `exit`
    AwaitContinue,
    /// 中断或出错后询问是否返回菜单
    Recovering,
    /// 结束
    Exit(ExitStatus),
}

/// 驱动状态转移的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// 菜单中选择了有效选项
    Selected(MenuChoice),
    /// 菜单输入无效
    InvalidChoice,
    /// 操作正常结束
    Completed,
    /// 用户按下 Ctrl-C
    Interrupted,
    /// 操作返回了未预期的错误
    Failed,
    /// 继续（回车 / 回答 Y）
    Proceed,
    /// 退出（`exit` / 回答 N）
    Quit,
    /// 输入流结束
    EndOfInput,
}

/// 转移表。`failures` 为包含本次在内的连续出错次数。
pub fn transition(state: State, event: Event, failures: u32) -> State {
    use Event::*;
    use State::*;

    match (state, event) {
        (Exit(status), _) => Exit(status),
        (_, EndOfInput) => Exit(ExitStatus::Normal),

        (Menu, Selected(MenuChoice::Exit)) => Exit(ExitStatus::Normal),
        (Menu, Selected(MenuChoice::Run(op))) => Running(op),
        (Menu, InvalidChoice) => Menu,
        (Menu, Interrupted) => Recovering,

        (Running(_), Completed) => AwaitContinue,
        (Running(_), Interrupted) => Recovering,
        (Running(_), Failed) if failures >= MAX_CONSECUTIVE_FAILURES => Exit(ExitStatus::Failure),
        (Running(_), Failed) => Recovering,

        (AwaitContinue, Proceed) => Menu,
        (AwaitContinue, Quit) => Exit(ExitStatus::Normal),
        (AwaitContinue, Interrupted) => Recovering,

        (Recovering, Proceed) => Menu,
        (Recovering, Quit) | (Recovering, Interrupted) => Exit(ExitStatus::Normal),

        (state, event) => {
            tracing::debug!(?state, ?event, "event ignored in current state");
            state
        }
    }
}

/// 带连续出错计数的状态机
#[derive(Debug)]
pub struct Machine {
    state: State,
    consecutive_failures: u32,
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            state: State::Menu,
            consecutive_failures: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// 触发事件并返回新状态
    pub fn fire(&mut self, event: Event) -> State {
        match event {
            Event::Failed => self.consecutive_failures += 1,
            Event::Completed => self.consecutive_failures = 0,
            _ => {}
        }

        let next = transition(self.state, event, self.consecutive_failures);
        tracing::trace!(from = ?self.state, ?event, to = ?next, "session transition");
        self.state = next;
        next
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

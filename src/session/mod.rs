//! # 交互会话
//!
//! 启动检查、主菜单和操作循环。每个状态对应一个处理函数，
//! 处理函数只负责 I/O 并产生事件，状态切换交给 `state::transition`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `commands/` 执行操作
//! - 使用 `utils/prompt.rs`, `utils/interrupt.rs`

pub mod state;

use crate::commands::{self, Context, Operation, Outcome};
use crate::config::Config;
use crate::engine::ContainerEngine;
use crate::error::Result;
use crate::utils::interrupt::InterruptFlag;
use crate::utils::prompt::Prompt;

use colored::Color;
use state::{Event, ExitStatus, Machine, MenuChoice, State, MAX_CONSECUTIVE_FAILURES};

/// 交互会话
pub struct Session<'a> {
    config: &'a Config,
    engine: &'a dyn ContainerEngine,
    prompt: &'a mut dyn Prompt,
    interrupt: &'a InterruptFlag,
    machine: Machine,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a Config,
        engine: &'a dyn ContainerEngine,
        prompt: &'a mut dyn Prompt,
        interrupt: &'a InterruptFlag,
    ) -> Self {
        Session {
            config,
            engine,
            prompt,
            interrupt,
            machine: Machine::new(),
        }
    }

    /// 显示启动横幅
    pub fn display_header(&self) {
        let out = &self.config.output;
        out.blank();
        out.rule(Color::Cyan);
        out.banner("CONTAINER IMAGES MANAGER", Color::Cyan);
        out.banner(&format!("dimgr {}", env!("CARGO_PKG_VERSION")), Color::Blue);
        out.rule(Color::Cyan);
        out.line(&format!(
            "{:^60}",
            format!("Backup directory: {}", self.config.backup_dir().display())
        ));
        out.separator();
        out.blank();
    }

    /// 检查引擎是否安装、守护进程是否运行；失败为致命错误
    pub fn check_environment(&self) -> Result<()> {
        let out = &self.config.output;
        out.info(&format!("Checking {} status...", self.engine.program()));

        match self.engine.check_installed() {
            Ok(version) => {
                tracing::info!(%version, "container engine found");
                out.success(&format!("{} is installed ({})", self.engine.program(), version));
            }
            Err(e) => {
                out.warning(&format!(
                    "Install {} and make sure it is on PATH",
                    self.engine.program()
                ));
                return Err(e);
            }
        }

        if let Err(e) = self.engine.check_daemon() {
            out.warning(&format!(
                "Start the {} daemon and try again",
                self.engine.program()
            ));
            return Err(e);
        }
        out.success(&format!("{} daemon is running", self.engine.program()));
        out.blank();
        Ok(())
    }

    /// 启动失败后等待用户按回车
    pub fn pause_before_exit(&mut self) {
        let _ = self.ask("Press Enter to exit...");
    }

    /// 运行交互循环直到退出
    pub fn run(&mut self) -> ExitStatus {
        // 启动检查期间的 Ctrl-C 不带入第一次菜单选择
        self.interrupt.take();
        loop {
            let event = match self.machine.state() {
                State::Menu => self.on_menu(),
                State::Running(op) => self.on_running(op),
                State::AwaitContinue => self.on_await_continue(),
                State::Recovering => self.on_recovering(),
                State::Exit(status) => {
                    self.on_exit(status);
                    return status;
                }
            };
            self.machine.fire(event);
        }
    }

    /// 提问并把 EOF / 读取失败转换为事件
    fn ask(&mut self, question: &str) -> std::result::Result<String, Event> {
        let question = self.config.output.paint(question, Color::Cyan);
        match self.prompt.ask(&question) {
            Ok(Some(answer)) => Ok(answer),
            Ok(None) => Err(Event::EndOfInput),
            Err(e) => {
                tracing::debug!(error = %e, "failed to read input");
                self.config.output.error(&e.to_string());
                Err(Event::EndOfInput)
            }
        }
    }

    fn show_menu(&self) {
        let out = &self.config.output;
        out.rule(Color::Cyan);
        out.banner("MAIN MENU", Color::Cyan);
        out.rule(Color::Cyan);
        out.blank();
        for (key, choice) in MenuChoice::ALL.iter() {
            let color = match choice {
                MenuChoice::Run(Operation::Save) => Color::Green,
                MenuChoice::Run(Operation::Load) => Color::Blue,
                MenuChoice::Run(Operation::Delete) | MenuChoice::Exit => Color::Red,
                MenuChoice::Run(Operation::Help) => Color::Magenta,
                _ => Color::Cyan,
            };
            out.line(&format!("  {}) {}", out.paint(key, color), choice.label()));
        }
        out.blank();
        out.separator();
    }

    fn on_menu(&mut self) -> Event {
        self.show_menu();
        let answer = match self.ask("Your choice:") {
            Ok(answer) => answer,
            Err(event) => return event,
        };
        self.config.output.blank();

        if self.interrupt.take() {
            return Event::Interrupted;
        }

        match MenuChoice::parse(&answer) {
            Some(choice) => Event::Selected(choice),
            None => {
                self.config.output.error(&format!(
                    "Invalid choice '{}'! Please select 1-{}",
                    answer,
                    MenuChoice::ALL.len()
                ));
                self.config.output.blank();
                Event::InvalidChoice
            }
        }
    }

    fn on_running(&mut self, op: Operation) -> Event {
        let mut ctx = Context {
            config: self.config,
            engine: self.engine,
            prompt: &mut *self.prompt,
            interrupt: self.interrupt,
        };
        let result = commands::run(op, &mut ctx);
        let interrupted = self.interrupt.take();
        let out = &self.config.output;

        match result {
            Ok(Outcome::Completed) if !interrupted => Event::Completed,
            Ok(_) => {
                out.blank();
                out.warning("Operation interrupted by user");
                Event::Interrupted
            }
            Err(e) => {
                tracing::debug!(operation = %op, error = %e, "operation failed");
                let failures = self.machine.consecutive_failures() + 1;
                out.blank();
                out.rule(Color::Red);
                out.error("UNEXPECTED ERROR");
                out.error(&e.to_string());
                if failures >= MAX_CONSECUTIVE_FAILURES {
                    out.error(&format!("{} consecutive errors, giving up", failures));
                }
                out.rule(Color::Red);
                out.blank();
                Event::Failed
            }
        }
    }

    fn on_await_continue(&mut self) -> Event {
        let out = &self.config.output;
        out.rule(Color::Green);
        out.success("Operation completed!");
        out.info("Ready for next operation...");
        out.rule(Color::Green);
        out.blank();

        let answer = match self.ask("Press Enter to continue or type 'exit' to quit:") {
            Ok(answer) => answer,
            Err(event) => return event,
        };
        self.config.output.blank();

        if self.interrupt.take() {
            return Event::Interrupted;
        }

        if answer.eq_ignore_ascii_case("exit") {
            Event::Quit
        } else {
            Event::Proceed
        }
    }

    fn on_recovering(&mut self) -> Event {
        let answer = match self.ask("Return to main menu? (Y/N):") {
            Ok(answer) => answer,
            Err(event) => return event,
        };
        self.config.output.blank();

        if self.interrupt.take() {
            return Event::Interrupted;
        }

        if answer.eq_ignore_ascii_case("y") {
            Event::Proceed
        } else {
            Event::Quit
        }
    }

    fn on_exit(&self, status: ExitStatus) {
        tracing::info!(code = status.code(), "session finished");
        let out = &self.config.output;
        out.rule(Color::Yellow);
        out.banner("Goodbye!", Color::Yellow);
        out.rule(Color::Yellow);
        out.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::test_config;
    use crate::engine::fake::FakeEngine;
    use crate::utils::prompt::ScriptedPrompt;

    fn run_session(engine: &FakeEngine, dir: &std::path::Path, answers: &[&str]) -> (ExitStatus, ScriptedPrompt) {
        let config = test_config(dir);
        let interrupt = InterruptFlag::new();
        let mut prompt = ScriptedPrompt::new(answers.iter().copied());
        let status = Session::new(&config, engine, &mut prompt, &interrupt).run();
        (status, prompt)
    }

    #[test]
    fn test_exit_from_menu() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FakeEngine::with_images(&[]);
        let (status, prompt) = run_session(&engine, dir.path(), &["7"]);
        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_end_of_input_exits_normally() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FakeEngine::with_images(&[]);
        let (status, _) = run_session(&engine, dir.path(), &["9", "6", ""]);
        assert_eq!(status, ExitStatus::Normal);
    }

    #[test]
    fn test_save_all_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FakeEngine::with_images(&["a:1", "b:2", "c:3"]).fail_save("b:2");
        let (status, prompt) = run_session(&engine, dir.path(), &["1", "A", "exit"]);

        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(engine.save_count(), 3);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_continue_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FakeEngine::with_images(&["a:1"]);
        let (status, _) = run_session(&engine, dir.path(), &["3", "", "1", "a", "", "7"]);

        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(engine.save_count(), 1);
    }

    #[test]
    fn test_error_then_decline_retry() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = FakeEngine::with_images(&["a:1"]);
        engine.listing_fails = true;
        let (status, prompt) = run_session(&engine, dir.path(), &["3", "n", "7"]);

        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(prompt.remaining(), 1);
    }

    #[test]
    fn test_three_consecutive_errors_end_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = FakeEngine::with_images(&["a:1"]);
        engine.listing_fails = true;
        let (status, prompt) =
            run_session(&engine, dir.path(), &["3", "y", "3", "y", "3", "y", "7"]);

        assert_eq!(status, ExitStatus::Failure);
        // 第三次出错后不再询问
        assert_eq!(prompt.remaining(), 2);
    }

    /// 在指定问题处模拟 Ctrl-C 的输入脚本
    struct InterruptingPrompt<'f> {
        inner: ScriptedPrompt,
        flag: &'f InterruptFlag,
        trigger: &'static str,
    }

    impl Prompt for InterruptingPrompt<'_> {
        fn ask(&mut self, question: &str) -> Result<Option<String>> {
            if question.contains(self.trigger) {
                self.flag.raise();
            }
            self.inner.ask(question)
        }
    }

    fn run_interrupted(trigger: &'static str, answers: &[&str]) -> (ExitStatus, Vec<String>) {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]);
        let interrupt = InterruptFlag::new();
        let mut prompt = InterruptingPrompt {
            inner: ScriptedPrompt::new(answers.iter().copied()),
            flag: &interrupt,
            trigger,
        };
        let status = Session::new(&config, &engine, &mut prompt, &interrupt).run();
        assert!(!interrupt.is_raised());
        (status, prompt.inner.asked)
    }

    #[test]
    fn test_interrupt_at_continue_prompt_asks_to_recover() {
        let (status, asked) = run_interrupted("Press Enter", &["6", "", "y", "7"]);
        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(asked.len(), 4);
        assert!(asked[2].contains("Return to main menu?"));
        assert!(asked[3].contains("Your choice:"));
    }

    #[test]
    fn test_interrupt_at_recover_prompt_exits() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut engine = FakeEngine::with_images(&[]);
        engine.listing_fails = true;
        let interrupt = InterruptFlag::new();
        let mut prompt = InterruptingPrompt {
            inner: ScriptedPrompt::new(["3", "y", "7"]),
            flag: &interrupt,
            trigger: "Return to main menu?",
        };
        let status = Session::new(&config, &engine, &mut prompt, &interrupt).run();

        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(prompt.inner.remaining(), 1);
        assert!(!interrupt.is_raised());
    }

    #[test]
    fn test_stale_interrupt_cleared_on_start() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]);
        let interrupt = InterruptFlag::new();
        interrupt.raise();
        let mut prompt = ScriptedPrompt::new(["7"]);
        let status = Session::new(&config, &engine, &mut prompt, &interrupt).run();

        assert_eq!(status, ExitStatus::Normal);
        assert_eq!(prompt.asked.len(), 1);
    }

    #[test]
    fn test_pause_before_exit() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let engine = FakeEngine::with_images(&[]);
        let interrupt = InterruptFlag::new();
        let mut prompt = ScriptedPrompt::default();
        Session::new(&config, &engine, &mut prompt, &interrupt).pause_before_exit();

        assert_eq!(prompt.asked.len(), 1);
        assert!(prompt.asked[0].contains("Press Enter to exit"));
    }

    #[test]
    fn test_environment_checks() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let interrupt = InterruptFlag::new();
        let mut prompt = ScriptedPrompt::default();

        let mut engine = FakeEngine::with_images(&[]);
        assert!(Session::new(&config, &engine, &mut prompt, &interrupt)
            .check_environment()
            .is_ok());

        engine.daemon_running = false;
        let err = Session::new(&config, &engine, &mut prompt, &interrupt)
            .check_environment()
            .unwrap_err();
        assert!(matches!(err, crate::error::DimgrError::DaemonNotRunning { .. }));

        engine.installed = false;
        let err = Session::new(&config, &engine, &mut prompt, &interrupt)
            .check_environment()
            .unwrap_err();
        assert!(matches!(err, crate::error::DimgrError::EngineNotInstalled { .. }));
    }
}

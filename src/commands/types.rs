// src/commands/types.rs
use std::fmt;

use crate::session::Session;

/// What the driver does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    /// End the session loop with the result's exit code.
    Exit,
}

/// Command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub flow: Flow,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self::success(String::new())
    }

    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0, flow: Flow::Continue }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1, flow: Flow::Continue }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, flow: Flow::Continue }
    }

    /// Diagnostic of the form `<command>: <error>`.
    pub fn failure(command: &str, err: impl fmt::Display) -> Self {
        Self::error(format!("{}: {}\n", command, err))
    }

    /// Terminate the session with `exit_code`.
    pub fn exit(exit_code: i32) -> Self {
        Self { stdout: String::new(), stderr: String::new(), exit_code, flow: Flow::Exit }
    }

    pub fn is_exit(&self) -> bool {
        self.flow == Flow::Exit
    }
}

/// Command execution context
pub struct CommandContext<'a> {
    /// Operands, without the command name.
    pub args: Vec<String>,
    pub session: &'a mut Session,
}

impl<'a> CommandContext<'a> {
    pub fn new(session: &'a mut Session, args: Vec<String>) -> Self {
        Self { args, session }
    }
}

/// Command trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

/// Collect per-operand outcomes into one result; any failure makes the
/// whole command fail with status 1.
#[derive(Debug, Default)]
pub(crate) struct Output {
    stdout: String,
    stderr: String,
    failed: bool,
}

impl Output {
    pub(crate) fn print(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    pub(crate) fn fail(&mut self, command: &str, err: impl fmt::Display) {
        self.stderr.push_str(&format!("{}: {}\n", command, err));
        self.failed = true;
    }

    pub(crate) fn finish(self) -> CommandResult {
        let exit_code = if self.failed { 1 } else { 0 };
        CommandResult::with_exit_code(self.stdout, self.stderr, exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_formats_diagnostic() {
        let result = CommandResult::failure("mkdir", "x: file exists");
        assert_eq!(result.stderr, "mkdir: x: file exists\n");
        assert_eq!(result.exit_code, 1);
        assert!(!result.is_exit());
    }

    #[test]
    fn test_exit_flow() {
        let result = CommandResult::exit(3);
        assert!(result.is_exit());
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn test_output_accumulates() {
        let mut out = Output::default();
        out.print("a\n");
        out.fail("cat", "b: no such file or directory");
        out.print("c\n");
        let result = out.finish();
        assert_eq!(result.stdout, "a\nc\n");
        assert_eq!(result.stderr, "cat: b: no such file or directory\n");
        assert_eq!(result.exit_code, 1);
    }
}

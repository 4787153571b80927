//! Shell
//!
//! Main entry point for the shell: ties together the session, the command
//! registry and the read-eval-print loop.

use std::io::{BufRead, Write};

use log::debug;

use crate::commands::comment_cmd::COMMENT;
use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::ShellOptions;
use crate::error::ShellError;
use crate::session::Session;

/// Split an input line into words. Runs of whitespace separate words.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// The shell: one session plus the commands that act on it.
pub struct Shell {
    session: Session,
    registry: CommandRegistry,
    show_prompt: bool,
    echo: bool,
}

impl Shell {
    pub fn new(options: &ShellOptions) -> Self {
        Self {
            session: Session::new(options.prompt.clone()),
            registry: create_registry(),
            show_prompt: true,
            echo: options.echo.unwrap_or(false),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_show_prompt(&mut self, show_prompt: bool) {
        self.show_prompt = show_prompt;
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Execute one line and record its exit status.
    ///
    /// Blank lines leave the status untouched. A name with no command behind
    /// it is returned as [`ShellError::UnknownCommand`].
    pub fn execute_line(&mut self, line: &str) -> Result<CommandResult, ShellError> {
        let mut words = tokenize(line);
        if words.is_empty() {
            return Ok(CommandResult::ok());
        }

        let name = words.remove(0);
        let lookup = if name.starts_with(COMMENT) { COMMENT } else { name.as_str() };
        let command = self
            .registry
            .get(lookup)
            .ok_or_else(|| ShellError::UnknownCommand { name: name.clone() })?;

        debug!("{} {:?} in {}", name, words, self.session.path());
        let result = command.execute(CommandContext::new(&mut self.session, words));
        self.session.set_last_exit_status(result.exit_code);
        Ok(result)
    }

    /// Execute one line, turning shell errors into a diagnostic and status 1.
    pub fn run_line(&mut self, line: &str) -> CommandResult {
        match self.execute_line(line) {
            Ok(result) => result,
            Err(e) => {
                self.session.set_last_exit_status(1);
                CommandResult::error(format!("{}\n", e))
            }
        }
    }

    /// Read lines from `input` until end of input or `exit`.
    ///
    /// Returns the status of the last command.
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> Result<i32, ShellError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut lines = input.lines();
        loop {
            if self.show_prompt {
                write!(out, "{}", self.session.prompt())?;
                out.flush()?;
            }
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if self.echo {
                writeln!(out, "{}", line)?;
            }

            let result = self.run_line(&line);
            out.write_all(result.stdout.as_bytes())?;
            err.write_all(result.stderr.as_bytes())?;
            if result.is_exit() {
                break;
            }
        }
        out.flush()?;
        err.flush()?;
        Ok(self.session.last_exit_status())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(&ShellOptions::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

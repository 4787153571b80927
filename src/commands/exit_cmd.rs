//! exit - end the session
//!
//! The status defaults to 0. A numeric operand becomes the status; anything
//! else yields 127.

use crate::commands::{Command, CommandContext, CommandResult};

/// Status used when the operand is not a number.
pub const BAD_EXIT_CODE: i32 = 127;

pub struct ExitCommand;

/// Parse the operand of `exit`.
pub fn parse_exit_code(args: &[String]) -> i32 {
    match args.first() {
        None => 0,
        Some(arg) => arg.parse::<i32>().unwrap_or(BAD_EXIT_CODE),
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::exit(parse_exit_code(&ctx.args))
    }
}

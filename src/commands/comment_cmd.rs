use crate::commands::{Command, CommandContext, CommandResult};

/// Name the dispatcher maps every `#...` word to.
pub const COMMENT: &str = "#";

/// `#` - ignores the rest of the line.
pub struct CommentCommand;

impl Command for CommentCommand {
    fn name(&self) -> &'static str {
        COMMENT
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::ok()
    }
}

//! prompt - set the prompt string
//!
//! Each operand is followed by a single space, so `prompt $` yields `"$ "`.
//! With no operands the stored prompt is left as it is and shown again on
//! the next read.

use crate::commands::{Command, CommandContext, CommandResult};

pub struct PromptCommand;

impl Command for PromptCommand {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if !ctx.args.is_empty() {
            let prompt: String = ctx.args.iter().map(|word| format!("{} ", word)).collect();
            ctx.session.set_prompt(prompt);
        }
        CommandResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn run(session: &mut Session, args: &[&str]) -> CommandResult {
        let args = args.iter().map(|s| s.to_string()).collect();
        PromptCommand.execute(CommandContext::new(session, args))
    }

    #[test]
    fn test_prompt_sets_with_trailing_separators() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, &["my", "shell>"]).exit_code, 0);
        assert_eq!(session.prompt(), "my shell> ");
    }

    #[test]
    fn test_prompt_without_args_keeps_prompt() {
        let mut session = Session::default();
        run(&mut session, &["$"]);
        run(&mut session, &[]);
        assert_eq!(session.prompt(), "$ ");
    }
}

//! cd - change the working directory
//!
//! With no operand, or `/`, go to the root. Otherwise resolve the operand
//! from the working directory; it must name a directory.

use log::debug;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::ROOT_MARKER;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let session = ctx.session;
        let target = match ctx.args.as_slice() {
            [] => ROOT_MARKER,
            [path] => path.as_str(),
            _ => return CommandResult::error("cd: too many arguments\n".to_string()),
        };

        if target == ROOT_MARKER {
            session.go_root();
            return CommandResult::ok();
        }

        match session.resolve_dir(target) {
            Ok(resolved) => {
                debug!("cd {} -> {}", target, resolved.path);
                session.set_cwd(resolved.inode, resolved.path);
                CommandResult::ok()
            }
            Err(e) => CommandResult::failure("cd", e),
        }
    }
}

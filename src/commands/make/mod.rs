// src/commands/make/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;
use crate::session::Session;

pub struct MakeCommand;

/// Create or overwrite the plain file `name` in the working directory.
fn make_file(session: &mut Session, name: &str, words: &[String]) -> Result<(), FsError> {
    if name.contains('/') {
        return Err(FsError::InvalidName { path: name.to_string() });
    }
    let cwd = session.cwd();
    let table = session.table_mut();
    let file = table.make_file(cwd, name)?;
    table.write(file, words.to_vec()).map_err(|e| e.on(name))
}

impl Command for MakeCommand {
    fn name(&self) -> &'static str {
        "make"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some((name, words)) = ctx.args.split_first() else {
            return CommandResult::error("make: missing operand\n".to_string());
        };
        match make_file(ctx.session, name, words) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::failure(self.name(), e),
        }
    }
}

// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::commands::types::Output;
use crate::fs::{split_last, FsError};
use crate::session::Session;

pub struct MkdirCommand;

fn make_dir(session: &mut Session, operand: &str) -> Result<(), FsError> {
    let (parent, name) = split_last(operand);
    if name.is_empty() {
        return Err(FsError::InvalidName { path: operand.to_string() });
    }
    let parent = session.resolve_dir(parent)?;
    session
        .table_mut()
        .make_dir(parent.inode, name)
        .map_err(|e| e.on(operand))?;
    Ok(())
}

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("mkdir: missing operand\n".to_string());
        }

        let mut out = Output::default();
        for operand in &ctx.args {
            if let Err(e) = make_dir(ctx.session, operand) {
                out.fail(self.name(), e);
            }
        }
        out.finish()
    }
}

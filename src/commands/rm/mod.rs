// src/commands/rm/mod.rs
use log::debug;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::commands::types::Output;
use crate::fs::{is_reserved, resolve, split_last, FsError, PathStack, ROOT_MARKER};
use crate::session::Session;

pub struct RmCommand;

pub struct RmrCommand;

/// Remove a single entry; a directory must be empty.
fn remove_entry(session: &mut Session, operand: &str) -> Result<(), FsError> {
    let (parent, name) = split_last(operand);
    if name.is_empty() || is_reserved(name) {
        return Err(FsError::InvalidName { path: operand.to_string() });
    }
    let parent = session.resolve_dir(parent)?;
    let target = session
        .table()
        .lookup(parent.inode, name)?
        .ok_or_else(|| FsError::NoSuchEntry { path: operand.to_string() })?;
    let cwd_removed = session.cwd() == target;

    session
        .table_mut()
        .remove(parent.inode, name)
        .map_err(|e| e.on(operand))?;

    if cwd_removed {
        session.set_cwd(parent.inode, parent.path);
    }
    Ok(())
}

/// Remove `operand` and everything beneath it. The root cannot be removed.
fn remove_tree(session: &mut Session, operand: &str) -> Result<usize, FsError> {
    let target = session.resolve(operand)?;
    if target.inode == session.root() {
        return Err(FsError::InvalidName { path: ROOT_MARKER.to_string() });
    }

    let parent_path = target.path.parent();
    let parent = resolve(
        session.table(),
        session.root(),
        &PathStack::root(),
        &parent_path.to_string(),
    )?;
    let name = target.path.last().to_string();
    let cwd_inside = session.table().is_within(session.cwd(), target.inode);

    let released = session.table_mut().remove_recursive(parent.inode, &name)?;
    debug!("rmr {}: released {} inodes", target.path, released);

    if cwd_inside {
        session.set_cwd(parent.inode, parent.path);
    }
    Ok(released)
}

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("rm: missing operand\n".to_string());
        }

        let mut out = Output::default();
        for operand in &ctx.args {
            if let Err(e) = remove_entry(ctx.session, operand) {
                out.fail(self.name(), e);
            }
        }
        out.finish()
    }
}

impl Command for RmrCommand {
    fn name(&self) -> &'static str {
        "rmr"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut operands = ctx.args;
        if operands.is_empty() {
            operands.push(".".to_string());
        }

        let mut out = Output::default();
        for operand in &operands {
            if let Err(e) = remove_tree(ctx.session, operand) {
                out.fail(self.name(), e);
            }
        }
        out.finish()
    }
}

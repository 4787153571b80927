// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::commands::types::Output;
use crate::fs::{is_reserved, FsError, InodeRef, InodeTable, PathStack};
use crate::session::Session;

pub struct LsCommand;

pub struct LsrCommand;

/// One listing line per entry: `<inode>  <size>  <name>[/]`.
///
/// Columns are right-aligned to the widest value in the listing. A trailing
/// `/` marks directories other than `.` and `..`.
pub fn format_entries<'a, I>(table: &InodeTable, entries: I) -> String
where
    I: Iterator<Item = (&'a str, InodeRef)> + Clone,
{
    let nr_width = entries.clone().map(|(_, i)| table[i].nr().to_string().len()).max().unwrap_or(1);
    let size_width = entries
        .clone()
        .map(|(_, i)| table.content(i).size().to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for (name, inode) in entries {
        let node = &table[inode];
        let suffix = if node.content().is_directory() && !is_reserved(name) { "/" } else { "" };
        out.push_str(&format!(
            "{:>nr_width$}  {:>size_width$}  {}{}\n",
            node.nr(),
            node.content().size(),
            name,
            suffix,
            nr_width = nr_width,
            size_width = size_width,
        ));
    }
    out
}

/// Header line followed by the sorted listing of `dir`.
fn list_directory(table: &InodeTable, dir: InodeRef, path: &PathStack) -> Result<String, FsError> {
    let entries = table.content(dir).list().map_err(|e| e.on(path.to_string()))?;
    Ok(format!("{}:\n{}", path, format_entries(table, entries)))
}

/// Pre-order listing of `dir` and every directory beneath it.
fn list_recursive(
    table: &InodeTable,
    dir: InodeRef,
    path: &mut PathStack,
    out: &mut String,
) -> Result<(), FsError> {
    out.push_str(&list_directory(table, dir, path)?);
    let children = table.content(dir).as_directory()?.children();
    for (name, child) in children {
        if table.content(child).is_directory() {
            path.push(name);
            list_recursive(table, child, path, out)?;
            path.pop();
        }
    }
    Ok(())
}

fn list_operand(session: &Session, operand: &str, recursive: bool) -> Result<String, FsError> {
    let resolved = session.resolve(operand)?;
    let table = session.table();
    if !table.content(resolved.inode).is_directory() {
        let entry = std::iter::once((resolved.path.last(), resolved.inode));
        return Ok(format_entries(table, entry));
    }
    if !recursive {
        return list_directory(table, resolved.inode, &resolved.path);
    }
    let mut path = resolved.path;
    let mut out = String::new();
    list_recursive(table, resolved.inode, &mut path, &mut out)?;
    Ok(out)
}

fn run_listing(command: &str, ctx: CommandContext<'_>, recursive: bool) -> CommandResult {
    let mut operands = ctx.args;
    if operands.is_empty() {
        operands.push(".".to_string());
    }

    let mut out = Output::default();
    for operand in &operands {
        match list_operand(&*ctx.session, operand, recursive) {
            Ok(text) => out.print(&text),
            Err(e) => out.fail(command, e),
        }
    }
    out.finish()
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        run_listing(self.name(), ctx, false)
    }
}

impl Command for LsrCommand {
    fn name(&self) -> &'static str {
        "lsr"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        run_listing(self.name(), ctx, true)
    }
}

// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::commands::types::Output;
use crate::fs::FsError;
use crate::session::Session;

pub struct CatCommand;

fn read_file(session: &Session, operand: &str) -> Result<String, FsError> {
    let resolved = session.resolve(operand)?;
    let words = session.table().read(resolved.inode).map_err(|e| e.on(operand))?;
    Ok(format!("{}\n", words.join(" ")))
}

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("cat: missing operand\n".to_string());
        }

        let mut out = Output::default();
        for operand in &ctx.args {
            match read_file(ctx.session, operand) {
                Ok(text) => out.print(&text),
                Err(e) => out.fail(self.name(), e),
            }
        }
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, args: &[&str]) -> CommandResult {
        let args = args.iter().map(|s| s.to_string()).collect();
        CatCommand.execute(CommandContext::new(session, args))
    }

    fn make_session() -> Session {
        let mut session = Session::default();
        let root = session.root();
        let table = session.table_mut();
        let f = table.make_file(root, "f").unwrap();
        table.write(f, vec!["hello".to_string(), "world".to_string()]).unwrap();
        let d = table.make_dir(root, "d").unwrap();
        let g = table.make_file(d, "g").unwrap();
        table.write(g, vec!["nested".to_string()]).unwrap();
        table.make_file(root, "empty").unwrap();
        session
    }

    #[test]
    fn test_cat_joins_words() {
        let mut session = make_session();
        let result = run(&mut session, &["f"]);
        assert_eq!(result.stdout, "hello world\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_cat_multiple_and_paths() {
        let mut session = make_session();
        let result = run(&mut session, &["f", "d/g", "empty"]);
        assert_eq!(result.stdout, "hello world\nnested\n\n");
    }

    #[test]
    fn test_cat_continues_after_error() {
        let mut session = make_session();
        let result = run(&mut session, &["nope", "d", "f"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stdout, "hello world\n");
        assert_eq!(
            result.stderr,
            "cat: nope: no such file or directory\ncat: d: is a directory\n"
        );
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut session = make_session();
        let result = run(&mut session, &[]);
        assert_eq!(result.exit_code, 1);
    }
}

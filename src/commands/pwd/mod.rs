// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(format!("{}\n", ctx.session.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn run(session: &mut Session, args: &[&str]) -> CommandResult {
        let args = args.iter().map(|s| s.to_string()).collect();
        PwdCommand.execute(CommandContext::new(session, args))
    }

    #[test]
    fn test_pwd_root() {
        let mut session = Session::default();
        let result = run(&mut session, &[]);
        assert_eq!(result.stdout, "/\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_pwd_nested() {
        let mut session = Session::default();
        let root = session.root();
        let a = session.table_mut().make_dir(root, "a").unwrap();
        session.table_mut().make_dir(a, "b").unwrap();
        let resolved = session.resolve_dir("a/b").unwrap();
        session.set_cwd(resolved.inode, resolved.path);

        let result = run(&mut session, &["ignored"]);
        assert_eq!(result.stdout, "/a/b\n");
    }
}

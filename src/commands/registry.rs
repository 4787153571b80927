// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        create_registry()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::comment_cmd::CommentCommand;
use super::echo::EchoCommand;
use super::exit_cmd::ExitCommand;
use super::ls::{LsCommand, LsrCommand};
use super::make::MakeCommand;
use super::mkdir::MkdirCommand;
use super::prompt_cmd::PromptCommand;
use super::pwd::PwdCommand;
use super::rm::{RmCommand, RmrCommand};

/// Register every shell command.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CommentCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(ExitCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(LsrCommand));
    registry.register(Box::new(MakeCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(PromptCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(RmrCommand));
}

/// Create a registry holding every shell command.
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_all(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_commands() {
        let registry = create_registry();
        assert_eq!(
            registry.names(),
            vec!["#", "cat", "cd", "echo", "exit", "ls", "lsr", "make", "mkdir", "prompt", "pwd", "rm", "rmr"]
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = CommandRegistry::default();
        assert!(registry.contains("lsr"));
        assert_eq!(registry.get("mkdir").map(|c| c.name()), Some("mkdir"));
        assert!(registry.get("cp").is_none());
        assert!(CommandRegistry::new().names().is_empty());
    }
}

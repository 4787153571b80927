//! Shell Configuration
//!
//! Options read from an optional TOML file and then overridden from the
//! command line.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ShellError;
use crate::session::DEFAULT_PROMPT;

/// Options for creating a [`Shell`](crate::shell::Shell).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// Initial prompt string
    pub prompt: String,
    /// Echo each input line after the prompt; `None` means "when stdin is
    /// not a terminal"
    pub echo: Option<bool>,
    /// Debug flags: `c` commands, `i` inodes, `@` everything
    pub debug_flags: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            echo: None,
            debug_flags: String::new(),
        }
    }
}

impl ShellOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ShellError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Log targets raised to debug level by the configured flags.
    pub fn debug_targets(&self) -> Vec<&'static str> {
        debug_targets(&self.debug_flags)
    }
}

/// Map debug flag characters to log targets. Unknown flags are ignored.
pub fn debug_targets(flags: &str) -> Vec<&'static str> {
    if flags.contains('@') {
        return vec!["inode_shell"];
    }
    let mut targets = Vec::new();
    for flag in flags.chars() {
        let selected: &[&'static str] = match flag {
            'c' => &["inode_shell::commands", "inode_shell::shell"],
            'i' => &["inode_shell::fs"],
            _ => &[],
        };
        for target in selected {
            if !targets.contains(target) {
                targets.push(*target);
            }
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ShellOptions::default();
        assert_eq!(options.prompt, "% ");
        assert_eq!(options.echo, None);
        assert!(options.debug_targets().is_empty());
    }

    #[test]
    fn test_from_toml_partial() {
        let options = ShellOptions::from_toml_str("prompt = \"$ \"\n").unwrap();
        assert_eq!(options.prompt, "$ ");
        assert_eq!(options.echo, None);
    }

    #[test]
    fn test_from_toml_full() {
        let text = "prompt = \"> \"\necho = true\ndebug_flags = \"ci\"\n";
        let options = ShellOptions::from_toml_str(text).unwrap();
        assert_eq!(options.echo, Some(true));
        assert_eq!(
            options.debug_targets(),
            vec!["inode_shell::commands", "inode_shell::shell", "inode_shell::fs"]
        );
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = ShellOptions::from_toml_str("prompt = 3").unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellOptions::load("/nonexistent/inode-shell.toml").unwrap_err();
        assert!(matches!(err, ShellError::ConfigRead { .. }));
    }

    #[test]
    fn test_debug_targets() {
        assert_eq!(debug_targets("@"), vec!["inode_shell"]);
        assert_eq!(debug_targets("i"), vec!["inode_shell::fs"]);
        assert_eq!(debug_targets("cc"), vec!["inode_shell::commands", "inode_shell::shell"]);
        assert!(debug_targets("xyz").is_empty());
    }
}

//! Session State
//!
//! Everything one shell run mutates: the inode table (which owns the root),
//! the working directory with its absolute path, the prompt and the status of
//! the last command.

use std::fmt;

use crate::fs::{resolve, FsError, InodeRef, InodeTable, PathStack, Resolved};

/// Prompt shown before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "% ";

#[derive(Debug, Clone)]
pub struct Session {
    table: InodeTable,
    cwd: InodeRef,
    path: PathStack,
    prompt: String,
    last_exit_status: i32,
}

impl Session {
    /// Create a session positioned at the root of an empty tree.
    pub fn new(prompt: impl Into<String>) -> Self {
        let table = InodeTable::new();
        let cwd = table.root();
        Self {
            table,
            cwd,
            path: PathStack::root(),
            prompt: prompt.into(),
            last_exit_status: 0,
        }
    }

    pub fn table(&self) -> &InodeTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut InodeTable {
        &mut self.table
    }

    pub fn root(&self) -> InodeRef {
        self.table.root()
    }

    pub fn cwd(&self) -> InodeRef {
        self.cwd
    }

    /// Absolute path of the working directory.
    pub fn path(&self) -> &PathStack {
        &self.path
    }

    /// Move to `inode`, whose absolute location is `path`.
    ///
    /// Callers pass a pair produced by the resolver so both stay in step.
    pub fn set_cwd(&mut self, inode: InodeRef, path: PathStack) {
        self.cwd = inode;
        self.path = path;
    }

    pub fn go_root(&mut self) {
        self.cwd = self.table.root();
        self.path = PathStack::root();
    }

    /// Resolve `path` relative to the working directory.
    pub fn resolve(&self, path: &str) -> Result<Resolved, FsError> {
        resolve(&self.table, self.cwd, &self.path, path)
    }

    /// Resolve `path` and require the result to be a directory.
    pub fn resolve_dir(&self, path: &str) -> Result<Resolved, FsError> {
        let resolved = self.resolve(path)?;
        if !self.table.content(resolved.inode).is_directory() {
            return Err(FsError::NotADirectory { path: path.to_string() });
        }
        Ok(resolved)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn last_exit_status(&self) -> i32 {
        self.last_exit_status
    }

    pub fn set_last_exit_status(&mut self, status: i32) {
        self.last_exit_status = status;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "session: cwd = {}, inodes = {}, status = {}",
            self.path,
            self.table.inode_count(),
            self.last_exit_status
        )
    }
}

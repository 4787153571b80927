//! Path Resolution
//!
//! Walks the directory graph along a slash-separated path. `.` is skipped,
//! `..` follows the parent entry (a no-op at the root), and a leading `/`
//! restarts the walk at the root. Resolution never mutates the tree.

use std::fmt;

use log::trace;

use super::inode_table::InodeTable;
use super::types::*;

/// Marker stored as the first component of every absolute path.
pub const ROOT_MARKER: &str = "/";

/// Absolute location of a node as an ordered list of names.
///
/// The first component is always [`ROOT_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStack {
    components: Vec<String>,
}

impl PathStack {
    pub fn root() -> Self {
        Self { components: vec![ROOT_MARKER.to_string()] }
    }

    pub fn is_root(&self) -> bool {
        self.components.len() == 1
    }

    pub fn push(&mut self, name: &str) {
        self.components.push(name.to_string());
    }

    /// Drop the last name. The root marker is never popped.
    pub fn pop(&mut self) -> Option<String> {
        if self.is_root() {
            return None;
        }
        self.components.pop()
    }

    /// Final component; the root marker for the root itself.
    pub fn last(&self) -> &str {
        self.components.last().map(String::as_str).unwrap_or(ROOT_MARKER)
    }

    pub fn parent(&self) -> Self {
        let mut parent = self.clone();
        parent.pop();
        parent
    }
}

impl Default for PathStack {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "{}", ROOT_MARKER);
        }
        for name in &self.components[1..] {
            write!(f, "/{}", name)?;
        }
        Ok(())
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub inode: InodeRef,
    pub path: PathStack,
}

/// Resolve `path` starting at `start`, whose absolute location is `start_path`.
///
/// A plain file may only appear as the last component.
pub fn resolve(
    table: &InodeTable,
    start: InodeRef,
    start_path: &PathStack,
    path: &str,
) -> Result<Resolved, FsError> {
    let root = table.root();
    let (mut current, mut stack) = if path.starts_with('/') {
        (root, PathStack::root())
    } else {
        (start, start_path.clone())
    };

    for component in path.split('/').filter(|c| !c.is_empty()) {
        if !table.content(current).is_directory() {
            return Err(FsError::NotADirectory { path: path.to_string() });
        }
        match component {
            DOT => {}
            DOT_DOT => {
                if current != root {
                    current = table.parent_of(current)?;
                    stack.pop();
                }
            }
            name => {
                current = table
                    .lookup(current, name)?
                    .ok_or_else(|| FsError::NoSuchPath { path: path.to_string() })?;
                stack.push(name);
            }
        }
        trace!("resolve {}: at {}", path, stack);
    }

    Ok(Resolved { inode: current, path: stack })
}

/// Split `path` into the directory part and its final name.
///
/// Trailing slashes are ignored. A bare name has `.` as its directory and a
/// path made only of slashes yields an empty name.
pub fn split_last(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { (DOT, "") } else { (ROOT_MARKER, "") };
    }
    match trimmed.rsplit_once('/') {
        Some(("", name)) => (ROOT_MARKER, name),
        Some((dir, name)) => (dir, name),
        None => (DOT, trimmed),
    }
}

// ============================================================================
// Tests
// ============================================================================

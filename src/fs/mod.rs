//! File System Module
//!
//! In-memory inode tree for the shell:
//! - types: node payloads, handles and errors
//! - inode_table: the arena owning every inode
//! - path: path stacks and the resolver

pub mod types;
pub mod inode_table;
pub mod path;

pub use types::*;
pub use inode_table::InodeTable;
pub use path::{resolve, split_last, PathStack, Resolved, ROOT_MARKER};

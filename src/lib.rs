//! inode-shell - an in-memory inode tree with a shell-style command layer
//!
//! The tree lives in an arena of inodes addressed by handle. Commands such
//! as `mkdir`, `make`, `ls` and `rmr` act on it through a session holding
//! the working directory, the prompt and the last exit status.

pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod session;
pub mod shell;

pub use config::ShellOptions;
pub use error::ShellError;
pub use session::Session;
pub use shell::Shell;

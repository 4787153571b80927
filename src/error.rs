//! Shell Errors
//!
//! Failures above the tree level: dispatch misses, I/O on the driver's
//! streams and configuration problems. Tree errors stay `FsError` and are
//! turned into diagnostics by the command handlers.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{name}: no such function")]
    UnknownCommand { name: String },

    #[error("{path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

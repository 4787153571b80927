// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod comment_cmd;
pub mod echo;
pub mod exit_cmd;
pub mod ls;
pub mod make;
pub mod mkdir;
pub mod prompt_cmd;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod types;

pub use registry::{create_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, Flow};

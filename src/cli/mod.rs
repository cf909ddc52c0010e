pub mod commands;
pub mod init;
pub mod start;

pub use commands::{Cli, Commands};

//! Command-line interface module.

mod args;
pub mod export;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, ExportArgs};

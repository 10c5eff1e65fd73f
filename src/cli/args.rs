//! Command-line interface definitions.

use crate::config::CONFIG_FILE;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Quill blog configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a commented quill.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// List social links with their resolved titles
    #[command(visible_alias = "s")]
    Socials {
        /// Include inactive links
        #[arg(short, long)]
        all: bool,
    },

    /// Inspect the content schema
    Schema {
        /// Collection to show (lists collections when omitted)
        collection: Option<String>,

        /// Field of the collection to show
        field: Option<String>,

        /// Print the file a content item with this slug is stored in
        #[arg(long, requires = "collection", conflicts_with = "field")]
        slug: Option<String>,
    },

    /// Print the branch the editing tool commits to
    Branch,

    /// Write the resolved configuration as JSON
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Include inactive social links
    #[arg(short, long)]
    pub all: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

//! Quill - configuration for a static blog and its content editor.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{Site, SiteConfig, find_config_file, process_env};
use std::io;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Init { name } => {
            let root = name.clone().unwrap_or_else(|| PathBuf::from("."));
            cli::init::new_site(&root)
        }
        Commands::Check => {
            cli::show::check(&load_site(&cli)?);
            Ok(())
        }
        Commands::Socials { all } => cli::show::socials(&mut stdout, &load_site(&cli)?, *all),
        Commands::Schema {
            collection: Some(collection),
            slug: Some(slug),
            ..
        } => cli::show::content_path(&mut stdout, &load_site(&cli)?, collection, slug),
        Commands::Schema {
            collection, field, ..
        } => cli::show::schema(
            &mut stdout,
            &load_site(&cli)?,
            collection.as_deref(),
            field.as_deref(),
        ),
        Commands::Branch => cli::show::branch(&mut stdout, &load_site(&cli)?),
        Commands::Export { args } => cli::export::export(&load_site(&cli)?, args, process_env),
    }
}

/// Locate the config file and load it into a [`Site`].
fn load_site(cli: &Cli) -> Result<Site> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    let Some(path) = find_config_file(&cwd, &cli.config) else {
        log!(
            "error";
            "Config file '{}' not found. Run 'quill init' to create one.",
            cli.config.display()
        );
        std::process::exit(1);
    };
    debug!("config"; "using {}", path.display());

    Ok(SiteConfig::load(&path)?)
}

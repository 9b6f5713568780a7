//! Leafpress - a static JSON content API generator for Markdown blogs.

mod build;
mod cli;
mod config;
mod diagnostics;
mod document;
mod index;
mod init;
mod logger;
mod publish;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_site;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name } => {
            new_site(&config, name.is_some())?;
            log!("init"; "created site at {}", config.root.display());
            Ok(())
        }
        Commands::Build { .. } => build_site(&config).map(|_| ()),
    }
}

//! Site configuration management for `leafpress.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                            |
//! |-----------|----------------------------------------------------|
//! | `[site]`  | Descriptive metadata echoed into `meta.json`       |
//! | `[build]` | Paths, page sizes, date format, reading speed      |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "My Blog"
//!
//! [build]
//! content = "content"
//! output = "output"
//! posts_per_page = 10
//! date_format = "%Y-%m-%d"
//! ```

mod build;
pub mod defaults;
mod error;
mod site;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use site::SiteInfo;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Subdirectory of `[build.output]` that holds the artifact tree.
pub const API_DIR: &str = "api";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing leafpress.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub site: SiteInfo,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config selected by the CLI, apply CLI overrides and resolve paths.
    ///
    /// A missing config file falls back to defaults; `init` is the command
    /// that creates one.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = Self::resolve_root(cli);
        let config_path = root.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.update_with_cli(cli);
        config.root = normalize_path(&root);
        config.config_path = normalize_path(&config_path);
        config.build.content = normalize_path(&config.root.join(&config.build.content));
        config.build.output = normalize_path(&config.root.join(&config.build.output));

        Ok(config)
    }

    /// Root directory for the current command (`init <NAME>` nests under `--root`)
    fn resolve_root(cli: &Cli) -> PathBuf {
        let base = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        }
    }

    /// Update configuration with CLI arguments.
    ///
    /// Options backed by environment variables (`CONTENT_DIR`, `OUTPUT_DIR`,
    /// `POSTS_PER_PAGE`, `PREVIEWS_PER_PAGE`, `DATE_FORMAT`,
    /// `AVERAGE_WORDS_PER_MINUTE`) arrive here already resolved by clap, so a
    /// flag beats its variable and both beat the config file.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Some(args) = cli.build_args() {
            Self::update_option(&mut self.build.posts_per_page, args.posts_per_page.as_ref());
            Self::update_option(
                &mut self.build.previews_per_page,
                args.previews_per_page.as_ref(),
            );
            Self::update_option(&mut self.build.date_format, args.date_format.as_ref());
            Self::update_option(&mut self.build.words_per_minute, args.words_per_minute.as_ref());
            self.build.clean |= args.clean;
            self.build.openapi |= args.openapi;
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Directory that receives the artifact tree.
    pub fn api_dir(&self) -> PathBuf {
        self.build.output.join(API_DIR)
    }

    /// Reject settings the pipeline cannot run with.
    ///
    /// Runs before any document is loaded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build.posts_per_page < 1 {
            return Err(ConfigError::Validation(format!(
                "[build.posts_per_page] must be at least 1, got {}",
                self.build.posts_per_page
            )));
        }
        if self.build.previews_per_page < 1 {
            return Err(ConfigError::Validation(format!(
                "[build.previews_per_page] must be at least 1, got {}",
                self.build.previews_per_page
            )));
        }
        if self.build.words_per_minute < 1 {
            return Err(ConfigError::Validation(format!(
                "[build.words_per_minute] must be at least 1, got {}",
                self.build.words_per_minute
            )));
        }
        if self.build.date_format.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[build.date_format] must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

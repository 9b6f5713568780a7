//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Leafpress static JSON API generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, env = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, env = "CONTENT_DIR")]
    pub content: Option<PathBuf>,

    /// Config file name (default: leafpress.toml)
    #[arg(short = 'C', long, default_value = "leafpress.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `build` command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Remove previously generated artifacts before writing
    #[arg(long)]
    pub clean: bool,

    /// Also write `openapi.json` describing the artifact tree
    #[arg(long)]
    pub openapi: bool,

    /// Number of full posts per listing page
    #[arg(long, env = "POSTS_PER_PAGE")]
    pub posts_per_page: Option<usize>,

    /// Number of previews per listing page
    #[arg(long, env = "PREVIEWS_PER_PAGE")]
    pub previews_per_page: Option<usize>,

    /// strftime format of the front matter `date` field
    #[arg(long, env = "DATE_FORMAT")]
    pub date_format: Option<String>,

    /// Reading speed for reading-time estimates
    #[arg(long, env = "AVERAGE_WORDS_PER_MINUTE")]
    pub words_per_minute: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a new site with a default config and a sample post
    Init {
        /// the name(path) of the site directory, relative to `root`
        #[arg(value_name = "SITE_NAME")]
        name: Option<PathBuf>,
    },

    /// Derive every index and write the JSON artifact tree
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

impl Cli {
    /// Build arguments, if the current command carries them
    pub const fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } => Some(build_args),
            Commands::Init { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_build_with_overrides() {
        let cli = Cli::parse_from([
            "leafpress",
            "--root",
            "site",
            "build",
            "--clean",
            "--posts-per-page",
            "5",
        ]);

        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("leafpress.toml"));
        let args = cli.build_args().unwrap();
        assert!(args.clean);
        assert_eq!(args.posts_per_page, Some(5));
        assert_eq!(args.previews_per_page, None);
    }

    #[test]
    fn test_parse_date_and_reading_options() {
        let cli = Cli::parse_from([
            "leafpress",
            "build",
            "--openapi",
            "--date-format",
            "%d/%m/%Y",
            "--words-per-minute",
            "250",
        ]);

        let args = cli.build_args().unwrap();
        assert!(args.openapi);
        assert!(!args.clean);
        assert_eq!(args.date_format.as_deref(), Some("%d/%m/%Y"));
        assert_eq!(args.words_per_minute, Some(250));
    }

    #[test]
    fn test_options_read_environment_variables() {
        let cli = Cli::command();
        let build = cli.find_subcommand("build").unwrap();
        let env = |command: &clap::Command, id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .and_then(|name| name.to_str())
                .map(str::to_owned)
        };

        assert_eq!(env(&cli, "content").as_deref(), Some("CONTENT_DIR"));
        assert_eq!(env(&cli, "output").as_deref(), Some("OUTPUT_DIR"));
        assert_eq!(env(build, "posts_per_page").as_deref(), Some("POSTS_PER_PAGE"));
        assert_eq!(env(build, "previews_per_page").as_deref(), Some("PREVIEWS_PER_PAGE"));
        assert_eq!(env(build, "date_format").as_deref(), Some("DATE_FORMAT"));
        assert_eq!(
            env(build, "words_per_minute").as_deref(),
            Some("AVERAGE_WORDS_PER_MINUTE")
        );
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["leafpress", "init", "blog"]);
        assert!(cli.build_args().is_none());
        match cli.command {
            Commands::Init { name } => assert_eq!(name, Some(PathBuf::from("blog"))),
            Commands::Build { .. } => panic!("expected init"),
        }
    }
}

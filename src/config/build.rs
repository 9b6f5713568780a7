//! `[build]` section configuration.
//!
//! Contains source/output paths, page sizes and date handling.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in leafpress.toml - pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"        # Markdown source directory
/// output = "output"          # JSON artifacts land in <output>/api
/// posts_per_page = 10
/// previews_per_page = 20
/// date_format = "%Y-%m-%d"   # chrono strftime syntax
/// openapi = false            # also write api/openapi.json
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Markdown source directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Full posts per `posts/by-page/{n}.json` page.
    #[serde(default = "defaults::build::posts_per_page")]
    #[educe(Default = defaults::build::posts_per_page())]
    pub posts_per_page: usize,

    /// Previews per `previews/by-page/{n}.json` page.
    #[serde(default = "defaults::build::previews_per_page")]
    #[educe(Default = defaults::build::previews_per_page())]
    pub previews_per_page: usize,

    /// Format of the `date` front matter field (strftime).
    #[serde(default = "defaults::build::date_format")]
    #[educe(Default = defaults::build::date_format())]
    pub date_format: String,

    /// Reading speed used for the reading-time estimate.
    #[serde(default = "defaults::build::words_per_minute")]
    #[educe(Default = defaults::build::words_per_minute())]
    pub words_per_minute: usize,

    /// Remove the previous artifact tree before writing.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Also write `openapi.json` describing the artifact tree.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub openapi: bool,
}

//! `[site]` section configuration.
//!
//! Descriptive fields copied verbatim into the unified `meta.json`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in leafpress.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [site]
/// name = "My Blog"
/// description = "A personal blog about Rust"
/// tagline = "Notes from the borrow checker"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Site name.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Longer description for API consumers.
    #[serde(default)]
    pub description: String,

    /// Short tagline.
    #[serde(default)]
    pub tagline: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_info_full() {
        let config = r#"
            [site]
            name = "Leaf Notes"
            description = "Posts about static JSON APIs"
            tagline = "keep writing"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.name, "Leaf Notes");
        assert_eq!(config.site.description, "Posts about static JSON APIs");
        assert_eq!(config.site.tagline, "keep writing");
    }

    #[test]
    fn test_site_info_defaults() {
        let config: SiteConfig = toml::from_str("[site]").unwrap();

        assert_eq!(config.site.name, "My Site");
        assert_eq!(config.site.description, "");
        assert_eq!(config.site.tagline, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [site]
            name = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_site_info_unicode() {
        let config = r#"
            [site]
            name = "My Blog 🚀"
            tagline = "René's notes"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.name, "My Blog 🚀");
        assert_eq!(config.site.tagline, "René's notes");
    }
}

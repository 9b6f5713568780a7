//! YAML front matter parsing for markdown posts.
//!
//! Front matter sits at the very start of a post, delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: Getting Started with Go
//! author: John Doe
//! date: 2024-01-15
//! tags: [golang, tutorial]
//! category: tech/tutorials
//! ---
//!
//! Post body starts here.
//! ```

use super::DocumentError;
use serde::{Deserialize, Serialize};

/// Post metadata declared in the front matter block.
///
/// `slug` is filled in by the loader when the post does not set one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    /// Kept verbatim; parsed only when posts are ordered.
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Slash-delimited category path, e.g. `tech/tutorials`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub slug: String,
}

impl FrontMatter {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("date", &self.date),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Drop repeated tags, keeping the first occurrence.
    pub fn dedup_tags(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.tags.retain(|tag| seen.insert(tag.clone()));
    }
}

/// Split a post into its front matter and trimmed body.
pub fn parse_front_matter(content: &str) -> Result<(FrontMatter, &str), DocumentError> {
    let content = content.trim_start_matches('\u{feff}');
    let Some(after_opening) = content.strip_prefix("---") else {
        return Err(DocumentError::NoFrontMatter);
    };

    let Some(closing) = find_closing_delimiter(after_opening) else {
        return Err(DocumentError::InvalidFrontMatter);
    };

    let yaml = &after_opening[..closing];
    let body = after_opening[closing..]
        .strip_prefix("---")
        .unwrap_or_default()
        .trim();

    // An empty block deserializes as YAML null.
    let frontmatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok((frontmatter, body))
}

/// Byte offset of the closing `---` line, searched after the opening line.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    for (index, line) in content.split_inclusive('\n').enumerate() {
        if index > 0 && line.trim_end_matches(['\r', '\n']) == "---" {
            return Some(pos);
        }
        pos += line.len();
    }
    None
}

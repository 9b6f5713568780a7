//! Canonical in-memory post representation.
//!
//! Everything downstream (indices, pagination, artifacts) keys posts by
//! [`Document::slug`]. Slugs are assigned once by the [`loader`] and never
//! change during a run.
//!
//! # Wire shape
//!
//! ```json
//! {
//!   "markdown": "...",
//!   "frontmatter": { "title": "...", "author": "...", "date": "2024-01-15",
//!                    "tags": ["go"], "category": "tech/go", "slug": "hello" },
//!   "excerpt": "...",
//!   "readingTime": 3
//! }
//! ```

mod error;
mod excerpt;
mod frontmatter;
pub mod loader;
mod slug;

pub use error::DocumentError;
pub use frontmatter::FrontMatter;
pub use loader::{LoadOutcome, load_documents};

use serde::Serialize;

/// A parsed post with derived excerpt and reading time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Body text after the front matter.
    pub markdown: String,
    pub frontmatter: FrontMatter,
    /// Explicit or derived excerpt.
    pub excerpt: String,
    /// Minutes, at least 1.
    pub reading_time: u32,
}

impl Document {
    #[inline]
    pub fn slug(&self) -> &str {
        &self.frontmatter.slug
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    /// Raw date string as written in the front matter.
    #[inline]
    pub fn date(&self) -> &str {
        &self.frontmatter.date
    }

    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.frontmatter.tags
    }

    /// Category path, treating an empty string as absent.
    pub fn category(&self) -> Option<&str> {
        self.frontmatter
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
    }

    /// Listing projection without the body.
    pub fn preview(&self) -> Preview<'_> {
        Preview {
            frontmatter: &self.frontmatter,
            excerpt: &self.excerpt,
            reading_time: self.reading_time,
        }
    }
}

/// Front matter, excerpt and reading time of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview<'a> {
    pub frontmatter: &'a FrontMatter,
    pub excerpt: &'a str,
    pub reading_time: u32,
}

impl Preview<'_> {
    #[inline]
    pub fn slug(&self) -> &str {
        &self.frontmatter.slug
    }
}

/// Compact builders for tests across the crate.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Document, FrontMatter};

    pub fn doc(slug: &str, date: &str, tags: &[&str]) -> Document {
        Document {
            markdown: format!("Body of {slug}."),
            frontmatter: FrontMatter {
                title: format!("Title {slug}"),
                author: "Alice".into(),
                date: date.into(),
                tags: tags.iter().map(|t| (*t).to_string()).collect(),
                category: None,
                excerpt: None,
                slug: slug.into(),
            },
            excerpt: format!("Excerpt of {slug}."),
            reading_time: 1,
        }
    }

    pub fn doc_in(slug: &str, date: &str, category: &str) -> Document {
        let mut document = doc(slug, date, &[]);
        document.frontmatter.category = Some(category.into());
        document
    }
}

//! Slug derivation and de-duplication.
//!
//! Slugs are the primary key of every cross-reference, so they are
//! assigned exactly once, in load order.

use std::collections::HashSet;

/// Slug used when a title has no usable characters.
const FALLBACK_SLUG: &str = "untitled";

/// Derive a URL-safe slug from a post title.
///
/// Lowercases, keeps `[a-z0-9]`, turns ASCII whitespace runs and hyphens
/// into a single `-`, and trims hyphens from both ends. Other characters,
/// non-ASCII spaces included, are dropped.
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_ascii_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug
    }
}

/// Hands out slugs that have not been used yet in this run.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    used: HashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or the first free `base-N` (N starting at 1).
    pub fn allocate(&mut self, base: &str) -> String {
        let mut slug = base.to_owned();
        let mut counter = 1;
        while self.used.contains(&slug) {
            slug = format!("{base}-{counter}");
            counter += 1;
        }
        self.used.insert(slug.clone());
        slug
    }
}

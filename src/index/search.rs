//! Inverted search index over title, tags and excerpt.

use crate::document::Document;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Maximal runs of ASCII word characters.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Token to the sorted, unique slugs of posts containing it.
pub type InvertedIndex = BTreeMap<String, Vec<String>>;

/// Lowercased tokens of `text`, each once, in order of first appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .map(str::to_owned)
        .collect()
}

/// Text a post is searchable by.
fn searchable_text(document: &Document) -> String {
    format!(
        "{} {} {}",
        document.title(),
        document.tags().join(" "),
        document.excerpt
    )
}

pub fn build_inverted_index(documents: &[Document]) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for document in documents {
        for token in tokenize(&searchable_text(document)) {
            index
                .entry(token)
                .or_default()
                .push(document.slug().to_owned());
        }
    }

    for postings in index.values_mut() {
        postings.sort_unstable();
        postings.dedup();
    }
    index
}

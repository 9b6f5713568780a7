//! Related posts by shared tags.
//!
//! Every post is compared with every other post. Candidates are ranked by
//! the number of tags they share with the subject, newer dates first on
//! ties, and only the top [`MAX_RELATED`] are kept.
//!
//! Each list is ranked and truncated on its own, so `A` may be missing from
//! `B`'s list while `B` appears in `A`'s.

use crate::document::Document;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Upper bound on entries per post.
pub const MAX_RELATED: usize = 5;

/// One related post as seen from a subject post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntry {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub reading_time: u32,
    /// Tags in common with the subject, at least 1.
    pub shared_tags: usize,
}

/// Subject slug to its ranked related posts. Posts without any match map to
/// an empty list.
pub type RelatedIndex = BTreeMap<String, Vec<RelatedEntry>>;

pub fn build_related_index(documents: &[Document]) -> RelatedIndex {
    documents
        .iter()
        .map(|subject| {
            (
                subject.slug().to_owned(),
                rank_related(subject, documents),
            )
        })
        .collect()
}

/// Top related posts for `subject` among `documents`.
pub fn rank_related(subject: &Document, documents: &[Document]) -> Vec<RelatedEntry> {
    let subject_tags: HashSet<&str> = subject.tags().iter().map(String::as_str).collect();
    if subject_tags.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<RelatedEntry> = documents
        .iter()
        .filter(|other| other.slug() != subject.slug())
        .filter_map(|other| {
            let shared_tags = other
                .tags()
                .iter()
                .filter(|tag| subject_tags.contains(tag.as_str()))
                .count();
            (shared_tags > 0).then(|| RelatedEntry {
                slug: other.slug().to_owned(),
                title: other.title().to_owned(),
                date: other.date().to_owned(),
                reading_time: other.reading_time,
                shared_tags,
            })
        })
        .collect();

    // Raw date strings compare lexicographically; ISO dates sort correctly.
    candidates.sort_by(|a, b| {
        b.shared_tags
            .cmp(&a.shared_tags)
            .then_with(|| b.date.cmp(&a.date))
    });
    candidates.truncate(MAX_RELATED);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fixtures::doc;

    fn slugs(entries: &[RelatedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_ranked_by_shared_tags_then_date() {
        let documents = vec![
            doc("subject", "2024-01-01", &["a", "b", "c"]),
            doc("one-old", "2023-01-01", &["a"]),
            doc("two", "2023-06-01", &["a", "b"]),
            doc("one-new", "2024-05-01", &["c"]),
            doc("three", "2022-01-01", &["a", "b", "c"]),
            doc("none", "2025-01-01", &["z"]),
        ];
        let related = rank_related(&documents[0], &documents);

        assert_eq!(slugs(&related), ["three", "two", "one-new", "one-old"]);
        assert_eq!(related[0].shared_tags, 3);
        assert_eq!(related[1].shared_tags, 2);
        assert_eq!(related[3].shared_tags, 1);
    }

    #[test]
    fn test_bounded_and_sorted_for_every_post() {
        let documents: Vec<_> = (0..12)
            .map(|i| {
                let tags: &[&str] = match i % 3 {
                    0 => &["a", "b"],
                    1 => &["a"],
                    _ => &["b", "c"],
                };
                doc(&format!("post-{i}"), &format!("2024-01-{:02}", i + 1), tags)
            })
            .collect();
        let index = build_related_index(&documents);

        assert_eq!(index.len(), documents.len());
        for (subject, entries) in &index {
            assert!(entries.len() <= MAX_RELATED);
            assert!(entries.iter().all(|e| e.shared_tags >= 1));
            assert!(entries.iter().all(|e| &e.slug != subject));
            for pair in entries.windows(2) {
                let ordered = pair[0].shared_tags > pair[1].shared_tags
                    || (pair[0].shared_tags == pair[1].shared_tags
                        && pair[0].date >= pair[1].date);
                assert!(ordered, "{subject}: {:?}", slugs(entries));
            }
        }
    }

    #[test]
    fn test_lists_are_not_necessarily_symmetric() {
        let mut documents = vec![doc("a", "2024-12-01", &["x", "y"])];
        for i in 1..=5 {
            documents.push(doc(&format!("c{i}"), &format!("2024-0{i}-01"), &["x", "y"]));
        }
        documents.push(doc("b", "2023-01-01", &["x"]));
        let index = build_related_index(&documents);

        // `a` fills its five slots with posts sharing two tags
        assert_eq!(index["a"].len(), MAX_RELATED);
        assert!(!index["a"].iter().any(|e| e.slug == "b"));

        // `b` shares one tag with everyone, and `a` is the newest
        assert_eq!(index["b"][0].slug, "a");
    }

    #[test]
    fn test_untagged_post_has_empty_list() {
        let documents = vec![
            doc("tagged", "2024-01-01", &["go"]),
            doc("bare", "2024-01-02", &[]),
        ];
        let index = build_related_index(&documents);

        assert!(index["bare"].is_empty());
        assert!(index["tagged"].is_empty());
    }

    #[test]
    fn test_entry_wire_shape() {
        let documents = vec![
            doc("one", "2024-01-01", &["go"]),
            doc("two", "2024-01-02", &["go"]),
        ];
        let related = rank_related(&documents[1], &documents);
        let json = serde_json::to_value(&related[0]).unwrap();

        assert_eq!(json["slug"], "one");
        assert_eq!(json["title"], "Title one");
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["readingTime"], 1);
        assert_eq!(json["sharedTags"], 1);
    }
}

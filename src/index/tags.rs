//! Tag index: tag name to the slugs that declare it.

use crate::document::Document;
use std::collections::BTreeMap;

/// Case-sensitive tag name to slugs, each bucket in load order.
///
/// Keys iterate in ascending order so the serialized index is stable.
pub type TagIndex = BTreeMap<String, Vec<String>>;

/// Append each post's slug to the bucket of every tag it declares.
pub fn build_tag_index(documents: &[Document]) -> TagIndex {
    let mut index = TagIndex::new();
    for document in documents {
        for tag in document.tags() {
            index
                .entry(tag.clone())
                .or_default()
                .push(document.slug().to_owned());
        }
    }
    index
}

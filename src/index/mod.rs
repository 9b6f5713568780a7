//! Derived indices over the loaded posts.
//!
//! Each indexer reads the post list on its own; none depends on another.
//!
//! | Index      | Key            | Value                                  |
//! |------------|----------------|----------------------------------------|
//! | tags       | tag name       | slugs in load order                    |
//! | categories | full path      | [`CategoryNode`] (parent/children)     |
//! | related    | subject slug   | top 5 [`RelatedEntry`] by shared tags  |
//! | search     | token          | sorted, unique slugs                   |

pub mod category;
pub mod related;
pub mod search;
pub mod tags;

pub use category::{CategoryNode, CategoryRegistry, CategoryTreeNode};
pub use related::{RelatedEntry, RelatedIndex, build_related_index};
pub use search::{InvertedIndex, build_inverted_index};
pub use tags::{TagIndex, build_tag_index};

use crate::document::Document;

/// All indices for one run.
#[derive(Debug, Clone, Default)]
pub struct Indices {
    pub tags: TagIndex,
    pub categories: CategoryRegistry,
    pub related: RelatedIndex,
    pub search: InvertedIndex,
}

impl Indices {
    pub fn build(documents: &[Document]) -> Self {
        Self {
            tags: build_tag_index(documents),
            categories: CategoryRegistry::build(documents),
            related: build_related_index(documents),
            search: build_inverted_index(documents),
        }
    }
}

//! Hierarchical category registry.
//!
//! A category path like `tech/go/web` is decomposed into one node per
//! prefix (`tech`, `tech/go`, `tech/go/web`). Only the full declared path
//! receives the post; ancestors exist for the hierarchy and count only
//! posts filed directly under them.
//!
//! # Two passes over one registry
//!
//! ```text
//! decompose: for each post ── ensure node per prefix ── add slug to leaf
//! link:      for each node ── push path into parent.children (once)
//! ```
//!
//! The registry is never modified after [`CategoryRegistry::build`] returns.

use crate::document::Document;
use serde::Serialize;
use std::collections::BTreeMap;

/// Path separator inside category strings.
const SEPARATOR: char = '/';

/// One category, identified by its full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Last path segment.
    pub name: String,
    pub path: String,
    /// Posts whose category is exactly this path, in load order.
    pub post_slugs: Vec<String>,
    pub post_count: usize,
    /// Immediate path prefix; `None` for roots. A path with a leading
    /// separator (`/go`) has the empty root `""` as its parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl CategoryNode {
    fn new(name: &str, path: &str, parent: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            path: path.to_owned(),
            post_slugs: Vec::new(),
            post_count: 0,
            parent: parent.map(str::to_owned),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Presentation tree node; children sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeNode {
    pub name: String,
    pub path: String,
    pub post_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryTreeNode>,
}

/// Arena of category nodes keyed by full path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    nodes: BTreeMap<String, CategoryNode>,
}

impl CategoryRegistry {
    /// Build the linked hierarchy from every categorized post.
    pub fn build(documents: &[Document]) -> Self {
        let mut registry = Self::default();
        for document in documents {
            if let Some(category) = document.category() {
                registry.decompose(category, document.slug());
            }
        }
        registry.link();
        registry
    }

    /// Ensure a node for every prefix of `category`; file `slug` under the full path.
    fn decompose(&mut self, category: &str, slug: &str) {
        let mut parent: Option<String> = None;
        let mut segments = category.split(SEPARATOR).peekable();

        // Segments are kept verbatim, empty ones included.
        while let Some(segment) = segments.next() {
            let path = match &parent {
                None => segment.to_owned(),
                Some(prefix) => format!("{prefix}{SEPARATOR}{segment}"),
            };

            let node = self
                .nodes
                .entry(path.clone())
                .or_insert_with(|| CategoryNode::new(segment, &path, parent.as_deref()));

            if segments.peek().is_none() {
                node.post_slugs.push(slug.to_owned());
                node.post_count = node.post_slugs.len();
            }

            parent = Some(path);
        }
    }

    /// Record every node in its parent's child list, at most once.
    fn link(&mut self) {
        let edges: Vec<(String, String)> = self
            .nodes
            .values()
            .filter_map(|node| Some((node.parent.clone()?, node.path.clone())))
            .collect();

        for (parent, child) in edges {
            if let Some(parent) = self.nodes.get_mut(&parent)
                && !parent.children.contains(&child)
            {
                parent.children.push(child);
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&CategoryNode> {
        self.nodes.get(path)
    }

    /// Nodes in ascending path order.
    pub fn nodes(&self) -> impl Iterator<Item = &CategoryNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nested view of the hierarchy, roots and children sorted by name.
    pub fn tree(&self) -> Vec<CategoryTreeNode> {
        let mut roots: Vec<_> = self
            .nodes
            .values()
            .filter(|node| node.is_root())
            .map(|node| self.tree_node(node))
            .collect();
        roots.sort_by(|a, b| a.name.cmp(&b.name));
        roots
    }

    fn tree_node(&self, node: &CategoryNode) -> CategoryTreeNode {
        let mut children: Vec<_> = node
            .children
            .iter()
            .filter_map(|path| self.nodes.get(path))
            .map(|child| self.tree_node(child))
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));

        CategoryTreeNode {
            name: node.name.clone(),
            path: node.path.clone(),
            post_count: node.post_count,
            children,
        }
    }
}

//! Typed payloads for listing pages, category details and summaries.
//!
//! Each struct mirrors one JSON document in the artifact tree. Fields
//! borrow from the loaded posts and indices; nothing is copied until
//! serialization.

use super::paginate::PaginationInfo;
use crate::{
    config::SiteInfo,
    document::{Document, Preview},
    index::CategoryNode,
};
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Listing pages
// ============================================================================

/// `posts/by-page/{n}.json`
#[derive(Debug, Clone, Serialize)]
pub struct PostsPage<'a> {
    pub posts: &'a [&'a Document],
    #[serde(flatten)]
    pub pagination: PaginationInfo,
}

/// `previews/by-page/{n}.json`
#[derive(Debug, Clone, Serialize)]
pub struct PreviewsPage<'a> {
    pub previews: &'a [Preview<'a>],
    #[serde(flatten)]
    pub pagination: PaginationInfo,
}

/// `posts/meta.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsMeta<'a> {
    pub total_pages: usize,
    pub total_posts: usize,
    pub posts_per_page: usize,
    pub date_format: &'a str,
    pub date_format_readable: String,
}

/// `previews/meta.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewsMeta {
    pub total_pages: usize,
    pub total_previews: usize,
    pub previews_per_page: usize,
}

// ============================================================================
// Categories
// ============================================================================

/// `categories/{safe-path}.json`: the node plus its own posts, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail<'a> {
    pub info: &'a CategoryNode,
    pub posts: Vec<&'a Document>,
}

// ============================================================================
// Unified summary (`meta.json`)
// ============================================================================

/// Identifying fields of the newest or oldest post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentSummary<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub date: &'a str,
}

impl<'a> From<&'a Document> for DocumentSummary<'a> {
    fn from(document: &'a Document) -> Self {
        Self {
            slug: document.slug(),
            title: document.title(),
            date: document.date(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsSummary<'a> {
    pub total: usize,
    pub per_page: usize,
    pub total_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest: Option<DocumentSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<DocumentSummary<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewsSummary {
    pub total: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Key count plus posts per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountStats<'a> {
    pub total: usize,
    pub stats: BTreeMap<&'a str, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFormatInfo<'a> {
    pub date_format: &'a str,
    pub date_format_readable: String,
}

/// `meta.json`
#[derive(Debug, Clone, Serialize)]
pub struct Meta<'a> {
    pub posts: PostsSummary<'a>,
    pub previews: PreviewsSummary,
    pub tags: CountStats<'a>,
    pub categories: CountStats<'a>,
    pub config: DateFormatInfo<'a>,
    pub site: &'a SiteInfo,
}

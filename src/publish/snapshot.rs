//! Publication assembly.
//!
//! # Phases
//!
//! ```text
//! documents ──► sort by date ──► paginate posts / previews
//!                    │
//!                    ├──► category details (node + its posts, newest first)
//!                    ├──► summaries (posts/meta, previews/meta, meta)
//!                    └──► OpenAPI description (only when enabled)
//! ```
//!
//! Tag, category, related and search indices are taken as built; this
//! module only joins them with the ordered post list.

use super::{
    date::{readable_date_format, sort_by_date},
    openapi::OpenApi,
    paginate::{PageSpan, paginate, total_pages},
    types::{
        CategoryDetail, CountStats, DateFormatInfo, DocumentSummary, Meta, PostsMeta,
        PostsSummary, PreviewsMeta, PreviewsSummary,
    },
};
use crate::{
    config::SiteConfig,
    diagnostics::Diagnostics,
    document::{Document, Preview},
    index::{CategoryTreeNode, Indices},
};
use std::collections::BTreeMap;

/// Everything one run publishes, ready to be laid out as artifacts.
#[derive(Debug, Clone)]
pub struct PublicationSnapshot<'a> {
    /// All posts, newest first.
    pub sorted: Vec<&'a Document>,
    /// Body-less projection of `sorted`, same order.
    pub previews: Vec<Preview<'a>>,
    pub post_pages: Vec<PageSpan>,
    pub preview_pages: Vec<PageSpan>,
    /// Keyed by full category path.
    pub categories: BTreeMap<String, CategoryDetail<'a>>,
    pub category_tree: Vec<CategoryTreeNode>,
    pub indices: &'a Indices,
    pub posts_meta: PostsMeta<'a>,
    pub previews_meta: PreviewsMeta,
    pub meta: Meta<'a>,
    /// Present when `[build.openapi]` is set.
    pub openapi: Option<OpenApi>,
}

/// Join posts and indices into a snapshot.
///
/// Page sizes must already be validated. Date problems are recovered from
/// and returned as diagnostics.
pub fn assemble<'a>(
    documents: &'a [Document],
    indices: &'a Indices,
    config: &'a SiteConfig,
) -> (PublicationSnapshot<'a>, Diagnostics) {
    let build = &config.build;
    let mut diagnostics = Diagnostics::new();

    let sorted = sort_by_date(documents, &build.date_format, &mut diagnostics);
    let previews: Vec<_> = sorted.iter().copied().map(Document::preview).collect();

    let post_pages = paginate(sorted.len(), build.posts_per_page);
    let preview_pages = paginate(previews.len(), build.previews_per_page);

    let categories = category_details(&sorted, indices);
    let category_tree = indices.categories.tree();

    let readable = readable_date_format(&build.date_format);
    let post_page_count = total_pages(sorted.len(), build.posts_per_page);
    let preview_page_count = total_pages(previews.len(), build.previews_per_page);

    let posts_meta = PostsMeta {
        total_pages: post_page_count,
        total_posts: sorted.len(),
        posts_per_page: build.posts_per_page,
        date_format: &build.date_format,
        date_format_readable: readable.clone(),
    };
    let previews_meta = PreviewsMeta {
        total_pages: preview_page_count,
        total_previews: previews.len(),
        previews_per_page: build.previews_per_page,
    };

    let meta = Meta {
        posts: PostsSummary {
            total: sorted.len(),
            per_page: build.posts_per_page,
            total_pages: post_page_count,
            newest: sorted.first().map(|document| DocumentSummary::from(*document)),
            oldest: sorted.last().map(|document| DocumentSummary::from(*document)),
        },
        previews: PreviewsSummary {
            total: previews.len(),
            per_page: build.previews_per_page,
            total_pages: preview_page_count,
        },
        tags: CountStats {
            total: indices.tags.len(),
            stats: indices
                .tags
                .iter()
                .map(|(tag, slugs)| (tag.as_str(), slugs.len()))
                .collect(),
        },
        categories: CountStats {
            total: indices.categories.len(),
            stats: indices
                .categories
                .nodes()
                .map(|node| (node.path.as_str(), node.post_count))
                .collect(),
        },
        config: DateFormatInfo {
            date_format: &build.date_format,
            date_format_readable: readable,
        },
        site: &config.site,
    };

    let openapi = build.openapi.then(|| OpenApi::describe(&config.site));

    let snapshot = PublicationSnapshot {
        sorted,
        previews,
        post_pages,
        preview_pages,
        categories,
        category_tree,
        indices,
        posts_meta,
        previews_meta,
        meta,
        openapi,
    };
    (snapshot, diagnostics)
}

/// One detail per category node, posts in global date order.
fn category_details<'a>(
    sorted: &[&'a Document],
    indices: &'a Indices,
) -> BTreeMap<String, CategoryDetail<'a>> {
    indices
        .categories
        .nodes()
        .map(|node| {
            let posts = sorted
                .iter()
                .copied()
                .filter(|document| document.category() == Some(node.path.as_str()))
                .collect();
            (node.path.clone(), CategoryDetail { info: node, posts })
        })
        .collect()
}

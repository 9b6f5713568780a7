//! Artifact tree layout.
//!
//! Maps every logical path below the API directory to the payload stored
//! there:
//!
//! ```text
//! posts/      all.json  by-slug/{slug}.json  by-page/{n}.json  meta.json
//! previews/   all.json  by-slug/{slug}.json  by-page/{n}.json  meta.json
//! tags/       all.json  {tag}.json
//! categories/ all.json  tree.json  {safe-path}.json
//! related/    all.json  {slug}.json
//! search/     inverted.json
//! meta.json
//! openapi.json                       (only with `[build.openapi]`)
//! ```
//!
//! Keys taken from content (slugs, tags, category paths) become file stems
//! through [`safe_file_stem`]. Fixed artifacts are laid out first, so a tag
//! named `all` cannot replace `tags/all.json`.

use super::{
    error::PublishError,
    openapi::OpenApi,
    snapshot::PublicationSnapshot,
    types::{CategoryDetail, Meta, PostsMeta, PostsPage, PreviewsMeta, PreviewsPage},
};
use crate::{
    diagnostics::{DiagnosticKind, Diagnostics},
    document::{Document, Preview},
    index::{
        CategoryRegistry, CategoryTreeNode, InvertedIndex, RelatedEntry, RelatedIndex, TagIndex,
    },
};
use serde::Serialize;
use std::collections::{BTreeMap, btree_map::Entry};

/// A JSON document in the artifact tree.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Payload<'a> {
    Document(&'a Document),
    Documents(&'a [&'a Document]),
    Preview(Preview<'a>),
    Previews(&'a [Preview<'a>]),
    PostsPage(PostsPage<'a>),
    PreviewsPage(PreviewsPage<'a>),
    PostsMeta(&'a PostsMeta<'a>),
    PreviewsMeta(&'a PreviewsMeta),
    Tags(&'a TagIndex),
    Slugs(&'a [String]),
    Categories(&'a CategoryRegistry),
    CategoryDetail(&'a CategoryDetail<'a>),
    CategoryTree(&'a [CategoryTreeNode]),
    RelatedIndex(&'a RelatedIndex),
    Related(&'a [RelatedEntry]),
    Search(&'a InvertedIndex),
    Meta(&'a Meta<'a>),
    OpenApi(&'a OpenApi),
}

/// File stem for a content-derived key: path separators become `_`.
pub fn safe_file_stem(key: &str) -> String {
    key.replace(['/', '\\'], "_")
}

/// Logical path to payload, iterated in path order.
#[derive(Debug, Clone, Default)]
pub struct ArtifactTree<'a> {
    entries: BTreeMap<String, Payload<'a>>,
}

impl<'a> ArtifactTree<'a> {
    /// Lay out every artifact of `snapshot`.
    ///
    /// Two keys that map to the same file keep the first payload and report
    /// the second as a diagnostic.
    pub fn layout(snapshot: &'a PublicationSnapshot<'a>) -> (Self, Diagnostics) {
        let mut tree = Self::default();
        let mut diagnostics = Diagnostics::new();
        let indices = snapshot.indices;

        // Fixed paths
        tree.insert("meta.json", Payload::Meta(&snapshot.meta));
        tree.insert("posts/all.json", Payload::Documents(&snapshot.sorted));
        tree.insert("posts/meta.json", Payload::PostsMeta(&snapshot.posts_meta));
        tree.insert("previews/all.json", Payload::Previews(&snapshot.previews));
        tree.insert("previews/meta.json", Payload::PreviewsMeta(&snapshot.previews_meta));
        tree.insert("tags/all.json", Payload::Tags(&indices.tags));
        tree.insert("categories/all.json", Payload::Categories(&indices.categories));
        tree.insert("categories/tree.json", Payload::CategoryTree(&snapshot.category_tree));
        tree.insert("related/all.json", Payload::RelatedIndex(&indices.related));
        tree.insert("search/inverted.json", Payload::Search(&indices.search));
        if let Some(openapi) = &snapshot.openapi {
            tree.insert("openapi.json", Payload::OpenApi(openapi));
        }

        // Pages
        for span in &snapshot.post_pages {
            let page = PostsPage {
                posts: &snapshot.sorted[span.range.clone()],
                pagination: span.info,
            };
            let path = format!("posts/by-page/{}.json", span.info.page);
            tree.insert(path, Payload::PostsPage(page));
        }
        for span in &snapshot.preview_pages {
            let page = PreviewsPage {
                previews: &snapshot.previews[span.range.clone()],
                pagination: span.info,
            };
            let path = format!("previews/by-page/{}.json", span.info.page);
            tree.insert(path, Payload::PreviewsPage(page));
        }

        // Content-keyed paths
        let mut keyed = |path: String, subject: &str, payload: Payload<'a>| {
            if !tree.insert(path.clone(), payload) {
                diagnostics.warn(
                    DiagnosticKind::PathCollision,
                    subject,
                    format!("`{path}` is already taken, artifact skipped"),
                );
            }
        };

        for document in &snapshot.sorted {
            let stem = safe_file_stem(document.slug());
            keyed(
                format!("posts/by-slug/{stem}.json"),
                document.slug(),
                Payload::Document(document),
            );
        }
        for preview in &snapshot.previews {
            let stem = safe_file_stem(preview.slug());
            keyed(
                format!("previews/by-slug/{stem}.json"),
                preview.slug(),
                Payload::Preview(*preview),
            );
        }
        for (tag, slugs) in &indices.tags {
            keyed(
                format!("tags/{}.json", safe_file_stem(tag)),
                tag,
                Payload::Slugs(slugs),
            );
        }
        for (path, detail) in &snapshot.categories {
            keyed(
                format!("categories/{}.json", safe_file_stem(path)),
                path,
                Payload::CategoryDetail(detail),
            );
        }
        for (slug, entries) in &indices.related {
            keyed(
                format!("related/{}.json", safe_file_stem(slug)),
                slug,
                Payload::Related(entries),
            );
        }

        (tree, diagnostics)
    }

    /// Add `payload` at `path` unless the path is taken. Returns whether it was added.
    pub fn insert(&mut self, path: impl Into<String>, payload: Payload<'a>) -> bool {
        match self.entries.entry(path.into()) {
            Entry::Vacant(entry) => {
                entry.insert(payload);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, path: &str) -> Option<&Payload<'a>> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> &BTreeMap<String, Payload<'a>> {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pretty JSON for the artifact at `path`, or `None` if there is none.
    pub fn render(&self, path: &str) -> Option<Result<String, PublishError>> {
        self.entries.get(path).map(|payload| render(path, payload))
    }
}

/// Serialize one payload as two-space indented JSON.
pub fn render(path: &str, payload: &Payload<'_>) -> Result<String, PublishError> {
    serde_json::to_string_pretty(payload).map_err(|source| PublishError::Serialize {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SiteConfig,
        document::fixtures::{doc, doc_in},
        index::Indices,
        publish::assemble,
    };
    use serde_json::Value;

    fn sample() -> Vec<Document> {
        vec![
            doc("one", "2024-01-01", &["go", "web"]),
            doc("two", "2024-01-02", &["go"]),
            doc_in("three", "2024-01-03", "tech/go"),
        ]
    }

    fn json(tree: &ArtifactTree<'_>, path: &str) -> Value {
        let rendered = tree.render(path).unwrap().unwrap();
        serde_json::from_str(&rendered).unwrap()
    }

    #[test]
    fn test_path_scheme() {
        let documents = sample();
        let indices = Indices::build(&documents);
        let config = SiteConfig::default();
        let (snapshot, _) = assemble(&documents, &indices, &config);
        let (tree, diagnostics) = ArtifactTree::layout(&snapshot);
        assert!(diagnostics.is_empty());

        let paths: Vec<_> = tree.paths().collect();
        assert_eq!(
            paths,
            [
                "categories/all.json",
                "categories/tech.json",
                "categories/tech_go.json",
                "categories/tree.json",
                "meta.json",
                "posts/all.json",
                "posts/by-page/0.json",
                "posts/by-slug/one.json",
                "posts/by-slug/three.json",
                "posts/by-slug/two.json",
                "posts/meta.json",
                "previews/all.json",
                "previews/by-page/0.json",
                "previews/by-slug/one.json",
                "previews/by-slug/three.json",
                "previews/by-slug/two.json",
                "previews/meta.json",
                "related/all.json",
                "related/one.json",
                "related/three.json",
                "related/two.json",
                "search/inverted.json",
                "tags/all.json",
                "tags/go.json",
                "tags/web.json",
            ]
        );
    }

    #[test]
    fn test_payload_shapes() {
        let documents = sample();
        let indices = Indices::build(&documents);
        let config = SiteConfig::default();
        let (snapshot, _) = assemble(&documents, &indices, &config);
        let (tree, _) = ArtifactTree::layout(&snapshot);

        let page = json(&tree, "posts/by-page/0.json");
        assert_eq!(page["posts"][0]["frontmatter"]["slug"], "three");
        assert_eq!(page["page"], 0);
        assert_eq!(page["totalItems"], 3);
        assert!(page.get("nextPage").is_none());

        let previews = json(&tree, "previews/by-page/0.json");
        assert!(previews["previews"][0].get("markdown").is_none());

        assert_eq!(json(&tree, "tags/go.json"), serde_json::json!(["one", "two"]));
        assert_eq!(json(&tree, "related/two.json")[0]["sharedTags"], 1);
        assert_eq!(json(&tree, "related/three.json"), serde_json::json!([]));

        let detail = json(&tree, "categories/tech_go.json");
        assert_eq!(detail["info"]["path"], "tech/go");
        assert_eq!(detail["posts"][0]["frontmatter"]["slug"], "three");

        let tree_json = json(&tree, "categories/tree.json");
        assert_eq!(tree_json[0]["children"][0]["path"], "tech/go");

        let meta = json(&tree, "posts/meta.json");
        assert_eq!(meta["totalPosts"], 3);
        assert_eq!(meta["postsPerPage"], 10);
        assert_eq!(meta["dateFormatReadable"], "yyyy-mm-dd");

        let meta = json(&tree, "previews/meta.json");
        assert_eq!(meta["totalPreviews"], 3);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let documents = sample();
        let indices = Indices::build(&documents);
        let config = SiteConfig::default();
        let (snapshot, _) = assemble(&documents, &indices, &config);
        let (tree, _) = ArtifactTree::layout(&snapshot);

        let second_indices = Indices::build(&documents);
        let (second_snapshot, _) = assemble(&documents, &second_indices, &config);
        let (second_tree, _) = ArtifactTree::layout(&second_snapshot);

        assert_eq!(tree.len(), second_tree.len());
        for path in tree.paths() {
            let first = tree.render(path).unwrap().unwrap();
            let second = second_tree.render(path).unwrap().unwrap();
            assert_eq!(first, second, "{path}");
        }
    }

    #[test]
    fn test_content_keys_cannot_replace_fixed_artifacts() {
        let documents = vec![
            doc("all", "2024-01-01", &["all"]),
            doc("other", "2024-01-02", &["all"]),
        ];
        let indices = Indices::build(&documents);
        let config = SiteConfig::default();
        let (snapshot, _) = assemble(&documents, &indices, &config);
        let (tree, diagnostics) = ArtifactTree::layout(&snapshot);

        assert!(matches!(tree.get("tags/all.json"), Some(Payload::Tags(_))));
        assert!(matches!(tree.get("related/all.json"), Some(Payload::RelatedIndex(_))));
        assert!(matches!(tree.get("posts/by-slug/all.json"), Some(Payload::Document(_))));

        let collisions: Vec<_> = diagnostics
            .of_kind(DiagnosticKind::PathCollision)
            .map(|d| d.subject.as_str())
            .collect();
        assert_eq!(collisions, ["all", "all"]);
    }

    #[test]
    fn test_openapi_only_when_enabled() {
        let documents = sample();
        let indices = Indices::build(&documents);

        let config = SiteConfig::default();
        let (snapshot, _) = assemble(&documents, &indices, &config);
        let (tree, _) = ArtifactTree::layout(&snapshot);
        assert!(tree.get("openapi.json").is_none());

        let mut config = SiteConfig::default();
        config.build.openapi = true;
        config.site.name = "Leaf Notes".into();
        let (snapshot, _) = assemble(&documents, &indices, &config);
        let (tree, diagnostics) = ArtifactTree::layout(&snapshot);
        assert!(diagnostics.is_empty());

        let described = json(&tree, "openapi.json");
        assert_eq!(described["info"]["title"], "Leaf Notes API");
        assert_eq!(described["servers"][0]["url"], "/api");
        assert!(described["paths"].get("/tags/{tag}.json").is_some());
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("tech/go/web"), "tech_go_web");
        assert_eq!(safe_file_stem(r"c\sharp"), "c_sharp");
        assert_eq!(safe_file_stem("plain"), "plain");
    }
}

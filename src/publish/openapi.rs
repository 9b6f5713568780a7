//! OpenAPI 3.0 description of the artifact tree.
//!
//! Every endpoint is a static `GET` of one file below `/api`. Component
//! schemas mirror the serialized shape of the payload types, so a client
//! generator sees the same field names the JSON files carry.
//!
//! ```text
//! openapi.json
//!   ├── info         (site name, description, crate version)
//!   ├── servers      [{ url: "/api" }]
//!   ├── paths        one GET per artifact path template
//!   └── components   Post, Preview, PostsPage, CategoryNode, Meta, ...
//! ```

use crate::config::SiteInfo;
use serde::Serialize;
use std::collections::BTreeMap;

const OPENAPI_VERSION: &str = "3.0.3";

/// Prefix under which the artifact tree is served.
pub const BASE_PATH: &str = "/api";

const JSON: &str = "application/json";

// ============================================================================
// Document model
// ============================================================================

/// Root OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApi {
    pub openapi: &'static str,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: BTreeMap<&'static str, PathItem>,
    pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub title: String,
    pub version: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub url: &'static str,
}

/// Artifacts are read-only, so a path only ever has `get`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathItem {
    pub get: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub summary: &'static str,
    pub operation_id: &'static str,
    pub tags: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: BTreeMap<&'static str, Response>,
}

/// A `{name}` segment of a path template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "in")]
    pub location: &'static str,
    pub required: bool,
    pub description: &'static str,
    pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub description: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<&'static str, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType {
    pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Components {
    pub schemas: BTreeMap<&'static str, Schema>,
}

/// The subset of JSON Schema the payloads need.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<&'static str, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,
}

impl Schema {
    fn of(kind: &'static str) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::of("string")
    }

    pub fn integer() -> Self {
        Self::of("integer")
    }

    pub fn boolean() -> Self {
        Self::of("boolean")
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of("array")
        }
    }

    /// Object with arbitrary keys, every value matching `values`.
    pub fn map(values: Schema) -> Self {
        Self {
            additional_properties: Some(Box::new(values)),
            ..Self::of("object")
        }
    }

    /// Reference to a schema under `components/schemas`.
    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/components/schemas/{name}")),
            ..Self::default()
        }
    }

    /// Object with the given fields; all are required except `optional`.
    fn object<const N: usize>(fields: [(&'static str, Schema); N], optional: &[&str]) -> Self {
        let required = fields
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !optional.contains(name))
            .collect();
        Self {
            properties: fields.into_iter().collect(),
            required,
            ..Self::of("object")
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl OpenApi {
    /// Describe the artifact tree of a site.
    pub fn describe(site: &SiteInfo) -> Self {
        let paths = endpoints()
            .into_iter()
            .map(|endpoint| (endpoint.path, endpoint.into_path_item()))
            .collect();

        Self {
            openapi: OPENAPI_VERSION,
            info: Info {
                title: format!("{} API", site.name),
                version: env!("CARGO_PKG_VERSION"),
                description: site.description.clone(),
            },
            servers: vec![Server { url: BASE_PATH }],
            paths,
            components: Components {
                schemas: component_schemas(),
            },
        }
    }
}

/// One artifact path template and what it returns.
struct Endpoint {
    path: &'static str,
    operation_id: &'static str,
    summary: &'static str,
    tag: &'static str,
    parameter: Option<(&'static str, &'static str, Schema)>,
    schema: Schema,
}

impl Endpoint {
    fn new(
        path: &'static str,
        operation_id: &'static str,
        summary: &'static str,
        tag: &'static str,
        schema: Schema,
    ) -> Self {
        Self {
            path,
            operation_id,
            summary,
            tag,
            parameter: None,
            schema,
        }
    }

    fn with_param(mut self, name: &'static str, description: &'static str, schema: Schema) -> Self {
        self.parameter = Some((name, description, schema));
        self
    }

    fn into_path_item(self) -> PathItem {
        let mut responses = BTreeMap::from([(
            "200",
            Response {
                description: "OK",
                content: BTreeMap::from([(JSON, MediaType { schema: self.schema })]),
            },
        )]);

        let parameters = match self.parameter {
            Some((name, description, schema)) => {
                responses.insert(
                    "404",
                    Response {
                        description: "No artifact for this key",
                        content: BTreeMap::new(),
                    },
                );
                vec![Parameter {
                    name,
                    location: "path",
                    required: true,
                    description,
                    schema,
                }]
            }
            None => Vec::new(),
        };

        PathItem {
            get: Operation {
                summary: self.summary,
                operation_id: self.operation_id,
                tags: vec![self.tag],
                parameters,
                responses,
            },
        }
    }
}

fn endpoints() -> Vec<Endpoint> {
    let slug = "Post slug";
    let page = "0-indexed page number";
    let slugs = || Schema::array(Schema::string());

    vec![
        Endpoint::new("/meta.json", "getMeta", "Site-wide summary", "meta", Schema::reference("Meta")),
        // Posts
        Endpoint::new("/posts/all.json", "getPosts", "All posts, newest first", "posts", Schema::array(Schema::reference("Post"))),
        Endpoint::new("/posts/by-slug/{slug}.json", "getPost", "One post", "posts", Schema::reference("Post"))
            .with_param("slug", slug, Schema::string()),
        Endpoint::new("/posts/by-page/{page}.json", "getPostsPage", "One page of posts", "posts", Schema::reference("PostsPage"))
            .with_param("page", page, Schema::integer()),
        Endpoint::new("/posts/meta.json", "getPostsMeta", "Post listing totals", "posts", Schema::reference("PostsMeta")),
        // Previews
        Endpoint::new("/previews/all.json", "getPreviews", "All previews, newest first", "previews", Schema::array(Schema::reference("Preview"))),
        Endpoint::new("/previews/by-slug/{slug}.json", "getPreview", "One preview", "previews", Schema::reference("Preview"))
            .with_param("slug", slug, Schema::string()),
        Endpoint::new("/previews/by-page/{page}.json", "getPreviewsPage", "One page of previews", "previews", Schema::reference("PreviewsPage"))
            .with_param("page", page, Schema::integer()),
        Endpoint::new("/previews/meta.json", "getPreviewsMeta", "Preview listing totals", "previews", Schema::reference("PreviewsMeta")),
        // Tags
        Endpoint::new("/tags/all.json", "getTags", "Tag to post slugs", "tags", Schema::map(slugs())),
        Endpoint::new("/tags/{tag}.json", "getTag", "Post slugs for one tag", "tags", slugs())
            .with_param("tag", "Tag, with `/` and `\\` replaced by `_`", Schema::string()),
        // Categories
        Endpoint::new("/categories/all.json", "getCategories", "Every category node by path", "categories", Schema::map(Schema::reference("CategoryNode"))),
        Endpoint::new("/categories/tree.json", "getCategoryTree", "Category hierarchy", "categories", Schema::array(Schema::reference("CategoryTreeNode"))),
        Endpoint::new("/categories/{category}.json", "getCategory", "One category and its posts", "categories", Schema::reference("CategoryDetail"))
            .with_param("category", "Category path, with `/` replaced by `_`", Schema::string()),
        // Related
        Endpoint::new("/related/all.json", "getRelatedIndex", "Related posts for every post", "related", Schema::map(Schema::array(Schema::reference("RelatedEntry")))),
        Endpoint::new("/related/{slug}.json", "getRelated", "Related posts for one post", "related", Schema::array(Schema::reference("RelatedEntry")))
            .with_param("slug", slug, Schema::string()),
        // Search
        Endpoint::new("/search/inverted.json", "getSearchIndex", "Token to post slugs", "search", Schema::map(slugs())),
    ]
}

fn pagination_fields() -> [(&'static str, Schema); 7] {
    [
        ("page", Schema::integer()),
        ("totalPages", Schema::integer()),
        ("totalItems", Schema::integer()),
        ("hasNext", Schema::boolean()),
        ("hasPrevious", Schema::boolean()),
        ("nextPage", Schema::integer()),
        ("prevPage", Schema::integer()),
    ]
}

/// Listing page: `items` under `key` plus the pagination envelope.
fn page_schema(key: &'static str, item: &str) -> Schema {
    let mut schema = Schema::object(pagination_fields(), &["nextPage", "prevPage"]);
    schema
        .properties
        .insert(key, Schema::array(Schema::reference(item)));
    schema.required.insert(0, key);
    schema
}

fn component_schemas() -> BTreeMap<&'static str, Schema> {
    let string = Schema::string;
    let integer = Schema::integer;
    let strings = || Schema::array(Schema::string());

    let front_matter = Schema::object(
        [
            ("title", string()),
            ("author", string()),
            ("date", string()),
            ("tags", strings()),
            ("category", string()),
            ("excerpt", string()),
            ("slug", string()),
        ],
        &["category", "excerpt"],
    );
    let post = Schema::object(
        [
            ("markdown", string()),
            ("frontmatter", Schema::reference("FrontMatter")),
            ("excerpt", string()),
            ("readingTime", integer()),
        ],
        &[],
    );
    let preview = Schema::object(
        [
            ("frontmatter", Schema::reference("FrontMatter")),
            ("excerpt", string()),
            ("readingTime", integer()),
        ],
        &[],
    );
    let posts_meta = Schema::object(
        [
            ("totalPages", integer()),
            ("totalPosts", integer()),
            ("postsPerPage", integer()),
            ("dateFormat", string()),
            ("dateFormatReadable", string()),
        ],
        &[],
    );
    let previews_meta = Schema::object(
        [
            ("totalPages", integer()),
            ("totalPreviews", integer()),
            ("previewsPerPage", integer()),
        ],
        &[],
    );
    let category_node = Schema::object(
        [
            ("name", string()),
            ("path", string()),
            ("postSlugs", strings()),
            ("postCount", integer()),
            ("parent", string()),
            ("children", strings()),
        ],
        &["parent", "children"],
    );
    let category_tree_node = Schema::object(
        [
            ("name", string()),
            ("path", string()),
            ("postCount", integer()),
            ("children", Schema::array(Schema::reference("CategoryTreeNode"))),
        ],
        &["children"],
    );
    let category_detail = Schema::object(
        [
            ("info", Schema::reference("CategoryNode")),
            ("posts", Schema::array(Schema::reference("Post"))),
        ],
        &[],
    );
    let related_entry = Schema::object(
        [
            ("slug", string()),
            ("title", string()),
            ("date", string()),
            ("readingTime", integer()),
            ("sharedTags", integer()),
        ],
        &[],
    );
    let document_summary = Schema::object(
        [("slug", string()), ("title", string()), ("date", string())],
        &[],
    );
    let count_stats = Schema::object(
        [("total", integer()), ("stats", Schema::map(integer()))],
        &[],
    );
    let meta = Schema::object(
        [
            (
                "posts",
                Schema::object(
                    [
                        ("total", integer()),
                        ("perPage", integer()),
                        ("totalPages", integer()),
                        ("newest", Schema::reference("DocumentSummary")),
                        ("oldest", Schema::reference("DocumentSummary")),
                    ],
                    &["newest", "oldest"],
                ),
            ),
            (
                "previews",
                Schema::object(
                    [
                        ("total", integer()),
                        ("perPage", integer()),
                        ("totalPages", integer()),
                    ],
                    &[],
                ),
            ),
            ("tags", Schema::reference("CountStats")),
            ("categories", Schema::reference("CountStats")),
            (
                "config",
                Schema::object(
                    [("dateFormat", string()), ("dateFormatReadable", string())],
                    &[],
                ),
            ),
            (
                "site",
                Schema::object(
                    [
                        ("name", string()),
                        ("description", string()),
                        ("tagline", string()),
                    ],
                    &[],
                ),
            ),
        ],
        &[],
    );

    BTreeMap::from([
        ("CategoryDetail", category_detail),
        ("CategoryNode", category_node),
        ("CategoryTreeNode", category_tree_node),
        ("CountStats", count_stats),
        ("DocumentSummary", document_summary),
        ("FrontMatter", front_matter),
        ("Meta", meta),
        ("Post", post),
        ("PostsMeta", posts_meta),
        ("PostsPage", page_schema("posts", "Post")),
        ("Preview", preview),
        ("PreviewsMeta", previews_meta),
        ("PreviewsPage", page_schema("previews", "Preview")),
        ("RelatedEntry", related_entry),
    ])
}

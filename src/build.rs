//! Build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── validate config           (fatal on bad page sizes)
//!     ├── load_documents()          (parallel read + parse)
//!     ├── Indices::build()          (tags, categories, related, search)
//!     ├── assemble()                (sort, paginate, summaries)
//!     ├── ArtifactTree::layout()    (logical path → payload)
//!     ├── write_artifacts()         (<output>/api/**.json)
//!     └── prune_stale()             (drop files from earlier runs)
//! ```
//!
//! Recovered problems from every stage are gathered and printed at the end.

use crate::{
    config::SiteConfig,
    diagnostics::Diagnostics,
    document::load_documents,
    index::Indices,
    log,
    publish::{ArtifactTree, assemble, prune_stale, write_artifacts},
};
use anyhow::{Context, Result, bail};

/// What a finished build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub posts: usize,
    pub artifacts: usize,
    pub diagnostics: Diagnostics,
}

/// Run the whole pipeline once and write the artifact tree.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    config.validate()?;

    let content = &config.build.content;
    let loaded = load_documents(content, config.build.words_per_minute)
        .with_context(|| format!("Failed to load posts from {}", content.display()))?;
    let mut diagnostics = loaded.diagnostics;
    let documents = loaded.documents;

    if documents.is_empty() {
        report(&diagnostics);
        bail!("No posts found in {}", content.display());
    }
    log!("build"; "loaded {} posts", documents.len());

    let indices = Indices::build(&documents);
    log!(
        "build";
        "{} tags, {} categories, {} search terms",
        indices.tags.len(),
        indices.categories.len(),
        indices.search.len()
    );

    let (snapshot, assembled) = assemble(&documents, &indices, config);
    diagnostics.extend(assembled);

    let (tree, collisions) = ArtifactTree::layout(&snapshot);
    diagnostics.extend(collisions);

    let api_dir = config.api_dir();
    let artifacts = write_artifacts(&tree, &api_dir, config.build.clean)
        .with_context(|| format!("Failed to publish to {}", api_dir.display()))?;
    log!("publish"; "wrote {} artifacts to {}", artifacts, api_dir.display());

    let pruned = prune_stale(&tree, &api_dir)
        .with_context(|| format!("Failed to prune stale artifacts in {}", api_dir.display()))?;
    if pruned > 0 {
        log!("publish"; "removed {} stale artifacts", pruned);
    }

    report(&diagnostics);

    Ok(BuildReport {
        posts: documents.len(),
        artifacts,
        diagnostics,
    })
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        log!("warn"; "{}", diagnostic);
    }
    if !diagnostics.is_empty() {
        log!("build"; "finished with {} warnings", diagnostics.len());
    }
}

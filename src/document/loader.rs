//! Post discovery and parsing.
//!
//! # Pipeline
//!
//! ```text
//! content/**/*.md ──► read + parse (parallel) ──► assign slugs (load order)
//!                          │                              │
//!                          └── skipped files ─────────────┴──► Diagnostics
//! ```
//!
//! Files are visited in file-name order so slug suffixes (`-1`, `-2`) are
//! stable across runs.

use super::{
    Document, DocumentError, FrontMatter,
    excerpt::{derive_excerpt, reading_time},
    frontmatter::parse_front_matter,
    slug::{SlugAllocator, slugify_title},
};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Extension of post source files.
const POST_EXTENSION: &str = "md";

/// Posts in load order plus everything that was recovered from.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub documents: Vec<Document>,
    pub diagnostics: Diagnostics,
}

/// A post file that parsed, before its slug is assigned.
struct ParsedPost {
    frontmatter: FrontMatter,
    body: String,
}

/// Load every markdown post below `content_dir`.
///
/// Unreadable or unparsable files are skipped with a diagnostic. A missing
/// content directory is fatal.
pub fn load_documents(content_dir: &Path, words_per_minute: usize) -> Result<LoadOutcome> {
    if !content_dir.is_dir() {
        bail!("Content directory `{}` not found", content_dir.display());
    }

    let files = collect_post_files(content_dir)?;
    let parsed: Vec<_> = files
        .par_iter()
        .map(|path| (path, read_post(path)))
        .collect();

    let mut outcome = LoadOutcome::default();
    let mut slugs = SlugAllocator::new();

    for (path, result) in parsed {
        let subject = relative_name(path, content_dir);
        let ParsedPost {
            mut frontmatter,
            body,
        } = match result {
            Ok(post) => post,
            Err(err) => {
                outcome
                    .diagnostics
                    .warn(DiagnosticKind::SkippedFile, subject, err.to_string());
                continue;
            }
        };

        let missing = frontmatter.missing_fields();
        if !missing.is_empty() {
            let message = missing
                .iter()
                .map(|field| format!("{field} is empty"))
                .collect::<Vec<_>>()
                .join(", ");
            outcome
                .diagnostics
                .warn(DiagnosticKind::FrontMatter, subject, message);
        }

        let base = if frontmatter.slug.is_empty() {
            slugify_title(&frontmatter.title)
        } else {
            frontmatter.slug.clone()
        };
        frontmatter.slug = slugs.allocate(&base);
        frontmatter.dedup_tags();

        let excerpt = derive_excerpt(frontmatter.excerpt.as_deref(), &body);
        let reading_time = reading_time(&body, words_per_minute);

        outcome.documents.push(Document {
            markdown: body,
            frontmatter,
            excerpt,
            reading_time,
        });
    }

    Ok(outcome)
}

/// Markdown files below `dir`, sorted by file name at each level.
fn collect_post_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == POST_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn read_post(path: &Path) -> Result<ParsedPost, DocumentError> {
    let content =
        fs::read_to_string(path).map_err(|err| DocumentError::Io(path.to_path_buf(), err))?;
    let (frontmatter, body) = parse_front_matter(&content)?;
    Ok(ParsedPost {
        frontmatter,
        body: body.to_owned(),
    })
}

/// Path relative to the content directory, for messages.
fn relative_name(path: &Path, content_dir: &Path) -> String {
    path.strip_prefix(content_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

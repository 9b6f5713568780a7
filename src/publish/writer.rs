//! Persist the artifact tree below the API directory.

use super::{
    artifact::{ArtifactTree, render},
    error::PublishError,
};
use rayon::prelude::*;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Write every artifact as pretty JSON under `api_dir`.
///
/// With `clean`, the directory is removed first so artifacts from earlier
/// runs cannot linger. Returns the number of files written; the first
/// failure aborts the rest.
pub fn write_artifacts(
    tree: &ArtifactTree<'_>,
    api_dir: &Path,
    clean: bool,
) -> Result<usize, PublishError> {
    if clean && api_dir.exists() {
        fs::remove_dir_all(api_dir).map_err(|source| PublishError::Clean {
            path: api_dir.to_path_buf(),
            source,
        })?;
    }

    tree.entries()
        .par_iter()
        .try_for_each(|(logical, payload)| {
            let json = render(logical, payload)?;
            let path = api_dir.join(logical);
            let write_err = |source| PublishError::Write {
                path: path.clone(),
                source,
            };

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
            fs::write(&path, json).map_err(write_err)
        })?;

    Ok(tree.len())
}

/// Delete files under `api_dir` that are not part of `tree`, then any
/// directories left empty. Returns the number of files removed.
///
/// Run after [`write_artifacts`] so a post, tag or category dropped since
/// the last build no longer has an artifact on disk.
pub fn prune_stale(tree: &ArtifactTree<'_>, api_dir: &Path) -> Result<usize, PublishError> {
    if !api_dir.is_dir() {
        return Ok(0);
    }

    let keep: HashSet<PathBuf> = tree.paths().map(|path| api_dir.join(path)).collect();
    let clean_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| PublishError::Clean { path, source }
    };

    let mut removed = 0;
    for entry in WalkDir::new(api_dir).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|err| PublishError::Clean {
            path: err.path().unwrap_or(api_dir).to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            // Children come first, so emptiness is final here
            let mut children = fs::read_dir(path).map_err(clean_err(path))?;
            if children.next().is_none() {
                fs::remove_dir(path).map_err(clean_err(path))?;
            }
        } else if !keep.contains(path) {
            fs::remove_file(path).map_err(clean_err(path))?;
            removed += 1;
        }
    }

    Ok(removed)
}

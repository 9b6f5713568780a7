//! Site initialization module.
//!
//! Creates a new site with a default configuration and a sample post.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Ignore file written next to the config
const IGNORE_FILE: &str = ".gitignore";

/// Sample post written into the content directory
const SAMPLE_POST: &str = "\
---
title: Hello, World
author: Leafpress
date: 2024-01-01
tags: [welcome]
category: general
---

This is your first post. Edit or delete it, then run `leafpress build`.

<!--more-->

Everything below the marker is left out of the excerpt.
";

/// Create a new site at `config.root`.
///
/// Without an explicit name the site is created in the current root, which
/// must then be empty.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = &config.root;

    if config.config_path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            config.config_path.display()
        );
    }

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `leafpress init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_content(&config.build.content)?;
    init_default_config(&config.config_path)?;
    init_ignored_files(root, &config.build.output)?;

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Create the content directory with one sample post
fn init_content(content: &Path) -> Result<()> {
    if content.exists() {
        bail!(
            "Path `{}` already exists. Try `leafpress init <SITE_NAME>` instead.",
            content.display()
        );
    }
    fs::create_dir_all(content)
        .with_context(|| format!("Failed to create {}", content.display()))?;
    fs::write(content.join("hello-world.md"), SAMPLE_POST)?;
    Ok(())
}

/// Ignore the build output, unless an ignore file is already present
fn init_ignored_files(root: &Path, output: &Path) -> Result<()> {
    let path = root.join(IGNORE_FILE);
    if path.exists() {
        return Ok(());
    }

    let output = output.strip_prefix(root).unwrap_or(output);
    fs::write(&path, format!("/{}/\n", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::build_site, cli::Cli};
    use clap::Parser;

    fn init_config(root: &Path, name: Option<&str>) -> SiteConfig {
        let root = root.to_str().unwrap();
        let mut args = vec!["leafpress", "--root", root, "init"];
        args.extend(name);
        SiteConfig::load(&Cli::parse_from(args)).unwrap()
    }

    #[test]
    fn test_new_site_in_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("unrelated.txt"), "").unwrap();

        let config = init_config(dir.path(), Some("blog"));
        new_site(&config, true).unwrap();

        let site = dir.path().join("blog");
        assert!(site.join("leafpress.toml").is_file());
        assert!(site.join("content/hello-world.md").is_file());
        assert_eq!(fs::read_to_string(site.join(".gitignore")).unwrap(), "/output/\n");

        let written = SiteConfig::from_path(&site.join("leafpress.toml")).unwrap();
        assert_eq!(written.build.posts_per_page, 10);
    }

    #[test]
    fn test_new_site_requires_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let config = init_config(dir.path(), None);
        let err = new_site(&config, false).unwrap_err();
        assert!(err.to_string().contains("not empty"));
    }

    #[test]
    fn test_new_site_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("blog");
        fs::create_dir_all(&site).unwrap();
        fs::write(site.join("leafpress.toml"), "").unwrap();

        let config = init_config(dir.path(), Some("blog"));
        assert!(new_site(&config, true).is_err());
    }

    #[test]
    fn test_sample_site_builds() {
        let dir = tempfile::tempdir().unwrap();
        let config = init_config(dir.path(), Some("blog"));
        new_site(&config, true).unwrap();

        let report = build_site(&config).unwrap();
        assert_eq!(report.posts, 1);
        assert!(report.diagnostics.is_empty());
        assert!(dir.path().join("blog/output/api/categories/general.json").is_file());
    }
}

//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary post directories and writing
//! post files with front matter.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary directory for posts.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_posts_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Builds post source with front matter.
///
/// # Arguments
///
/// * `title`: Post title
/// * `date`: Publication date as YYYY-MM-DD
/// * `featured`: Featured flag
/// * `body`: Markdown body
pub fn post_source(title: &str, date: &str, featured: bool, body: &str) -> String {
    format!(
        "---\ntitle: \"{}\"\ndate: {}\nexcerpt: Excerpt for {}\ntags: [Rust, Web]\nfeatured: {}\n---\n{}",
        title, date, title, featured, body
    )
}

/// Writes file into directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes a post file named `<slug>.md`.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_post(dir: &Path, slug: &str, date: &str, featured: bool, body: &str) -> Result<()> {
    let title = format!("Post {}", slug);
    write_file(
        dir,
        &format!("{}.md", slug),
        &post_source(&title, date, featured, body),
    )
}

/// Writes the sample set of posts used across integration tests.
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn write_sample_posts(dir: &Path) -> Result<()> {
    write_post(
        dir,
        "building-real-time-defi-dashboards",
        "2025-01-15",
        true,
        "# Building Dashboards\n\n## The Problem\n\nCalling `setState` on **every** message.\n\n\
         ```typescript\nconst buffer = new Map<string, number>();\n```\n\n\
         - **Batch** updates\n- *Virtualize* lists\n",
    )?;
    write_post(
        dir,
        "account-abstraction-ux-patterns",
        "2024-11-20",
        false,
        "# Account Abstraction\n\n1. Install wallet\n2. Write seed words\n",
    )?;
    write_post(
        dir,
        "typescript-patterns-react",
        "2024-05-12",
        true,
        "# Patterns\n\nUse branded types.",
    )?;
    Ok(())
}

//! Static site generation from a post store.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::blog::PostStore;
use crate::pages;

/// Directory under the output root holding the blog pages.
pub const BLOG_DIR: &str = "blog";

/// Settings that shape the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Output directory root
    pub output: PathBuf,
    /// Site name used in titles and the index heading
    pub name: String,
    /// Optional intro text on the index page
    pub description: Option<String>,
    /// Absolute site URL for sitemap entries
    pub base_url: String,
}

/// Files written by [`generate_site`].
#[derive(Debug, Clone, Default)]
pub struct SiteSummary {
    /// Paths written, in generation order
    pub written: Vec<PathBuf>,
    /// Number of post pages generated
    pub post_count: usize,
}

impl SiteSummary {
    /// Path of the generated blog index, if written.
    pub fn index_path(&self) -> Option<&Path> {
        self.written
            .iter()
            .find(|path| {
                path.file_name().is_some_and(|name| name == "index.html")
                    && path
                        .parent()
                        .and_then(|p| p.file_name())
                        .is_some_and(|dir| dir == BLOG_DIR)
            })
            .map(PathBuf::as_path)
    }
}

/// Generates the blog index, one page per post and the sitemap.
///
/// Output layout:
///
/// - `<output>/blog/index.html`
/// - `<output>/blog/<slug>.html`
/// - `<output>/sitemap.xml`
///
/// # Arguments
///
/// * `options`: Output directory and site metadata
/// * `store`: Posts to publish
///
/// # Returns
///
/// Summary of written files
///
/// # Errors
///
/// Returns error if a directory cannot be created or a file cannot be
/// written
///
/// # Examples
///
/// ```no_run
/// use folio::{PostStore, SiteOptions, generate_site};
/// use std::path::PathBuf;
///
/// let store = PostStore::load_dir("posts")?;
/// let options = SiteOptions {
///     output: PathBuf::from("dist"),
///     name: "Writing".to_string(),
///     description: None,
///     base_url: "https://example.com".to_string(),
/// };
/// let summary = generate_site(&options, &store)?;
/// println!("{} posts", summary.post_count);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(options: &SiteOptions, store: &PostStore) -> Result<SiteSummary> {
    let blog_dir = options.output.join(BLOG_DIR);
    fs::create_dir_all(&blog_dir)
        .with_context(|| format!("Failed to create blog directory: {}", blog_dir.display()))?;

    let mut summary = SiteSummary::default();

    let index_html = pages::index::generate(&options.name, options.description.as_deref(), store);
    let index_path = blog_dir.join("index.html");
    write_output(&index_path, &index_html.into_string())?;
    summary.written.push(index_path);

    for post in store.posts() {
        let html = pages::post::generate(&options.name, post);
        let path = blog_dir.join(format!("{}.html", post.slug));
        write_output(&path, &html.into_string())?;
        log::debug!("Rendered post '{}'", post.slug);
        summary.written.push(path);
        summary.post_count += 1;
    }

    let sitemap = pages::sitemap::generate(&options.base_url, store);
    let sitemap_path = options.output.join("sitemap.xml");
    write_output(&sitemap_path, &sitemap)?;
    summary.written.push(sitemap_path);

    Ok(summary)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

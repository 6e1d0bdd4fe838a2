//! Blog post records.

use thiserror::Error;

use super::date::PostDate;
use super::frontmatter::{FrontMatterError, parse_front_matter};
use crate::markdown::render_markdown;
use crate::util::{estimate_read_time, is_valid_slug};

/// Errors produced while building a post from its source file.
#[derive(Debug, Error)]
pub enum PostError {
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),
    #[error("Invalid post slug '{0}': must be a plain file name")]
    InvalidSlug(String),
}

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw Markdown body.
    pub content: String,
    pub date: PostDate,
    pub read_time: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl BlogPost {
    /// Builds a post from a source file with YAML front matter.
    ///
    /// The slug comes from the `slug` field when present, otherwise from
    /// `fallback_slug` (usually the file stem). A missing `readTime` is
    /// estimated from the body.
    ///
    /// # Arguments
    ///
    /// * `source`: Full file content including front matter
    /// * `fallback_slug`: Slug to use when front matter has none
    ///
    /// # Errors
    ///
    /// Returns error if front matter is missing or invalid, or the slug is
    /// not a safe file name
    pub fn from_source(source: &str, fallback_slug: &str) -> Result<Self, PostError> {
        let (meta, body) = parse_front_matter(source)?;

        let slug = meta.slug.unwrap_or_else(|| fallback_slug.to_string());
        if !is_valid_slug(&slug) {
            return Err(PostError::InvalidSlug(slug));
        }

        let read_time = meta
            .read_time
            .unwrap_or_else(|| estimate_read_time(body));

        Ok(Self {
            slug,
            title: meta.title,
            excerpt: meta.excerpt,
            content: body.to_string(),
            date: meta.date,
            read_time,
            tags: meta.tags,
            featured: meta.featured,
        })
    }

    /// Renders the post body to an HTML fragment.
    pub fn render_html(&self) -> String {
        render_markdown(&self.content)
    }
}

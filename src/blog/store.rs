//! In-memory post collection with slug lookup.

use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::post::BlogPost;

const POST_EXTENSION: &str = "md";

/// Posts sorted newest first.
///
/// Ties on date are broken by slug so output order is stable.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<BlogPost>,
}

impl PostStore {
    /// Builds a store from posts already in memory.
    ///
    /// # Errors
    ///
    /// Returns error if two posts share a slug
    pub fn from_posts(mut posts: Vec<BlogPost>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for post in &posts {
                if !seen.insert(post.slug.as_str()) {
                    bail!("Duplicate post slug: {}", post.slug);
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        Ok(Self { posts })
    }

    /// Loads every `*.md` file in a directory (not recursive).
    ///
    /// The file stem is the slug unless front matter overrides it.
    ///
    /// # Arguments
    ///
    /// * `dir`: Directory containing post files
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be read, any post fails to
    /// parse, or two posts share a slug
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read posts directory: {}", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list posts directory: {}", dir.display()))?
                .path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(POST_EXTENSION)
            {
                paths.push(path);
            } else {
                log::debug!("Skipping non-post entry {}", path.display());
            }
        }
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("Invalid post file name: {}", path.display()))?;
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read post: {}", path.display()))?;
            let post = BlogPost::from_source(&source, stem)
                .with_context(|| format!("Failed to parse post: {}", path.display()))?;

            log::debug!("Loaded post '{}' from {}", post.slug, path.display());
            posts.push(post);
        }

        Self::from_posts(posts)
            .with_context(|| format!("Invalid posts in {}", dir.display()))
    }

    /// Returns all posts, newest first.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Looks up a post by exact slug.
    pub fn get(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Returns featured posts, newest first.
    pub fn featured(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|post| post.featured).collect()
    }

    /// Groups posts by publication year.
    ///
    /// # Returns
    ///
    /// Groups ordered by year descending; posts within a group keep store
    /// order
    pub fn group_by_year(&self) -> Vec<(i32, Vec<&BlogPost>)> {
        let mut groups: Vec<(i32, Vec<&BlogPost>)> = Vec::new();
        for post in &self.posts {
            let year = post.date.year();
            match groups.last_mut() {
                Some((current, members)) if *current == year => members.push(post),
                _ => groups.push((year, vec![post])),
            }
        }
        groups
    }
}

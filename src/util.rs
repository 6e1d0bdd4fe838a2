//! Utility functions for folio

/// Average reading speed used for read time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// Checks that a slug is safe to use as an output file name.
///
/// Slugs end up as `<slug>.html` inside the output directory, so they must
/// not be able to escape it or create hidden files.
///
/// # Arguments
///
/// * `slug`: Candidate slug
///
/// # Returns
///
/// True when the slug is non-empty, has no path separators, no `..`, and
/// does not start with a dot
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains("..")
        && !slug.contains(['/', '\\'])
        && !slug.chars().any(char::is_control)
}

/// Estimates read time for a post body, e.g. "3 min read".
///
/// Rounds up and never reports less than one minute.
pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

//! YAML front matter at the top of a post file.

use serde::Deserialize;
use thiserror::Error;

use super::date::PostDate;

/// Errors emitted while locating or parsing front matter.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("Missing YAML front matter: post must start with '---'")]
    Missing,
    #[error("Unterminated YAML front matter: expected closing '---'")]
    Unterminated,
    #[error("Front matter parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Post metadata declared in front matter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: PostDate,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, alias = "readTime")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Splits a post source into its YAML block and Markdown body.
///
/// Leading blank lines and a UTF8 byte order mark are allowed before the
/// opening fence.
///
/// # Returns
///
/// Tuple of (yaml, body) borrowed from the input
///
/// # Errors
///
/// Returns error if the source does not open with a `---` fence or the
/// fence is never closed
pub fn split_front_matter(source: &str) -> Result<(&str, &str), FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = LineCursor::new(source);

    let yaml_start = loop {
        match lines.next() {
            Some((line, _)) if line.trim().is_empty() => continue,
            Some((line, next)) if is_fence(line) => break next,
            _ => return Err(FrontMatterError::Missing),
        }
    };

    let mut yaml_end = yaml_start;
    while let Some((line, next)) = lines.next() {
        if is_fence(line) {
            let yaml = source[yaml_start..yaml_end].trim_end_matches(['\r', '\n']);
            return Ok((yaml, &source[next..]));
        }
        yaml_end = next;
    }

    Err(FrontMatterError::Unterminated)
}

/// Parses front matter and returns it with the remaining body.
///
/// # Errors
///
/// Returns error if the block is missing, unterminated, or fails to
/// deserialize (including missing `title`/`date` or a malformed date)
pub fn parse_front_matter(source: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let (yaml, body) = split_front_matter(source)?;
    let front_matter = serde_yaml::from_str(yaml)?;
    Ok((front_matter, body))
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

/// Iterates lines yielding each line and the byte offset after it.
struct LineCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let (line, advance) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        Some((line, self.pos))
    }
}

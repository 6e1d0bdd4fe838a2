//! Individual rewrite stages of the Markdown subset.
//!
//! Every stage is a total function over the whole document. Stages are
//! applied in a fixed order by the renderer and later stages rely on the
//! shape left behind by earlier ones (paragraph wrapping skips lines that
//! already open with a tag, list wrapping only sees `<li>` elements).

use regex::Captures;

use super::patterns::{
    BLANK_RUN_RE, BOLD_RE, FENCED_CODE_RE, H1_RE, H2_RE, H3_RE, INLINE_CODE_RE, ITALIC_RE,
    LINE_RE, ORDERED_ITEM_RE, UNORDERED_ITEM_RE,
};

const LI_OPEN: &str = "<li>";
const LI_CLOSE: &str = "</li>";

/// Language class used when a fence has no identifier.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Converts fenced code blocks to `<pre><code>` elements.
///
/// The body is trimmed and only `<` and `>` are escaped. Ampersands pass
/// through untouched.
pub fn fenced_code_blocks(text: &str) -> String {
    FENCED_CODE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let language = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
            let body = escape_angle_brackets(caps[2].trim_matches(is_markup_space));
            format!("<pre><code class=\"language-{language}\">{body}</code></pre>")
        })
        .into_owned()
}

fn escape_angle_brackets(code: &str) -> String {
    code.replace('<', "&lt;").replace('>', "&gt;")
}

/// Converts `#`, `##` and `###` lines to headings.
///
/// Deepest level first so a `###` line is never claimed by a shallower rule.
pub fn headings(text: &str) -> String {
    let text = H3_RE.replace_all(text, "<h3>${1}</h3>");
    let text = H2_RE.replace_all(&text, "<h2>${1}</h2>");
    H1_RE.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

pub fn inline_code(text: &str) -> String {
    INLINE_CODE_RE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

pub fn bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// Must run after [`bold`] so paired `**` markers are already consumed.
pub fn italic(text: &str) -> String {
    ITALIC_RE.replace_all(text, "<em>${1}</em>").into_owned()
}

pub fn unordered_items(text: &str) -> String {
    UNORDERED_ITEM_RE
        .replace_all(text, "<li>${1}</li>")
        .into_owned()
}

pub fn ordered_items(text: &str) -> String {
    ORDERED_ITEM_RE
        .replace_all(text, "<li>${1}</li>")
        .into_owned()
}

/// Wraps each run of adjacent `<li>` elements in a single `<ul>`.
///
/// A run starts at an `<li>` and ends at the first `</li>` that is not
/// followed (after optional whitespace) by another `<li>`. The whitespace
/// between items stays inside the list.
pub fn wrap_lists(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search_pos = 0;

    while let Some(offset) = text[search_pos..].find(LI_OPEN) {
        let start = search_pos + offset;

        match list_run_end(text, start) {
            Some(end) => {
                result.push_str(&text[copied..start]);
                result.push_str("<ul>");
                result.push_str(&text[start..end]);
                result.push_str("</ul>");
                copied = end;
                search_pos = end;
            }
            None => search_pos = start + 1,
        }
    }

    result.push_str(&text[copied..]);
    result
}

/// Returns the byte offset just past the `</li>` closing the run that
/// opens at `start`, or `None` when no closing tag ends the run.
fn list_run_end(text: &str, start: usize) -> Option<usize> {
    let body_start = start + LI_OPEN.len();
    // Item content must be at least one character long.
    let first_len = text[body_start..].chars().next()?.len_utf8();
    let mut search_pos = body_start + first_len;

    while let Some(offset) = text[search_pos..].find(LI_CLOSE) {
        let close_start = search_pos + offset;
        let close_end = close_start + LI_CLOSE.len();

        if !text[close_end..]
            .trim_start_matches(is_markup_space)
            .starts_with(LI_OPEN)
        {
            return Some(close_end);
        }
        search_pos = close_start + 1;
    }

    None
}

/// Wraps every line that does not already open with a tag in `<p>`.
///
/// The tag check is a plain prefix test: `<` followed by an ASCII
/// lowercase letter. Whitespace-only lines become empty.
pub fn paragraphs(text: &str) -> String {
    LINE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let line = &caps[0];
            if starts_with_tag(line) {
                line.to_string()
            } else if line.trim_matches(is_markup_space).is_empty() {
                String::new()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .into_owned()
}

fn starts_with_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'<' && bytes[1].is_ascii_lowercase()
}

/// Collapses three or more consecutive newlines into one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

pub fn trim(text: &str) -> String {
    text.trim_matches(is_markup_space).to_string()
}

/// Whitespace as the dialect defines it: Unicode white space plus the
/// byte order mark, excluding NEL (U+0085).
fn is_markup_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

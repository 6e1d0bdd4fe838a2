//! Markdown subset renderer.

use anyhow::{Context, Result};
use std::path::Path;

use super::stages;

/// A single rewrite applied to the whole document.
type Stage = fn(&str) -> String;

/// Rewrite stages in application order.
///
/// Order is part of the output contract: headings must exist before the
/// paragraph rule runs, bold must consume `**` before italic sees `*`, and
/// list items must exist before they are grouped.
const PIPELINE: [(&str, Stage); 11] = [
    ("fenced_code", stages::fenced_code_blocks),
    ("headings", stages::headings),
    ("inline_code", stages::inline_code),
    ("bold", stages::bold),
    ("italic", stages::italic),
    ("unordered_items", stages::unordered_items),
    ("ordered_items", stages::ordered_items),
    ("wrap_lists", stages::wrap_lists),
    ("paragraphs", stages::paragraphs),
    ("collapse_blank_lines", stages::collapse_blank_lines),
    ("trim", stages::trim),
];

/// Renders a small Markdown dialect to an HTML fragment.
///
/// Supports headings (levels 1 to 3), fenced code, inline code, bold,
/// italic, list items and paragraphs. The output is meant for trusted,
/// author-written content: apart from `<` and `>` inside fenced code
/// nothing is escaped, and raw HTML in the input passes straight through.
///
/// Rendering is a pure function of the input and never fails. Syntax the
/// dialect does not know is left as literal text inside a paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source, usually a post body
    ///
    /// # Returns
    ///
    /// HTML fragment without surrounding document structure
    pub fn render(&self, content: &str) -> String {
        let mut html = content.to_string();
        for (name, stage) in PIPELINE {
            html = stage(&html);
            log::trace!("markdown stage {name}: {} bytes", html.len());
        }
        html
    }

    /// Reads a markdown file and renders it.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read as UTF8 text
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

/// Renders markdown with a default [`MarkdownRenderer`].
pub fn render_markdown(content: &str) -> String {
    MarkdownRenderer::new().render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# Hello World\n\nThis is **bold** and *italic* text.";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(
            html,
            "<h1>Hello World</h1>\n\n<p>This is <strong>bold</strong> and <em>italic</em> text.</p>"
        );
    }

    #[test]
    fn test_render_empty_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("");

        // Assert
        assert!(html.is_empty(), "Empty markdown should produce empty HTML");
    }

    #[test]
    fn test_render_whitespace_only() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("\n   \n\t\n");

        // Assert
        assert_eq!(html, "");
    }

    #[test]
    fn test_render_code_blocks() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```js\nconst x = 1 < 2;\n```";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(
            html,
            "<pre><code class=\"language-js\">const x = 1 &lt; 2;</code></pre>"
        );
    }

    #[test]
    fn test_render_lists() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "- one\n- two";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(html, "<ul><li>one</li>\n<li>two</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_render_ordered_lists_become_unordered() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "1. first\n2. second";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(html, "<ul><li>first</li>\n<li>second</li></ul>");
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn test_render_inline_markup_inside_headings_and_items() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "### Use `satisfies` **now**\n\n- **Profile first** with `perf`";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(
            html,
            "<h3>Use <code>satisfies</code> <strong>now</strong></h3>\n\n\
             <ul><li><strong>Profile first</strong> with <code>perf</code></li></ul>"
        );
    }

    #[test]
    fn test_render_collapses_blank_lines() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "first\n\n\n\n\nsecond";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(html, "<p>first</p>\n\n<p>second</p>");
    }

    #[test]
    fn test_render_blank_whitespace_lines_are_dropped() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "first\n    \n  \nsecond";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(html, "<p>first</p>\n\n<p>second</p>");
    }

    #[test]
    fn test_render_unmatched_markers_stay_literal() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.render("**open and `tick");

        // Assert
        assert_eq!(html, "<p>**open and `tick</p>");
    }

    #[test]
    fn test_render_html_passthrough() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "<div class=\"note\">raw</div>\n<DIV>upper</DIV>";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(
            html,
            "<div class=\"note\">raw</div>\n<p><DIV>upper</DIV></p>"
        );
    }

    #[test]
    fn test_multiline_code_continuation_lines_are_line_scoped() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```python\nx = 1\n# comment\ny = 2\n```";

        // Act
        let html = renderer.render(markdown);

        // Assert: the first body line shares the <pre> line, later lines
        // are seen by the line rules like any other text
        assert_eq!(
            html,
            "<pre><code class=\"language-python\">x = 1\n<h1>comment</h1>\n<p>y = 2</code></pre></p>"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# T\n\n- a\n- b\n\n```\ncode\n```\n\nText *x* **y**";

        // Act
        let first = renderer.render(markdown);
        let second = renderer.render(markdown);

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_markdown_matches_renderer() {
        // Arrange
        let markdown = "## Sub\n\nSome *italic* and **bold** text.";

        // Act
        let free = render_markdown(markdown);
        let method = MarkdownRenderer::default().render(markdown);

        // Assert
        assert_eq!(free, method);
        assert_eq!(
            free,
            "<h2>Sub</h2>\n\n<p>Some <em>italic</em> and <strong>bold</strong> text.</p>"
        );
    }

    #[test]
    fn test_render_file() -> Result<()> {
        // Arrange
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("post.md");
        std::fs::write(&path, "# From disk")?;

        // Act
        let html = MarkdownRenderer::new().render_file(&path)?;

        // Assert
        assert_eq!(html, "<h1>From disk</h1>");
        Ok(())
    }

    #[test]
    fn test_render_file_missing() {
        // Act
        let result = MarkdownRenderer::new().render_file("/nonexistent/post.md");

        // Assert
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to read markdown file"));
    }
}

//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Document head metadata for a page.
pub struct PageHead<'a> {
    /// Page title text (without site suffix)
    pub title: &'a str,
    /// Site name appended to the title
    pub site_name: &'a str,
    /// Content for `<meta name="description">`
    pub description: Option<&'a str>,
    /// Joined into `<meta name="keywords">` when non-empty
    pub keywords: &'a [String],
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The caller provides page-specific body content.
///
/// # Arguments
///
/// * `head`: Title and metadata for the document head
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(head: &PageHead<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) " - " (head.site_name) }
                @if let Some(description) = head.description.filter(|d| !d.is_empty()) {
                    meta name="description" content=(description);
                }
                @if !head.keywords.is_empty() {
                    meta name="keywords" content=(head.keywords.join(", "));
                }
            }
            body {
                main class="container" {
                    (body)
                }
            }
        }
    }
}

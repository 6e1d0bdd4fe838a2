//! Back navigation link component

use maud::{Markup, html};

/// Renders a back link to a parent page.
///
/// # Arguments
///
/// * `href`: Relative path of the parent page
/// * `label`: Link text
pub fn back_link(href: &str, label: &str) -> Markup {
    html! {
        nav class="back-nav" {
            a href=(href) class="back-link" { "← " (label) }
        }
    }
}

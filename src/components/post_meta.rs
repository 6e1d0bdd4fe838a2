//! Post metadata line component

use maud::{Markup, html};

use crate::blog::BlogPost;

/// Most tags shown per post.
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Renders the date, read time and tags of a post.
///
/// Used on the post page header and on each index entry. The date is
/// emitted as a `<time>` element with the ISO date as its `datetime`.
/// Only the first [`MAX_VISIBLE_TAGS`] tags are shown.
pub fn post_meta(post: &BlogPost) -> Markup {
    html! {
        div class="post-meta" {
            time datetime=(post.date.to_string()) { (post.date.format_long()) }
            span class="separator" { "·" }
            span class="read-time" { (post.read_time) }
            @if !post.tags.is_empty() {
                ul class="tags" {
                    @for tag in post.tags.iter().take(MAX_VISIBLE_TAGS) {
                        li class="tag" { (tag) }
                    }
                }
            }
        }
    }
}

//! Single post page generation

use maud::{Markup, PreEscaped, html};

use crate::blog::BlogPost;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::nav::back_link;
use crate::components::post_meta::post_meta;

/// Generates the page for one post.
///
/// The rendered Markdown fragment is injected without escaping: post
/// bodies are authored by the site owner and the renderer's output is
/// trusted markup.
///
/// # Arguments
///
/// * `site_name`: Site name for the title suffix and back link
/// * `post`: Post to render
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, post: &BlogPost) -> Markup {
    let content_html = post.render_html();
    let head = PageHead {
        title: &post.title,
        site_name,
        description: Some(&post.excerpt),
        keywords: &post.tags,
    };

    page_wrapper(
        &head,
        html! {
            (back_link("index.html", site_name))

            header class="post-header" {
                h1 class="post-title" { (post.title) }
                @if !post.excerpt.is_empty() {
                    p class="excerpt" { (post.excerpt) }
                }
                (post_meta(post))
            }

            article class="post-content" {
                (PreEscaped(content_html))
            }
        },
    )
}

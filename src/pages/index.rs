//! Blog index page generation

use maud::{Markup, html};

use crate::blog::{BlogPost, PostStore};
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::post_meta::post_meta;

/// Generates the blog index page.
///
/// Lists every post grouped by publication year with the newest year on
/// top. Featured posts carry an inline badge next to their title.
///
/// # Arguments
///
/// * `site_name`: Site name used as the page heading
/// * `description`: Optional intro text under the heading
/// * `store`: Posts to list
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, description: Option<&str>, store: &PostStore) -> Markup {
    let groups = store.group_by_year();
    let head = PageHead {
        title: "Blog",
        site_name,
        description,
        keywords: &[],
    };

    page_wrapper(
        &head,
        html! {
            header class="index-header" {
                h1 class="page-title" { (site_name) }
                @if let Some(intro) = description {
                    p class="intro" { (intro) }
                }
            }

            @if store.is_empty() {
                div class="empty-state" {
                    p { "No posts published yet." }
                }
            } @else {
                @for (year, posts) in &groups {
                    section class="year-group" {
                        h2 class="year" { (year) }
                        ul class="post-list" {
                            @for post in posts {
                                (post_entry(post))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn post_entry(post: &BlogPost) -> Markup {
    html! {
        li class="post-entry" {
            div class="post-heading" {
                a href=(format!("{}.html", post.slug)) class="post-link" { (post.title) }
                @if post.featured {
                    span class="badge-featured" { "Featured" }
                }
            }
            @if !post.excerpt.is_empty() {
                p class="excerpt" { (post.excerpt) }
            }
            (post_meta(post))
        }
    }
}

//! XML sitemap generation

use maud::{Markup, PreEscaped, html};

use crate::blog::{PostDate, PostStore};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

struct SitemapEntry {
    loc: String,
    lastmod: Option<PostDate>,
    changefreq: &'static str,
    priority: f32,
}

/// Generates `sitemap.xml` content for the site.
///
/// Lists the site root, the blog index and every post. Root and index use
/// the newest post date as `lastmod` so output is reproducible.
///
/// # Arguments
///
/// * `base_url`: Absolute site URL; a trailing slash is ignored
/// * `store`: Posts to list
///
/// # Returns
///
/// Sitemap XML document as string
pub fn generate(base_url: &str, store: &PostStore) -> String {
    let base = base_url.trim_end_matches('/');
    let newest = store.posts().first().map(|post| post.date);

    let mut entries = vec![
        SitemapEntry {
            loc: format!("{}/", base),
            lastmod: newest,
            changefreq: "monthly",
            priority: 1.0,
        },
        SitemapEntry {
            loc: format!("{}/blog/", base),
            lastmod: newest,
            changefreq: "weekly",
            priority: 0.8,
        },
    ];
    entries.extend(store.posts().iter().map(|post| SitemapEntry {
        loc: format!("{}/blog/{}.html", base, post.slug),
        lastmod: Some(post.date),
        changefreq: "monthly",
        priority: 0.7,
    }));

    let document: Markup = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NAMESPACE) {
            @for entry in &entries {
                url {
                    loc { (entry.loc) }
                    @if let Some(date) = entry.lastmod {
                        lastmod { (date.to_string()) }
                    }
                    changefreq { (entry.changefreq) }
                    priority { (format!("{:.1}", entry.priority)) }
                }
            }
        }
    };

    document.into_string()
}

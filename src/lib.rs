//! Static blog generator with a minimal Markdown subset renderer.

mod blog;
pub mod components;
mod config;
mod generators;
pub mod markdown;
pub mod pages;
mod util;

pub use blog::{
    BlogPost, DateError, FrontMatter, FrontMatterError, PostDate, PostError, PostStore,
    parse_front_matter, split_front_matter,
};
pub use config::{Config, SettingsError, SiteSettings};
pub use generators::{BLOG_DIR, SiteOptions, SiteSummary, generate_site};
pub use markdown::{MarkdownRenderer, render_markdown};
pub use util::{estimate_read_time, is_valid_slug};

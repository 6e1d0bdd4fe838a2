//! Blog posts: records, front matter, dates and the post store.
//!
//! Posts live on disk as Markdown files with a YAML front matter block.
//! [`PostStore`] loads a directory of them and answers the lookups the
//! page generators need (by slug, featured, grouped by year).

mod date;
mod frontmatter;
mod post;
mod store;

pub use date::{DateError, PostDate};
pub use frontmatter::{FrontMatter, FrontMatterError, parse_front_matter, split_front_matter};
pub use post::{BlogPost, PostError};
pub use store::PostStore;

//! Page generation modules for different output types
//!
//! Each module produces one kind of output file: the blog index, a single
//! post page, or the XML sitemap. HTML pages share components from the
//! components module.

pub mod index;
pub mod post;
pub mod sitemap;

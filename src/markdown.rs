//! Markdown subset rendering.
//!
//! This module turns post bodies written in a small Markdown dialect into
//! HTML fragments. Rendering is a fixed chain of whole-document rewrites
//! rather than a parser: each stage in `stages` sees the output of the one
//! before it.

mod patterns;
mod renderer;
pub mod stages;

pub use renderer::{MarkdownRenderer, render_markdown};

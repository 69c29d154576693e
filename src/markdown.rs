//! Markdown rendering for a small line-oriented dialect.
//!
//! Supports `* ` bullet lists, `**bold**`, `*italic*` and plain paragraphs.
//! Everything else passes through as paragraph text, unescaped.

mod inline;
mod renderer;

pub use renderer::{Fragment, MarkdownRenderer, render};

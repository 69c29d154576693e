//! Converter for a small line-oriented Markdown dialect.

mod assets;
pub mod components;
mod config;
mod markdown;

pub use components::assemble;
pub use config::Config;
pub use markdown::{Fragment, MarkdownRenderer, render};

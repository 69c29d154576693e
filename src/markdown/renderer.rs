//! Line-oriented Markdown to HTML conversion.

use anyhow::{Context, Result};
use log::trace;
use std::fmt;
use std::path::Path;

use super::inline;

/// Prefix marking a bullet line once surrounding whitespace is stripped.
const LIST_MARKER: &str = "* ";

/// Strips whitespace and byte order marks from both ends.
fn strip(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// One piece of emitted HTML.
///
/// Rendering produces fragments in strict source order; the final document
/// is their concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Opening `<ul>` before the first item of a run.
    ListOpen,
    /// A bullet entry. Inline markers are not interpreted here.
    ListItem(&'a str),
    /// Closing `</ul>` after the last item of a run.
    ListClose,
    /// A non-blank, non-list line after bold and italic substitution.
    Paragraph(String),
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::ListOpen => f.write_str("<ul>"),
            Fragment::ListItem(text) => write!(f, "<li>{}</li>", text),
            Fragment::ListClose => f.write_str("</ul>"),
            Fragment::Paragraph(text) => write!(f, "<p>{}</p>", text),
        }
    }
}

/// Fold accumulator: fragments emitted so far and whether a list is open.
#[derive(Debug, Default)]
struct Scan<'a> {
    fragments: Vec<Fragment<'a>>,
    in_list: bool,
}

impl<'a> Scan<'a> {
    fn push_line(mut self, line: &'a str) -> Self {
        let trimmed = strip(line);

        if let Some(item) = trimmed.strip_prefix(LIST_MARKER) {
            if !self.in_list {
                trace!("Opening list");
                self.fragments.push(Fragment::ListOpen);
                self.in_list = true;
            }
            self.fragments.push(Fragment::ListItem(strip(item)));
            return self;
        }

        self.close_list();

        let processed = inline::apply(line);
        if !strip(&processed).is_empty() {
            self.fragments.push(Fragment::Paragraph(processed));
        }

        self
    }

    fn close_list(&mut self) {
        if self.in_list {
            trace!("Closing list");
            self.fragments.push(Fragment::ListClose);
            self.in_list = false;
        }
    }

    fn finish(mut self) -> Vec<Fragment<'a>> {
        self.close_list();
        self.fragments
    }
}

/// Renders the bullet/bold/italic Markdown dialect to an HTML fragment.
///
/// The dialect is deliberately small: lines whose stripped form starts with
/// `* ` become list items, every other non-blank line becomes a paragraph
/// with `**bold**` and `*italic*` spans. Conversion is total; malformed
/// markers degrade to literal text. Output is not HTML escaped and carries
/// no document wrapper.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Splits content into HTML fragments in emission order.
    ///
    /// Scans lines once, left to right. A run of consecutive list lines is
    /// wrapped in exactly one open/close pair; a list still open at the end
    /// of input is closed after the last line.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source, lines separated by `\n`
    ///
    /// # Returns
    ///
    /// Ordered fragments borrowing list item text from `content`
    pub fn fragments<'c>(&self, content: &'c str) -> Vec<Fragment<'c>> {
        content
            .split('\n')
            .fold(Scan::default(), Scan::push_line)
            .finish()
    }

    /// Renders markdown content to an HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Concatenated HTML fragment; empty when the input has no content lines
    pub fn render(&self, content: &str) -> String {
        self.fragments(content)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Renders markdown file at given path.
    ///
    /// Convenience method that reads file and renders content.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read as UTF8 text
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

/// Renders markdown content with a default [`MarkdownRenderer`].
pub fn render(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown)
}

//! Bold and italic substitution for paragraph lines.

use regex::Regex;
use std::sync::LazyLock;

/// `**text**`, shortest match, never spanning a line terminator.
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\n\r\u{2028}\u{2029}]*?)\*\*").expect("bold pattern should compile")
});

/// `*text*`, shortest match. Runs after bold so `**` pairs are already gone.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^\n\r\u{2028}\u{2029}]*?)\*").expect("italic pattern should compile")
});

/// Replaces emphasis markers in a single line with HTML tags.
///
/// Bold is substituted first, then italic on the result. Both passes are
/// global and non-overlapping. Markers without a partner on the same line
/// are left as literal asterisks. Text is not escaped.
///
/// # Arguments
///
/// * `line`: One source line, untrimmed
///
/// # Returns
///
/// Line with `<strong>` and `<em>` spans in place of marker pairs
pub fn apply(line: &str) -> String {
    let bold = BOLD.replace_all(line, "<strong>${1}</strong>");
    ITALIC.replace_all(&bold, "<em>${1}</em>").into_owned()
}

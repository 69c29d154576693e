//! Reusable HTML components for output assembly
//!
//! Maud component functions that wrap a rendered fragment for display:
//! a titled detail card and a standalone page. The fragment is always
//! inserted as pre-escaped markup; only component-owned text such as titles
//! goes through maud escaping.

pub mod card;
pub mod layout;

use maud::PreEscaped;

/// Wraps a rendered fragment in the requested output components.
///
/// With a card title the fragment is placed inside a detail card; with a
/// page title the result is wrapped in a complete HTML document. Without
/// either the fragment is returned unchanged.
///
/// # Arguments
///
/// * `fragment`: HTML produced by the markdown renderer
/// * `card_title`: Optional record title for a detail card
/// * `page_title`: Optional document title, enables standalone page output
///
/// # Returns
///
/// Final HTML string
pub fn assemble(fragment: &str, card_title: Option<&str>, page_title: Option<&str>) -> String {
    let body = match card_title {
        Some(title) => card::detail_card(title, fragment),
        None => PreEscaped(fragment.to_string()),
    };

    match page_title {
        Some(title) => layout::page_wrapper(title, body).into_string(),
        None => body.into_string(),
    }
}

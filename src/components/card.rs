//! Titled detail card around a rendered fragment

use maud::{Markup, PreEscaped, html};

/// Renders a record card with a heading and a details block.
///
/// The title is escaped. The details fragment is inserted verbatim, so
/// callers must pass trusted renderer output.
pub fn detail_card(title: &str, details: &str) -> Markup {
    html! {
        article class="record" {
            h3 class="record-title" { (title) }
            div class="record-details" {
                (PreEscaped(details))
            }
        }
    }
}

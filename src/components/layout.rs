//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::assets::STYLESHEET;

/// Wraps content with standard HTML structure
///
/// Provides DOCTYPE, html, head and container structure for standalone
/// output. The bundled stylesheet is inlined so the page is a single
/// self-contained file.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `body`: Body markup, placed inside the container div
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="container" {
                    (body)
                }
            }
        }
    }
}

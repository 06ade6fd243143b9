//! HTML escaping for text inserted outside a template.

use askama::{Html, MarkupDisplay};

/// Escape `text` for insertion into HTML element content or a quoted
/// attribute value, with the same escaper the templates use.
#[must_use]
pub fn prep(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, Html).to_string()
}

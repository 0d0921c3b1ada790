//! Inline rendering of catalog icons.

use bloom_data::icon::Icon;
use dioxus::prelude::*;

/// Renders an [`Icon`] as a text glyph, optionally tinted.
#[component]
pub fn IconGlyph(icon: Icon, color: Option<String>) -> Element {
    let glyph = icon.glyph();
    let style = match color {
        Some(color) => format!("color: {}; margin-right: 6px;", color),
        None => "margin-right: 6px;".to_string(),
    };

    rsx! {
        span {
            role: "img",
            aria_label: icon.name(),
            style: "{style}",
            "{glyph}"
        }
    }
}

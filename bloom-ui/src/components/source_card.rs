//! Data source card.

use super::IconGlyph;
use bloom_data::data_source::DataSource;
use bloom_data::icon::Icon;
use dioxus::prelude::*;

#[component]
pub fn SourceCard(source: &'static DataSource) -> Element {
    let icon_style = format!(
        "display: inline-flex; align-items: center; justify-content: center; width: 40px; height: 40px; border-radius: 10px; background-color: {};",
        source.color
    );

    rsx! {
        div {
            style: "padding: 20px; background: #111827; border: 1px solid #1f2937; border-radius: 12px;",
            div { style: "{icon_style}", IconGlyph { icon: Icon::Satellite } }
            div {
                style: "margin-top: 12px; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: #9ca3af;",
                "{source.kind}"
            }
            h3 { style: "margin: 4px 0; color: #f9fafb;", "{source.name}" }
            p { style: "margin: 0 0 12px 0; color: #d1d5db;", "{source.description}" }
            div {
                style: "display: flex; justify-content: space-between; font-size: 13px;",
                span { style: "color: #6b7280;", "Resolution" }
                span { style: "color: #10b981;", "{source.resolution}" }
            }
        }
    }
}

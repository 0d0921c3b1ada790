//! Bloom intensity badge and map legend.

use bloom_data::region::BloomIntensity;
use dioxus::prelude::*;

#[component]
pub fn IntensityBadge(label: &'static str, color: String) -> Element {
    let style = format!(
        "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; color: #fff; background-color: {};",
        color
    );

    rsx! {
        span { style: "{style}", "{label}" }
    }
}

/// Legend overlay for the bloom map.
#[component]
pub fn IntensityLegend() -> Element {
    rsx! {
        div {
            style: "position: absolute; bottom: 16px; left: 16px; z-index: 1000; padding: 12px 16px; background: rgba(17, 24, 39, 0.9); border-radius: 8px; color: #e5e7eb;",
            h4 { style: "margin: 0 0 8px 0; font-size: 13px;", "Bloom Intensity" }
            for intensity in BloomIntensity::ALL {
                div {
                    key: "{intensity.label()}",
                    style: "display: flex; align-items: center; gap: 8px; font-size: 12px;",
                    div {
                        style: "width: 10px; height: 10px; border-radius: 50%; background: {intensity.legend_color()};",
                    }
                    span { "{intensity.label()}" }
                }
            }
        }
    }
}

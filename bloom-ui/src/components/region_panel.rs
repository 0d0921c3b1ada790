//! Side panel listing the active bloom regions.

use super::{IconGlyph, IntensityBadge};
use bloom_data::icon::Icon;
use bloom_data::region::BloomRegion;
use dioxus::prelude::*;

#[component]
pub fn RegionPanel(regions: &'static [BloomRegion]) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 260px; padding: 20px; background: #111827; border: 1px solid #1f2937; border-radius: 1rem;",
            div {
                style: "display: flex; align-items: center; margin-bottom: 16px; color: #f9fafb;",
                IconGlyph { icon: Icon::MapPin, color: "#ec4899".to_string() }
                h3 { style: "margin: 0;", "Active Bloom Regions" }
            }
            for region in regions.iter() {
                div {
                    key: "{region.name}",
                    style: "padding: 12px 0; border-top: 1px solid #1f2937;",
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        h4 { style: "margin: 0; color: #e5e7eb;", "{region.name}" }
                        IntensityBadge {
                            label: region.intensity.label(),
                            color: region.color.clone(),
                        }
                    }
                    div {
                        style: "margin-top: 6px; font-size: 13px; color: #9ca3af;",
                        "{region.coordinate_label()}"
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 6px; font-size: 13px; color: #9ca3af;",
                        div { style: "width: 8px; height: 8px; border-radius: 50%; background: #10b981;" }
                        "{region.species}"
                    }
                }
            }
        }
    }
}

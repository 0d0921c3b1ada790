use crate::components::IconGlyph;
use crate::navigation::Page;
use crate::state::AppState;
use bloom_data::icon::Icon;
use dioxus::prelude::*;

/// (value, label, sublabel)
const STATS: [(&str, &str, &str); 3] = [
    ("195+", "Global Coverage", "Countries Monitored"),
    ("Daily", "Temporal Resolution", "Satellite Updates"),
    ("6+", "Data Sources", "NASA Missions"),
];

/// Hero buttons: (caption, target page, icon, primary).
pub(crate) const CALLS_TO_ACTION: [(&str, Page, Icon, bool); 2] = [
    ("Explore Global Blooms", Page::Global, Icon::BarChart, true),
    ("Regional Analysis", Page::Seasonal, Icon::MapPin, false),
];

const PRIMARY_BUTTON: &str = "display: inline-flex; align-items: center; padding: 12px 22px; border: none; border-radius: 10px; background: #ec4899; color: #fff; font-size: 15px; font-weight: 600; cursor: pointer;";
const SECONDARY_BUTTON: &str = "display: inline-flex; align-items: center; padding: 12px 22px; border: 1px solid #374151; border-radius: 10px; background: transparent; color: #e5e7eb; font-size: 15px; font-weight: 600; cursor: pointer;";

fn cta_style(primary: bool) -> &'static str {
    if primary {
        PRIMARY_BUTTON
    } else {
        SECONDARY_BUTTON
    }
}

#[component]
pub fn LandingPage() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            id: "page-landing",
            div {
                style: "text-align: center; padding: 64px 16px; border-radius: 1.5rem; background: radial-gradient(circle at top, rgba(236, 72, 153, 0.25), transparent 60%), linear-gradient(180deg, #111827, #0b1120);",
                div {
                    style: "display: inline-flex; align-items: center; padding: 6px 16px; border-radius: 9999px; border: 1px solid #374151; color: #d1d5db; font-size: 13px;",
                    IconGlyph { icon: Icon::Satellite }
                    "NASA Earth Observation Platform"
                }
                h1 {
                    style: "margin: 20px 0 8px 0; font-size: 64px; color: #f9fafb;",
                    "BloomWatch"
                }
                p {
                    style: "margin: 0 0 16px 0; font-size: 22px; color: #ec4899;",
                    "Witness the Pulse of Life Across Our Planet"
                }
                p {
                    style: "margin: 0 auto 28px auto; max-width: 680px; color: #9ca3af; line-height: 1.6;",
                    "Track flowering phenology events globally using NASA satellite data. From seasonal blooms to climate patterns, explore how vegetation transforms our world, just like pollinators do."
                }
                div {
                    style: "display: flex; justify-content: center; flex-wrap: wrap; gap: 12px;",
                    for (caption, target, icon, primary) in CALLS_TO_ACTION {
                        button {
                            key: "{caption}",
                            style: cta_style(primary),
                            onclick: move |_| state.navigate(target),
                            IconGlyph { icon: icon }
                            "{caption}"
                        }
                    }
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 32px;",
                for (value, label, sublabel) in STATS {
                    div {
                        key: "{label}",
                        style: "flex: 1; min-width: 200px; padding: 24px; text-align: center; background: #111827; border: 1px solid #1f2937; border-radius: 12px;",
                        div { style: "font-size: 32px; font-weight: 700; color: #10b981;", "{value}" }
                        div { style: "margin-top: 4px; font-weight: 600; color: #e5e7eb;", "{label}" }
                        div { style: "font-size: 13px; color: #6b7280;", "{sublabel}" }
                    }
                }
            }
        }
    }
}

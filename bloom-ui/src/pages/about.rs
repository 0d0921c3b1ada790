use crate::components::IconGlyph;
use crate::navigation::Page;
use crate::state::AppState;
use bloom_data::icon::Icon;
use dioxus::prelude::*;

/// Footer links that switch pages, in display order.
pub(crate) const FOOTER_LINKS: [(&str, Page); 2] = [("About", Page::About), ("Data Sources", Page::Data)];

pub(crate) const FOOTER_LINK: &str = "color: #9ca3af; text-decoration: none; cursor: pointer; background: none; border: none; font-size: 14px; padding: 0;";

#[component]
pub fn AboutPage() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            id: "page-about",
            div {
                style: "padding: 40px; background: #111827; border: 1px solid #1f2937; border-radius: 1rem; text-align: center;",
                h1 { style: "margin: 0 0 16px 0; color: #f9fafb;", "Scalable from Local to Global" }
                p {
                    style: "margin: 0 auto; max-width: 720px; color: #9ca3af; line-height: 1.6;",
                    "Whether monitoring a single agricultural region or tracking global phenological patterns, BloomWatch adapts to your scale. Our high-resolution temporal datasets provide insights that inform decision-making from conservation field sites to international climate research."
                }
            }
            footer {
                style: "margin-top: 40px; padding-top: 24px; border-top: 1px solid #1f2937;",
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px;",
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        IconGlyph { icon: Icon::Leaf, color: "#10b981".to_string() }
                        div {
                            h2 { style: "margin: 0; font-size: 20px; color: #f9fafb;", "BloomWatch" }
                            p { style: "margin: 0; font-size: 13px; color: #6b7280;", "NASA Earth Observation Platform" }
                        }
                    }
                    div {
                        style: "display: flex; gap: 20px;",
                        for (label, target) in FOOTER_LINKS {
                            button {
                                key: "{label}",
                                style: FOOTER_LINK,
                                onclick: move |_| state.navigate(target),
                                "{label}"
                            }
                        }
                        span { style: FOOTER_LINK, "API Documentation" }
                        span { style: FOOTER_LINK, "Contact" }
                    }
                }
                div {
                    style: "margin-top: 24px; text-align: center; font-size: 13px; color: #6b7280;",
                    p { "Powered by NASA Earth Observations - EMIT - Sentinel - Landsat - MODIS - VIIRS - AVIRIS" }
                    p { "All satellite data is publicly available through NASA's EOSDIS" }
                }
            }
        }
    }
}

use crate::components::{IconGlyph, InfoCard, PageHeader, SeasonalChart, WeatherCard, YearSelectorBar};
use bloom_data::icon::Icon;
use bloom_data::seasonal::SeasonalSample;
use dioxus::prelude::*;

/// Year selector, monthly intensity chart and headline cards.
///
/// The chart plots the same series whichever year is selected.
#[component]
pub fn SeasonalPage() -> Element {
    rsx! {
        div {
            id: "page-seasonal",
            PageHeader {
                tag: "Temporal Analysis",
                title: "Seasonal Bloom Patterns",
                subtitle: "Track how flowering events shift across hemispheres and seasons",
            }
            YearSelectorBar {}
            div {
                style: "padding: 20px; background: #111827; border: 1px solid #1f2937; border-radius: 12px;",
                div {
                    style: "display: flex; align-items: center; margin-bottom: 12px; color: #f9fafb;",
                    IconGlyph { icon: Icon::BarChart, color: "#10b981".to_string() }
                    h2 { style: "margin: 0; font-size: 18px;", "Global Bloom Intensity by Month" }
                }
                SeasonalChart { series: SeasonalSample::series() }
                div {
                    style: "margin-top: 8px; text-align: right; font-size: 13px; font-weight: 600; color: #10b981;",
                    "75% Active"
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 24px;",
                InfoCard { title: "Primary Hemisphere", value: "Northern", accent: "#10b981" }
                InfoCard { title: "Peak Activity Month", value: "May (Northern)", accent: "#ec4899" }
                WeatherCard {}
            }
        }
    }
}

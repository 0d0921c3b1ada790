//! Reusable Dioxus RSX components for BloomWatch pages.

mod application_card;
mod bloom_map;
mod chart_container;
mod icon_glyph;
mod info_card;
mod intensity_badge;
mod loading_spinner;
mod nav_bar;
mod page_header;
mod region_panel;
mod seasonal_chart;
mod source_card;
mod weather_card;
mod year_selector;

pub use application_card::ApplicationCard;
pub use bloom_map::BloomMap;
pub use chart_container::ChartContainer;
pub use icon_glyph::IconGlyph;
pub use info_card::InfoCard;
pub use intensity_badge::{IntensityBadge, IntensityLegend};
pub use loading_spinner::LoadingSpinner;
pub use nav_bar::NavBar;
pub use page_header::PageHeader;
pub use region_panel::RegionPanel;
pub use seasonal_chart::SeasonalChart;
pub use source_card::SourceCard;
pub use weather_card::WeatherCard;
pub use year_selector::YearSelectorBar;

//! Monthly bloom intensity bar chart.

use super::ChartContainer;
use crate::js_bridge::{self, BarChartConfig};
use bloom_data::seasonal::SeasonalSample;
use dioxus::prelude::*;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "seasonal-intensity-chart";

/// Bar chart of the seasonal series, drawn by D3 once mounted.
#[component]
pub fn SeasonalChart(series: &'static [SeasonalSample]) -> Element {
    let config = BarChartConfig::default();
    let height = config.height;

    use_effect(move || {
        let data_json = js_bridge::bar_chart_data(series);
        js_bridge::render_bar_chart(CHART_CONTAINER_ID, &data_json, &config.to_json());
    });

    rsx! {
        ChartContainer {
            id: CHART_CONTAINER_ID,
            height: height,
        }
    }
}

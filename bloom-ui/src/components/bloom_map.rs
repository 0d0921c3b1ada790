//! Leaflet map of bloom regions.

use super::IntensityLegend;
use crate::js_bridge::{self, MapConfig};
use bloom_data::region::BloomRegion;
use dioxus::prelude::*;

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "bloom-map";

/// One circle and one marker (with popup) per region, plus the intensity legend.
///
/// The Leaflet instance is torn down when the component unmounts so that
/// returning to the page builds a fresh map.
#[component]
pub fn BloomMap(regions: &'static [BloomRegion]) -> Element {
    use_effect(move || {
        let regions_json = js_bridge::map_markers(regions);
        js_bridge::render_bloom_map(MAP_CONTAINER_ID, &regions_json, &MapConfig::default().to_json());
    });
    use_drop(|| js_bridge::destroy_bloom_map(MAP_CONTAINER_ID));

    rsx! {
        div {
            style: "position: relative; flex: 2; min-width: 320px;",
            div {
                id: MAP_CONTAINER_ID,
                style: "height: 500px; width: 100%; border-radius: 1rem;",
            }
            IntensityLegend {}
        }
    }
}

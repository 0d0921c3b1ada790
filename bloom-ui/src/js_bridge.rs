//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart and the Leaflet map live in `assets/js/*.js` and are embedded at
//! compile time. Each is evaluated as a global (no ES modules) once its own library
//! has loaded, and exposed via `window.*`. This module serializes payloads with serde_json
//! and calls those globals.
//!
//! Outside the browser (`cfg(not(target_arch = "wasm32"))`) every call is a logged no-op,
//! so components can be rendered server-side in tests.

use bloom_data::region::BloomRegion;
use bloom_data::seasonal::SeasonalSample;
use serde::Serialize;

// Embed the chart and map JS files at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static BLOOM_MAP_JS: &str = include_str!("../assets/js/bloom-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BloomWatch JS call failed:', e); }}",
        code
    );
    eval(&wrapped);
}

#[cfg(target_arch = "wasm32")]
fn eval(code: &str) {
    let _ = js_sys::eval(code);
}

#[cfg(not(target_arch = "wasm32"))]
fn eval(code: &str) {
    log::debug!("Skipping {} bytes of JS outside the browser", code.len());
}

/// Quote `s` as a JS string literal.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

/// Polls run every `POLL_INTERVAL_MS` and give up after `MAX_POLLS` tries (10s).
const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLLS: u32 = 100;

/// Window flag set once the D3 bar chart script is installed.
const CHART_READY_FLAG: &str = "__bloomChartReady";
/// Window flag set once the Leaflet map script is installed.
const MAP_READY_FLAG: &str = "__bloomMapReady";

/// Install the chart and map scripts as their libraries become available.
///
/// The bar chart only needs D3 and the map only needs Leaflet, so each script is
/// installed on its own as soon as its library loads. A library that never
/// loads is reported once the poll gives up and leaves the other one working.
pub fn init_bridge() {
    eval(&install_js(
        "d3",
        BAR_CHART_JS,
        &["renderBloomBarChart"],
        CHART_READY_FLAG,
    ));
    eval(&install_js(
        "L",
        BLOOM_MAP_JS,
        &["renderBloomMap", "destroyBloomMap"],
        MAP_READY_FLAG,
    ));
}

/// Script that waits for `library` to be defined, evaluates `script` at global
/// scope, promotes `exports` to `window.*` and sets `window[ready_flag]`.
fn install_js(library: &str, script: &str, exports: &[&str], ready_flag: &str) -> String {
    let promote: String = exports
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};",
                name = name
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    let source = js_string_literal(script);
    let flag = js_string_literal(ready_flag);
    let library_name = js_string_literal(library);

    format!(
        r#"
        (function() {{
            var source = {source};
            var tries = 0;
            var poll = setInterval(function() {{
                if (typeof {library} !== 'undefined') {{
                    clearInterval(poll);
                    (0, eval)(source);
                    {promote}
                    window[{flag}] = true;
                    console.log('BloomWatch bridge installed for', {library_name});
                }} else if (++tries >= {max}) {{
                    clearInterval(poll);
                    console.warn('BloomWatch: gave up waiting for', {library_name});
                }}
            }}, {interval});
        }})();
        "#,
        source = source,
        library = library,
        promote = promote,
        flag = flag,
        library_name = library_name,
        max = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    )
}

/// Script that calls `window.{function}(container_id, data, config)` once
/// `window[ready_flag]` is set and the container element exists. Gives up with
/// a warning after `MAX_POLLS` tries.
fn render_js(
    function: &str,
    ready_flag: &str,
    container_id: &str,
    data_json: &str,
    config_json: &str,
) -> String {
    let id = js_string_literal(container_id);
    let data = js_string_literal(data_json);
    let config = js_string_literal(config_json);
    let flag = js_string_literal(ready_flag);
    format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                if (window[{flag}] &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[BloomWatch] {function} error:', e); }}
                }} else if (++tries >= {max}) {{
                    clearInterval(poll);
                    console.warn('[BloomWatch] {function} not ready for', {id});
                }}
            }}, {interval});
        }})();
        "#,
        max = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    )
}

/// Render the monthly intensity bar chart into `container_id`.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_js(
        "renderBloomBarChart",
        CHART_READY_FLAG,
        container_id,
        data_json,
        config_json,
    ));
}

/// Render the bloom region map (circles + markers with popups) into `container_id`.
pub fn render_bloom_map(container_id: &str, regions_json: &str, config_json: &str) {
    call_js(&render_js(
        "renderBloomMap",
        MAP_READY_FLAG,
        container_id,
        regions_json,
        config_json,
    ));
}

/// Tear down the Leaflet map bound to `container_id`, if any.
pub fn destroy_bloom_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyBloomMap) window.destroyBloomMap({});",
        js_string_literal(container_id)
    ));
}

#[derive(Serialize)]
struct BarDatum<'a> {
    label: &'a str,
    value: u8,
}

/// Serialize the seasonal series as `[{"label": "Jan", "value": 15}, ...]`.
pub fn bar_chart_data(series: &[SeasonalSample]) -> String {
    let data: Vec<BarDatum> = series
        .iter()
        .map(|s| BarDatum {
            label: &s.month,
            value: s.intensity,
        })
        .collect();
    serde_json::to_string(&data).unwrap_or_default()
}

#[derive(Serialize)]
struct MapMarker<'a> {
    name: &'a str,
    intensity: &'static str,
    lat: f64,
    lng: f64,
    radius: u32,
    color: &'a str,
    species: &'a str,
    coordinates: String,
}

/// Serialize the bloom regions as map markers.
pub fn map_markers(regions: &[BloomRegion]) -> String {
    let markers: Vec<MapMarker> = regions
        .iter()
        .map(|r| MapMarker {
            name: &r.name,
            intensity: r.intensity.label(),
            lat: r.latitude,
            lng: r.longitude,
            radius: r.radius_m,
            color: &r.color,
            species: &r.species,
            coordinates: r.coordinate_label(),
        })
        .collect();
    serde_json::to_string(&markers).unwrap_or_default()
}

/// Bar chart styling passed to `renderBloomBarChart`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub bar_color: String,
    pub grid_color: String,
    pub axis_color: String,
    pub height: u32,
    /// Upper bound of the y axis
    pub y_max: u32,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            bar_color: "#10b981".to_string(),
            grid_color: "#374151".to_string(),
            axis_color: "#9ca3af".to_string(),
            height: 300,
            y_max: 100,
        }
    }
}

impl BarChartConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Leaflet view passed to `renderBloomMap`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [20.0, 0.0],
            zoom: 2,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

impl MapConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_js_string_literal_escapes() {
        assert_eq!(js_string_literal("it's"), r#""it's""#);
        assert_eq!(js_string_literal("a\"b\nc"), r#""a\"b\nc""#);
    }

    #[test]
    fn test_bar_chart_data() {
        let json: Value = serde_json::from_str(&bar_chart_data(SeasonalSample::series())).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0]["label"], "Jan");
        assert_eq!(rows[0]["value"], 15);
        assert_eq!(rows[4]["label"], "May");
        assert_eq!(rows[4]["value"], 95);
    }

    #[test]
    fn test_map_markers() {
        let json: Value = serde_json::from_str(&map_markers(BloomRegion::catalog())).unwrap();
        let markers = json.as_array().unwrap();
        assert_eq!(markers.len(), 4);
        assert_eq!(markers[0]["name"], "Amazon Basin");
        assert_eq!(markers[0]["intensity"], "High");
        assert_eq!(markers[0]["lat"], -3.4653);
        assert_eq!(markers[0]["lng"], -62.2159);
        assert_eq!(markers[0]["radius"], 500000);
        assert_eq!(markers[0]["coordinates"], "-3.4653°, -62.2159°");
    }

    #[test]
    fn test_config_keys_are_camel_case() {
        let bar: Value = serde_json::from_str(&BarChartConfig::default().to_json()).unwrap();
        assert_eq!(bar["barColor"], "#10b981");
        assert_eq!(bar["yMax"], 100);

        let map: Value = serde_json::from_str(&MapConfig::default().to_json()).unwrap();
        assert_eq!(map["center"], serde_json::json!([20.0, 0.0]));
        assert_eq!(map["zoom"], 2);
        assert!(map["tileUrl"].as_str().unwrap().contains("openstreetmap"));
    }

    #[test]
    fn test_chart_and_map_install_independently() {
        let chart = install_js("d3", BAR_CHART_JS, &["renderBloomBarChart"], CHART_READY_FLAG);
        assert!(chart.contains("typeof d3 !== 'undefined'"));
        assert!(!chart.contains("typeof L !== 'undefined'"));
        assert!(chart.contains("window[\"__bloomChartReady\"] = true"));
        assert!(chart.contains("window.renderBloomBarChart = renderBloomBarChart"));

        let map = install_js("L", BLOOM_MAP_JS, &["renderBloomMap", "destroyBloomMap"], MAP_READY_FLAG);
        assert!(map.contains("typeof L !== 'undefined'"));
        assert!(!map.contains("typeof d3 !== 'undefined'"));
        assert!(map.contains("window[\"__bloomMapReady\"] = true"));
        assert!(map.contains("window.destroyBloomMap = destroyBloomMap"));
    }

    #[test]
    fn test_install_poll_gives_up() {
        let js = install_js("L", BLOOM_MAP_JS, &["renderBloomMap"], MAP_READY_FLAG);
        assert!(js.contains(&format!("++tries >= {}", MAX_POLLS)));
        assert_eq!(js.matches("clearInterval(poll)").count(), 2);
        assert!(js.contains("console.warn"));
    }

    #[test]
    fn test_render_waits_on_its_own_library() {
        let chart = render_js("renderBloomBarChart", CHART_READY_FLAG, "chart", "[]", "{}");
        assert!(chart.contains("window[\"__bloomChartReady\"]"));
        assert!(!chart.contains("__bloomMapReady"));

        let map = render_js("renderBloomMap", MAP_READY_FLAG, "bloom-map", "[]", "{}");
        assert!(map.contains("window[\"__bloomMapReady\"]"));
        assert!(!map.contains("__bloomChartReady"));
    }

    #[test]
    fn test_render_poll_is_bounded() {
        let js = render_js("renderBloomBarChart", CHART_READY_FLAG, "chart", "[]", "{}");
        assert!(js.contains(&format!("++tries >= {}", MAX_POLLS)));
        assert!(js.contains(&format!("}}, {});", POLL_INTERVAL_MS)));
        // One stop on success, one when giving up.
        assert_eq!(js.matches("clearInterval(poll)").count(), 2);
        assert!(js.contains("window.renderBloomBarChart(\"chart\", \"[]\", \"{}\")"));
    }

    #[test]
    fn test_bridge_calls_are_inert_natively() {
        init_bridge();
        render_bar_chart("chart", "[]", "{}");
        render_bloom_map("map", "[]", "{}");
        destroy_bloom_map("map");
    }
}

//! BloomWatch
//!
//! Single-page dashboard of global plant bloom activity. The six views share one
//! `AppState` context:
//! 1. On mount: install the D3/Leaflet chart scripts and start the weather fetch.
//! 2. The nav bar switches the visible page; `PageView` renders only that page.
//! 3. When the Open-Meteo response arrives it fills the seasonal view's weather card.
//!    A failed fetch is logged and the card keeps its loading placeholder.

use bloom_data::weather::{load_weather, WeatherConfig};
use bloom_ui::components::NavBar;
use bloom_ui::js_bridge;
use bloom_ui::pages::PageView;
use bloom_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting BloomWatch");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bloomwatch-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Runs once on mount; reads no signals.
    use_effect(move || {
        js_bridge::init_bridge();

        spawn(async move {
            let client = reqwest::Client::new();
            let config = WeatherConfig::default();
            if let Some(snapshot) = load_weather(&client, &config).await {
                state.weather.set(Some(snapshot));
            }
        });
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: #030712; color: #f9fafb; font-family: system-ui, -apple-system, sans-serif;",
            NavBar {}
            main {
                style: "max-width: 1200px; margin: 0 auto; padding: 24px 16px;",
                PageView {}
            }
        }
    }
}

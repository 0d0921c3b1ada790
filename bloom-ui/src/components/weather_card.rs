//! Weather overview card.

use super::info_card::{CARD_STYLE, CARD_TITLE_STYLE};
use super::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the startup weather snapshot, or a loading placeholder while there is
/// none. A failed fetch leaves the placeholder in place.
#[component]
pub fn WeatherCard() -> Element {
    let state = use_context::<AppState>();
    let weather = state.weather.read().clone();

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: CARD_TITLE_STYLE, "Weather Overview" }
            if let Some(snapshot) = weather {
                div {
                    style: "font-size: 20px; font-weight: 600; color: #8b5cf6;",
                    "{snapshot.display_line()}"
                }
            } else {
                LoadingSpinner {}
            }
            p {
                style: "margin: 8px 0 0 0; font-size: 12px; color: #6b7280;",
                "Current conditions for selected region"
            }
        }
    }
}

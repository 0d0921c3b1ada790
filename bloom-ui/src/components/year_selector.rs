//! Year selector for the seasonal view.

use crate::state::AppState;
use crate::year::YearSelector;
use dioxus::prelude::*;

fn year_button_style(active: bool) -> &'static str {
    if active {
        "padding: 6px 14px; border-radius: 8px; border: 1px solid #10b981; background: #10b981; color: #fff; cursor: pointer;"
    } else {
        "padding: 6px 14px; border-radius: 8px; border: 1px solid #374151; background: transparent; color: #d1d5db; cursor: pointer;"
    }
}

/// A row of year buttons. Reads and writes `AppState::year`.
#[component]
pub fn YearSelectorBar() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.year.read().selected();

    rsx! {
        div {
            style: "margin: 0 0 24px 0; padding: 16px 20px; background: #111827; border: 1px solid #1f2937; border-radius: 12px;",
            label {
                style: "display: block; margin-bottom: 10px; font-weight: 600; color: #e5e7eb;",
                "Select Year: {selected}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for year in YearSelector::YEARS {
                    button {
                        key: "{year}",
                        style: year_button_style(year == selected),
                        onclick: move |_| state.year.write().select(year),
                        "{year}"
                    }
                }
            }
        }
    }
}

//! Loading placeholder.

use dioxus::prelude::*;

/// Placeholder shown until asynchronously loaded data arrives.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...")] message: &'static str) -> Element {
    rsx! {
        div {
            style: "font-size: 20px; font-weight: 600; color: #9ca3af;",
            "{message}"
        }
    }
}

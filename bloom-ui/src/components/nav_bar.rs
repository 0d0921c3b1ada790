//! Top navigation bar.

use super::IconGlyph;
use crate::navigation::Page;
use crate::state::AppState;
use bloom_data::icon::Icon;
use dioxus::prelude::*;

fn tab_style(active: bool) -> &'static str {
    if active {
        "padding: 8px 14px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; background: #ec4899; color: #fff;"
    } else {
        "padding: 8px 14px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; background: transparent; color: #d1d5db;"
    }
}

/// One tab per page. Clicking a tab switches the page view.
#[component]
pub fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let nav = (state.navigation)();

    rsx! {
        nav {
            style: "position: sticky; top: 0; z-index: 2000; display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: rgba(11, 17, 32, 0.95); border-bottom: 1px solid #1f2937;",
            div {
                style: "display: flex; align-items: center; font-size: 20px; font-weight: 700; color: #f9fafb;",
                IconGlyph { icon: Icon::Leaf, color: "#10b981".to_string() }
                span { "BloomWatch" }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px;",
                for page in Page::ALL {
                    button {
                        key: "{page.slug()}",
                        style: tab_style(nav.is_active(page)),
                        onclick: move |_| state.navigate(page),
                        "{page.label()}"
                    }
                }
            }
        }
    }
}

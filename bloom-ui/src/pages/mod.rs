//! One view per navigation tab.
//!
//! `PageView` reads the current page from `AppState` and renders exactly that
//! page's view. Every view's root element carries the id `page-{slug}`.

mod about;
mod applications;
mod data_sources;
mod global;
mod landing;
mod seasonal;

pub use about::AboutPage;
pub use applications::ApplicationsPage;
pub use data_sources::DataSourcesPage;
pub use global::GlobalActivityPage;
pub use landing::LandingPage;
pub use seasonal::SeasonalPage;

use crate::navigation::Page;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn PageView() -> Element {
    let state = use_context::<AppState>();
    let page = state.navigation.read().current();

    match page {
        Page::Landing => rsx! { LandingPage {} },
        Page::Seasonal => rsx! { SeasonalPage {} },
        Page::Global => rsx! { GlobalActivityPage {} },
        Page::Applications => rsx! { ApplicationsPage {} },
        Page::Data => rsx! { DataSourcesPage {} },
        Page::About => rsx! { AboutPage {} },
    }
}

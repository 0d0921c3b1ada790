//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the session's reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Each signal has one writer: the nav bar (and in-page links) for `navigation`, the year
//! selector for `year`, and the root component's startup fetch for `weather`.

use crate::navigation::{Navigation, Page};
use crate::year::YearSelector;
use bloom_data::weather::WeatherSnapshot;
use dioxus::prelude::*;

/// Shared UI state for a BloomWatch session. Reset on reload.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently selected top-level page
    pub navigation: Signal<Navigation>,
    /// Year shown by the seasonal view's selector
    pub year: Signal<YearSelector>,
    /// Current weather (None until the startup fetch succeeds)
    pub weather: Signal<Option<WeatherSnapshot>>,
}

impl AppState {
    /// Create a new AppState on the landing page.
    pub fn new() -> Self {
        Self::with_page(Page::default())
    }

    pub fn with_page(page: Page) -> Self {
        Self {
            navigation: Signal::new(Navigation::at(page)),
            year: Signal::new(YearSelector::default()),
            weather: Signal::new(None),
        }
    }

    /// Switch to `page`.
    pub fn navigate(&mut self, page: Page) {
        self.navigation.write().select(page);
    }
}

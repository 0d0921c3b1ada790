//! VirtualDom harness for view tests.
//!
//! Mounts the nav bar and page view under an `AppState` the test can reach,
//! applies state changes inside the runtime and re-renders before reading HTML.

use crate::components::NavBar;
use crate::navigation::{Navigation, Page};
use crate::pages::PageView;
use crate::state::AppState;
use crate::year::YearSelector;
use bloom_data::weather::WeatherSnapshot;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use std::cell::Cell;

thread_local! {
    static MOUNTED_STATE: Cell<Option<AppState>> = const { Cell::new(None) };
}

#[component]
fn Harness(page: Page, weather: Option<WeatherSnapshot>, year: i32) -> Element {
    let state = use_context_provider(|| {
        let mut selector = YearSelector::default();
        selector.select(year);
        AppState {
            navigation: Signal::new(Navigation::at(page)),
            year: Signal::new(selector),
            weather: Signal::new(weather.clone()),
        }
    });
    MOUNTED_STATE.with(|mounted| mounted.set(Some(state)));

    rsx! {
        NavBar {}
        PageView {}
    }
}

pub(crate) struct TestApp {
    dom: VirtualDom,
}

impl TestApp {
    pub(crate) fn new(page: Page) -> Self {
        Self::with(page, None, 2024)
    }

    pub(crate) fn with(page: Page, weather: Option<WeatherSnapshot>, year: i32) -> Self {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                page,
                weather,
                year,
            },
        );
        dom.rebuild_in_place();
        Self { dom }
    }

    pub(crate) fn state(&self) -> AppState {
        MOUNTED_STATE
            .with(|mounted| mounted.get())
            .expect("harness has rendered")
    }

    /// What a nav tab, call-to-action or footer link does on click.
    pub(crate) fn navigate(&mut self, page: Page) {
        let mut state = self.state();
        self.dom.in_runtime(|| state.navigate(page));
        self.flush();
    }

    pub(crate) fn select_year(&mut self, year: i32) {
        let mut state = self.state();
        self.dom.in_runtime(|| state.year.write().select(year));
        self.flush();
    }

    pub(crate) fn set_weather(&mut self, snapshot: WeatherSnapshot) {
        let mut state = self.state();
        self.dom.in_runtime(|| state.weather.set(Some(snapshot)));
        self.flush();
    }

    pub(crate) fn current_page(&self) -> Page {
        let state = self.state();
        self.dom.in_runtime(|| state.navigation.read().current())
    }

    /// Re-render every scope dirtied by a signal write.
    pub(crate) fn flush(&mut self) {
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub(crate) fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

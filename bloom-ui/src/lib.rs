//! Shared Dioxus state, components and JS bridge for BloomWatch.
//!
//! This crate provides:
//! - `navigation`, `expandable`, `year`: plain state controllers
//! - `state`: reactive AppState with Dioxus Signals
//! - `js_bridge`: Rust wrappers for the D3.js bar chart and Leaflet map via `js_sys::eval()`
//! - `components`: reusable RSX components (nav bar, cards, chart and map containers)
//! - `pages`: one view per navigation tab, plus the `PageView` dispatcher

pub mod components;
pub mod expandable;
pub mod js_bridge;
pub mod navigation;
pub mod pages;
pub mod state;
pub mod year;

#[cfg(test)]
mod test_support;

use crate::components::{ApplicationCard, PageHeader};
use crate::expandable::ExpandableList;
use bloom_data::application::Application;
use dioxus::prelude::*;

/// Application cards, at most one expanded at a time.
#[component]
pub fn ApplicationsPage() -> Element {
    let cards = use_signal(|| ExpandableList::new(Application::catalog().len()));

    rsx! { ApplicationsView { cards: cards } }
}

/// Collapse the open card, if any.
pub(crate) fn collapse_open_card(mut cards: Signal<ExpandableList>) {
    if cards.read().expanded().is_some() {
        cards.write().collapse();
    }
}

/// Page body over an expansion state owned by the caller.
///
/// A click anywhere on the page outside the cards collapses the open card.
#[component]
pub(crate) fn ApplicationsView(mut cards: Signal<ExpandableList>) -> Element {
    let applications = Application::catalog();

    rsx! {
        div {
            id: "page-applications",
            style: "min-height: 70vh;",
            onclick: move |_| collapse_open_card(cards),
            PageHeader {
                tag: "Real-World Impact",
                title: "Applications & Use Cases",
                subtitle: "From agricultural management to conservation science, bloom monitoring provides actionable insights across diverse fields.",
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; max-height: 70vh; overflow-y: auto;",
                for (index, application) in applications.iter().enumerate() {
                    ApplicationCard {
                        key: "{index}",
                        application: application,
                        expanded: cards.read().is_expanded(index),
                        on_toggle: move |_| cards.write().toggle(index),
                    }
                }
            }
        }
    }
}

//! Expandable application card.

use super::IconGlyph;
use bloom_data::application::Application;
use dioxus::prelude::*;

/// Props for ApplicationCard
#[derive(Props, Clone, PartialEq)]
pub struct ApplicationCardProps {
    /// Catalog entry shown by this card
    pub application: &'static Application,
    /// Whether the body is shown
    pub expanded: bool,
    /// Fired by the "Details"/"Hide" button
    pub on_toggle: EventHandler<()>,
}

/// A card with a one-line header and a "Details"/"Hide" button.
///
/// The body (description, benefits, optional image) is only rendered while
/// `expanded`. Clicks inside the card never reach the page, so the page can
/// treat any click it receives as an outside click.
#[component]
pub fn ApplicationCard(props: ApplicationCardProps) -> Element {
    let ApplicationCardProps {
        application,
        expanded,
        on_toggle,
    } = props;
    let border = if expanded {
        application.color.as_str()
    } else {
        "#1f2937"
    };
    let card_style = format!(
        "padding: 16px 20px; background: #111827; border: 1px solid {}; border-radius: 12px;",
        border
    );
    let benefit_style = format!("color: {}; margin-bottom: 4px;", application.color);

    rsx! {
        div {
            style: "{card_style}",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                div {
                    style: "font-weight: 600; color: #f9fafb;",
                    IconGlyph { icon: application.icon, color: application.color.clone() }
                    "{application.title} - {application.summary()}"
                }
                button {
                    style: "padding: 6px 14px; border-radius: 8px; border: 1px solid #374151; background: transparent; color: #e5e7eb; cursor: pointer;",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_toggle.call(());
                    },
                    if expanded { "Hide" } else { "Details" }
                }
            }
            if expanded {
                div {
                    style: "margin-top: 12px; color: #d1d5db;",
                    p { "{application.description}" }
                    ul {
                        for benefit in application.benefits.iter() {
                            li { key: "{benefit}", style: "{benefit_style}", "{benefit}" }
                        }
                    }
                    if let Some(url) = application.image_url.as_ref() {
                        img {
                            src: "{url}",
                            alt: "{application.title}",
                            style: "width: 100%; border-radius: 8px; margin-top: 8px;",
                        }
                    }
                }
            }
        }
    }
}

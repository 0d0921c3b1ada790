//! Small headline card for the seasonal view.

use dioxus::prelude::*;

pub(crate) const CARD_STYLE: &str = "flex: 1; min-width: 200px; padding: 20px; background: #111827; border: 1px solid #1f2937; border-radius: 12px;";
pub(crate) const CARD_TITLE_STYLE: &str = "margin: 0 0 8px 0; font-size: 14px; color: #9ca3af; font-weight: 500;";

/// Props for InfoCard
#[derive(Props, Clone, PartialEq)]
pub struct InfoCardProps {
    pub title: &'static str,
    pub value: &'static str,
    /// CSS color of the value text
    pub accent: &'static str,
}

#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    let value_style = format!("font-size: 20px; font-weight: 600; color: {};", props.accent);

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: CARD_TITLE_STYLE, "{props.title}" }
            div { style: "{value_style}", "{props.value}" }
        }
    }
}

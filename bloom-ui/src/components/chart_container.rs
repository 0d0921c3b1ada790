//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the chart script looks up
    pub id: &'static str,
    /// Height in pixels
    #[props(default = 300)]
    pub height: u32,
}

/// A container div that D3.js renders into.
///
/// The outer div is positioned so the chart tooltip can be placed inside it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: props.id,
                style: "width: 100%; height: 100%;",
            }
        }
    }
}

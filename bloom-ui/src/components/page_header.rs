//! Page header with tag pill, title and subtitle.

use super::IconGlyph;
use bloom_data::icon::Icon;
use dioxus::prelude::*;

/// Props for PageHeader
#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Short label shown in the pill above the title
    pub tag: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Optional icon in front of the tag
    pub icon: Option<Icon>,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 32px;",
            div {
                style: "display: inline-block; padding: 4px 14px; border-radius: 9999px; background: rgba(236, 72, 153, 0.15); color: #ec4899; font-size: 13px; font-weight: 600; margin-bottom: 12px;",
                if let Some(icon) = props.icon {
                    IconGlyph { icon: icon }
                }
                "{props.tag}"
            }
            h1 {
                style: "margin: 0 0 8px 0; font-size: 36px; color: #f9fafb;",
                "{props.title}"
            }
            p {
                style: "margin: 0 auto; max-width: 640px; color: #9ca3af;",
                "{props.subtitle}"
            }
        }
    }
}

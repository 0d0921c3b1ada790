use crate::components::{BloomMap, PageHeader, RegionPanel};
use bloom_data::icon::Icon;
use bloom_data::region::BloomRegion;
use dioxus::prelude::*;

#[component]
pub fn GlobalActivityPage() -> Element {
    let regions = BloomRegion::catalog();

    rsx! {
        div {
            id: "page-global",
            PageHeader {
                tag: "Live Monitoring",
                icon: Icon::Zap,
                title: "Global Bloom Activity",
                subtitle: "Real-time visualization of flowering events detected by NASA's Earth observation satellites.",
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 24px;",
                BloomMap { regions: regions }
                RegionPanel { regions: regions }
            }
        }
    }
}

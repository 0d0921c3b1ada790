use crate::components::{PageHeader, SourceCard};
use bloom_data::data_source::DataSource;
use dioxus::prelude::*;

#[component]
pub fn DataSourcesPage() -> Element {
    rsx! {
        div {
            id: "page-data",
            PageHeader {
                tag: "NASA Earth Observations",
                title: "Data Sources & Satellites",
                subtitle: "BloomWatch integrates data from NASA's most advanced Earth observation missions",
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
                for source in DataSource::catalog().iter() {
                    SourceCard { key: "{source.name}", source: source }
                }
            }
            div {
                style: "margin-top: 32px; text-align: center; color: #9ca3af;",
                p {
                    "All data is "
                    span { style: "color: #10b981; font-weight: 600;", "publicly available" }
                    " through NASA's Earth Observing System Data and Information System (EOSDIS)"
                }
            }
        }
    }
}

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Embedded CSV data for the satellites and instruments BloomWatch draws on.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/data_sources.csv");

static CATALOG: LazyLock<Vec<DataSource>> =
    LazyLock::new(|| match DataSource::parse_data_source_csv(CSV_OBJECT) {
        Ok(sources) => sources,
        Err(e) => panic!("failed to parse data source csv: {:#}", e),
    });

/// An Earth observation mission or instrument.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    /// Instrument type (e.g., "Multispectral")
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Spatial and/or temporal resolution
    pub resolution: String,
    pub color: String,
}

impl DataSource {
    pub fn catalog() -> &'static [DataSource] {
        &CATALOG
    }

    /// Parse a CSV string of data source rows.
    ///
    /// Expected CSV columns: name, type, description, resolution, color
    pub fn parse_data_source_csv(csv_object: &str) -> anyhow::Result<Vec<DataSource>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut source_list: Vec<DataSource> = Vec::new();
        for (row, record) in rdr.deserialize::<DataSource>().enumerate() {
            let source = record.with_context(|| format!("data source row {} parse fail", row + 1))?;
            source_list.push(source);
        }
        Ok(source_list)
    }
}

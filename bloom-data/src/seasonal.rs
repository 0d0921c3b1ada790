use anyhow::{ensure, Context};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Embedded CSV data for the monthly bloom intensity series.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/seasonal_intensity.csv");

/// Month labels in calendar order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static SERIES: LazyLock<Vec<SeasonalSample>> = LazyLock::new(|| {
    match SeasonalSample::parse_seasonal_csv(CSV_OBJECT) {
        Ok(series) => series,
        Err(e) => panic!("failed to parse seasonal intensity csv: {:#}", e),
    }
});

/// Global bloom intensity for one month, scored 0-100.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SeasonalSample {
    pub month: String,
    pub intensity: u8,
}

impl SeasonalSample {
    /// The fixed 12-month series shown on the seasonal chart.
    pub fn series() -> &'static [SeasonalSample] {
        &SERIES
    }

    /// Parse a CSV string of `month,intensity` rows.
    ///
    /// The rows must cover every month exactly once, in calendar order.
    pub fn parse_seasonal_csv(csv_object: &str) -> anyhow::Result<Vec<SeasonalSample>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut series: Vec<SeasonalSample> = Vec::with_capacity(MONTHS.len());
        for (row, record) in rdr.deserialize::<SeasonalSample>().enumerate() {
            let sample: SeasonalSample =
                record.with_context(|| format!("seasonal row {} parse fail", row + 1))?;
            ensure!(
                sample.intensity <= 100,
                "intensity {} for {} is outside 0..=100",
                sample.intensity,
                sample.month
            );
            series.push(sample);
        }
        ensure!(
            series.len() == MONTHS.len(),
            "expected {} months, found {}",
            MONTHS.len(),
            series.len()
        );
        for (sample, month) in series.iter().zip(MONTHS) {
            ensure!(
                sample.month == month,
                "expected {} but found {}",
                month,
                sample.month
            );
        }
        Ok(series)
    }
}

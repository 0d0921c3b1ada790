use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Embedded CSV data for the bloom regions shown on the global map.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/bloom_regions.csv");

static CATALOG: LazyLock<Vec<BloomRegion>> =
    LazyLock::new(|| match BloomRegion::parse_region_csv(CSV_OBJECT) {
        Ok(regions) => regions,
        Err(e) => panic!("failed to parse bloom region csv: {:#}", e),
    });

/// Qualitative flowering intensity of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloomIntensity {
    High,
    Medium,
    Emerging,
}

impl BloomIntensity {
    /// Legend order.
    pub const ALL: [BloomIntensity; 3] = [
        BloomIntensity::High,
        BloomIntensity::Medium,
        BloomIntensity::Emerging,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BloomIntensity::High => "High",
            BloomIntensity::Medium => "Medium",
            BloomIntensity::Emerging => "Emerging",
        }
    }

    /// Dot color used by the map legend.
    pub fn legend_color(self) -> &'static str {
        match self {
            BloomIntensity::High => "#ec4899",
            BloomIntensity::Medium => "#f59e0b",
            BloomIntensity::Emerging => "#8b5cf6",
        }
    }
}

/// A geographic area with an observed bloom and its display metadata.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BloomRegion {
    pub name: String,
    pub intensity: BloomIntensity,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Radius of the highlight circle in meters
    pub radius_m: u32,
    pub color: String,
    /// Vegetation / species label
    pub species: String,
}

impl BloomRegion {
    /// All bloom regions, in display order.
    pub fn catalog() -> &'static [BloomRegion] {
        &CATALOG
    }

    /// Coordinates as shown in the region list and map popups,
    /// e.g. `-3.4653°, -62.2159°`.
    pub fn coordinate_label(&self) -> String {
        format!("{:.4}°, {:.4}°", self.latitude, self.longitude)
    }

    /// Parse a CSV string of bloom region data.
    ///
    /// Expected CSV columns: name, intensity, latitude, longitude, radius_m, color, species
    pub fn parse_region_csv(csv_object: &str) -> anyhow::Result<Vec<BloomRegion>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut region_list: Vec<BloomRegion> = Vec::new();
        for (row, record) in rdr.deserialize::<BloomRegion>().enumerate() {
            let region = record.with_context(|| format!("bloom region row {} parse fail", row + 1))?;
            region_list.push(region);
        }
        Ok(region_list)
    }
}

#[cfg(test)]
mod tests {
    use super::{BloomIntensity, BloomRegion};

    #[test]
    fn test_region_catalog() {
        let regions = BloomRegion::catalog();
        assert_eq!(regions.len(), 4);
        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Amazon Basin", "Sahara Edge", "Siberian Tundra", "Great Plains"]
        );

        let amazon = &regions[0];
        assert_eq!(amazon.intensity, BloomIntensity::High);
        assert!((amazon.latitude - (-3.4653)).abs() < f64::EPSILON);
        assert!((amazon.longitude - (-62.2159)).abs() < f64::EPSILON);
        assert_eq!(amazon.radius_m, 500_000);
        assert_eq!(amazon.color, "#ec4899");
        assert_eq!(amazon.species, "Mixed vegetation");

        assert_eq!(regions[1].intensity, BloomIntensity::Medium);
        assert_eq!(regions[2].intensity, BloomIntensity::Emerging);
        assert_eq!(regions[3].radius_m, 400_000);
    }

    #[test]
    fn test_coordinate_label() {
        let regions = BloomRegion::catalog();
        assert_eq!(regions[0].coordinate_label(), "-3.4653°, -62.2159°");
        assert_eq!(regions[2].coordinate_label(), "66.9897°, 141.7854°");
    }

    #[test]
    fn test_legend() {
        let labels: Vec<&str> = BloomIntensity::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(labels, ["High", "Medium", "Emerging"]);
        assert_eq!(BloomIntensity::Emerging.legend_color(), "#8b5cf6");
    }

    #[test]
    fn test_parse_unknown_intensity() {
        let csv_data = "\
name,intensity,latitude,longitude,radius_m,color,species
Atacama,Extreme,-24.5,-69.25,100000,#fff,Desert bloom
";
        let err = BloomRegion::parse_region_csv(csv_data).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv_data = "name,intensity,latitude,longitude,radius_m,color,species\n";
        let regions = BloomRegion::parse_region_csv(csv_data).unwrap();
        assert_eq!(regions.len(), 0);
    }
}

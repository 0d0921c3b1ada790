use crate::icon::Icon;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Embedded JSON data for the applications catalog.
pub static JSON_OBJECT: &str = include_str!("../../fixtures/applications.json");

/// Number of description characters shown in a collapsed card header.
const SUMMARY_CHARS: usize = 20;

static CATALOG: LazyLock<Vec<Application>> =
    LazyLock::new(|| match Application::parse_application_json(JSON_OBJECT) {
        Ok(applications) => applications,
        Err(e) => panic!("failed to parse applications json: {:#}", e),
    });

/// A real-world use case for bloom monitoring.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Application {
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub color: String,
    pub icon: Icon,
    /// Optional illustration shown when the card is expanded
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Application {
    pub fn catalog() -> &'static [Application] {
        &CATALOG
    }

    /// Teaser for the collapsed card header: the first characters of the
    /// description followed by an ellipsis.
    pub fn summary(&self) -> String {
        let teaser: String = self.description.chars().take(SUMMARY_CHARS).collect();
        format!("{}...", teaser)
    }

    pub fn parse_application_json(json_object: &str) -> anyhow::Result<Vec<Application>> {
        serde_json::from_str(json_object).context("applications json parse fail")
    }
}

#[cfg(test)]
mod tests {
    use super::Application;
    use crate::icon::Icon;

    #[test]
    fn test_application_catalog() {
        let applications = Application::catalog();
        assert_eq!(applications.len(), 6);
        assert_eq!(applications[0].title, "Agricultural Monitoring");
        assert_eq!(applications[0].icon, Icon::Leaf);
        assert_eq!(applications[3].icon, Icon::TrendingUp);
        assert_eq!(applications[5].title, "Invasive Species Detection");
        assert!(applications.iter().all(|a| a.benefits.len() == 3));
        assert!(applications.iter().all(|a| a.image_url.is_none()));
    }

    #[test]
    fn test_benefits_keep_authored_order() {
        let health = &Application::catalog()[2];
        assert_eq!(
            health.benefits,
            [
                "Allergy season prediction",
                "Air quality monitoring",
                "Health advisories"
            ]
        );
    }

    #[test]
    fn test_summary() {
        let agriculture = &Application::catalog()[0];
        assert_eq!(agriculture.summary(), "Track flowering crop...");
    }

    #[test]
    fn test_summary_of_short_description() {
        let app = Application {
            title: "Short".to_string(),
            description: "Tiny".to_string(),
            benefits: Vec::new(),
            color: "#000".to_string(),
            icon: Icon::Zap,
            image_url: None,
        };
        assert_eq!(app.summary(), "Tiny...");
    }

    #[test]
    fn test_parse_with_image() {
        let json = r##"[{"title":"A","description":"B","benefits":[],"color":"#fff","icon":"zap","image_url":"a.jpg"}]"##;
        let apps = Application::parse_application_json(json).unwrap();
        assert_eq!(apps[0].image_url.as_deref(), Some("a.jpg"));
        assert_eq!(apps[0].color, "#fff");
    }
}

//! Current weather for the seasonal view.
//!
//! One read against the Open-Meteo forecast endpoint at startup. A failed read
//! is logged and otherwise ignored: the caller keeps showing its placeholder.
//!
//! The HTTP client half is behind the `api` feature; the response model and
//! snapshot formatting are always available.

#[cfg(feature = "api")]
use log::{error, info};
#[cfg(feature = "api")]
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Open-Meteo forecast endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default location (New York City).
pub const DEFAULT_LATITUDE: f64 = 40.7128;
pub const DEFAULT_LONGITUDE: f64 = -74.006;

/// Where to read the weather from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

/// Errors from the weather read. Every variant is the same failure to the UI.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success response status
    #[error("Bad response status: {0}")]
    Status(u16),

    /// Body was not a forecast with current conditions
    #[error("Failed to decode weather response: {0}")]
    Decode(String),
}

/// The `current_weather` object of an Open-Meteo response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    pub windspeed: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

impl ForecastResponse {
    pub fn parse(body: &str) -> Result<Self, WeatherError> {
        serde_json::from_str(body).map_err(|e| WeatherError::Decode(e.to_string()))
    }
}

/// Current conditions as displayed. Set once, never refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub description: String,
}

impl WeatherSnapshot {
    pub fn from_current(current: &CurrentWeather) -> Self {
        Self {
            temperature_c: current.temperature,
            description: format!("Wind {} km/h", current.windspeed),
        }
    }

    /// Temperature in whole degrees; halves round up.
    pub fn rounded_temperature(&self) -> i64 {
        (self.temperature_c + 0.5).floor() as i64
    }

    /// e.g. `Wind 11.4 km/h, 22°C`
    pub fn display_line(&self) -> String {
        format!("{}, {}°C", self.description, self.rounded_temperature())
    }
}

/// Read current conditions for the configured location.
#[cfg(feature = "api")]
pub async fn fetch_current_weather(
    client: &Client,
    config: &WeatherConfig,
) -> Result<WeatherSnapshot, WeatherError> {
    let response = client
        .get(&config.base_url)
        .query(&[
            ("latitude", config.latitude.to_string()),
            ("longitude", config.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let forecast = ForecastResponse::parse(&body)?;
    Ok(WeatherSnapshot::from_current(&forecast.current_weather))
}

/// Fetch boundary: logs any failure and returns `None` in its place.
#[cfg(feature = "api")]
pub async fn load_weather(client: &Client, config: &WeatherConfig) -> Option<WeatherSnapshot> {
    info!(
        "Fetching current weather for {}, {}",
        config.latitude, config.longitude
    );
    match fetch_current_weather(client, config).await {
        Ok(snapshot) => {
            info!("Current weather: {}", snapshot.display_line());
            Some(snapshot)
        }
        Err(e) => {
            error!("Error fetching weather: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temperature_c: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c,
            description: "Wind 0 km/h".to_string(),
        }
    }

    #[test]
    fn test_snapshot_from_current() {
        let current = CurrentWeather {
            temperature: 21.7,
            windspeed: 11.4,
        };
        let snapshot = WeatherSnapshot::from_current(&current);
        assert_eq!(snapshot.rounded_temperature(), 22);
        assert_eq!(snapshot.description, "Wind 11.4 km/h");
        assert_eq!(snapshot.display_line(), "Wind 11.4 km/h, 22°C");
    }

    #[test]
    fn test_whole_windspeed_has_no_decimals() {
        let current = CurrentWeather {
            temperature: 3.0,
            windspeed: 11.0,
        };
        assert_eq!(WeatherSnapshot::from_current(&current).description, "Wind 11 km/h");
    }

    #[test]
    fn test_rounding_halves_up() {
        assert_eq!(snapshot(21.5).rounded_temperature(), 22);
        assert_eq!(snapshot(21.49).rounded_temperature(), 21);
        assert_eq!(snapshot(-0.5).rounded_temperature(), 0);
        assert_eq!(snapshot(-1.5).rounded_temperature(), -1);
        assert_eq!(snapshot(-1.6).rounded_temperature(), -2);
    }

    #[test]
    fn test_parse_open_meteo_body() {
        let body = r#"{
            "latitude": 40.710335,
            "longitude": -73.99307,
            "current_weather_units": {"temperature": "°C", "windspeed": "km/h"},
            "current_weather": {
                "time": "2024-05-01T12:00",
                "interval": 900,
                "temperature": 18.3,
                "windspeed": 7.2,
                "winddirection": 210,
                "is_day": 1,
                "weathercode": 3
            }
        }"#;
        let forecast = ForecastResponse::parse(body).unwrap();
        assert_eq!(forecast.current_weather.temperature, 18.3);
        assert_eq!(forecast.current_weather.windspeed, 7.2);
    }

    #[test]
    fn test_parse_without_current_weather() {
        let err = ForecastResponse::parse(r#"{"hourly": {}}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn test_default_config() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.latitude, 40.7128);
        assert_eq!(config.longitude, -74.006);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WeatherConfig = serde_json::from_str(r#"{"latitude": 52.52}"#).unwrap();
        assert_eq!(config.latitude, 52.52);
        assert_eq!(config.longitude, DEFAULT_LONGITUDE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}

#[cfg(all(test, feature = "api", not(target_arch = "wasm32")))]
mod api_tests {
    use super::*;
    use httpmock::prelude::*;

    fn config_for(server: &MockServer) -> WeatherConfig {
        WeatherConfig {
            base_url: server.url("/v1/forecast"),
            ..WeatherConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_current_weather() {
        let server = MockServer::start_async().await;
        let forecast_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/forecast")
                    .query_param("latitude", "40.7128")
                    .query_param("longitude", "-74.006")
                    .query_param("current_weather", "true");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "current_weather": {"temperature": 21.7, "windspeed": 11.4}
                    }));
            })
            .await;

        let client = Client::new();
        let snapshot = fetch_current_weather(&client, &config_for(&server))
            .await
            .unwrap();

        forecast_mock.assert_async().await;
        assert_eq!(snapshot.rounded_temperature(), 22);
        assert_eq!(snapshot.description, "Wind 11.4 km/h");
    }

    #[tokio::test]
    async fn test_bad_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(503);
            })
            .await;

        let client = Client::new();
        let err = fetch_current_weather(&client, &config_for(&server))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Status(503)));
        assert!(load_weather(&client, &config_for(&server)).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/forecast");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = Client::new();
        let err = fetch_current_weather(&client, &config_for(&server))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
        assert!(load_weather(&client, &config_for(&server)).await.is_none());
    }

    #[tokio::test]
    async fn test_network_error() {
        let config = WeatherConfig {
            base_url: "http://127.0.0.1:1/v1/forecast".to_string(),
            ..WeatherConfig::default()
        };
        let client = Client::new();
        let err = fetch_current_weather(&client, &config).await.unwrap_err();
        assert!(matches!(err, WeatherError::Request(_)));
        assert!(load_weather(&client, &config).await.is_none());
    }
}

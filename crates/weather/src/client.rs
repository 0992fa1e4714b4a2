use std::time::Duration;

use reqwest::StatusCode;

use crate::error::{Result, WeatherError};
use crate::models::CurrentWeather;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for an OpenWeatherMap-compatible current-weather endpoint.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            client,
        })
    }

    fn weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }

    async fn send(&self, city: &str) -> Result<reqwest::Response> {
        self.client
            .get(self.weather_url())
            .query(&[
                ("units", "metric"),
                ("q", city),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(WeatherError::NoConnectivity)
    }

    /// Ask the weather service whether `city` names a real place
    pub async fn check_existing(&self, city: &str) -> Result<()> {
        let response = self.send(city).await?;
        check_status(response.status())
    }

    /// Current temperature in degrees Celsius
    pub async fn fetch_temperature(&self, city: &str) -> Result<f64> {
        let response = self.send(city).await?;
        check_status(response.status())?;

        let weather = response
            .json::<CurrentWeather>()
            .await
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        weather
            .temperature()
            .ok_or_else(|| WeatherError::MalformedResponse("missing main.temp".to_string()))
    }

    /// Like [`fetch_temperature`](Self::fetch_temperature), but failures are
    /// logged and turned into `None`.
    pub async fn current_temperature(&self, city: &str) -> Option<f64> {
        match self.fetch_temperature(city).await {
            Ok(temp) => Some(temp),
            Err(e) => {
                tracing::warn!(city, error = %e, "Weather lookup failed");
                None
            }
        }
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound),
        other => Err(WeatherError::UnexpectedStatus(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_branches() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(WeatherError::CityNotFound)
        ));
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(WeatherError::UnexpectedStatus(StatusCode::UNAUTHORIZED))
        ));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = WeatherClient::new(WeatherConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.weather_url(), "http://localhost:8080/data/2.5/weather");
    }
}

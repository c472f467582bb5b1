use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::configured_key;
use crate::error::{Result, ServiceError};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Degrees Celsius
    pub temperature: f64,
    pub description: String,
    /// OpenWeather icon code, e.g. "02d"
    pub icon: String,
}

impl WeatherReport {
    /// Returned when no weather key is configured
    pub fn fallback() -> Self {
        Self {
            temperature: 14.0,
            description: "Parcialmente nublado".to_string(),
            icon: "02d".to_string(),
        }
    }

    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

#[derive(Deserialize)]
struct CurrentWeather {
    main: MainBlock,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

/// OpenWeather current-weather client
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: configured_key(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Current weather for a city query such as "Bogota,CO".
    ///
    /// Without a key this returns [`WeatherReport::fallback`] and makes no
    /// request.
    pub async fn current(&self, city: &str) -> Result<WeatherReport> {
        let Some(api_key) = &self.api_key else {
            return Ok(WeatherReport::fallback());
        };

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", api_key.as_str()),
                ("units", "metric"),
                ("lang", "es"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let current: CurrentWeather = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        let condition = current
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::Decode("no weather conditions in response".into()))?;

        Ok(WeatherReport {
            temperature: current.main.temp,
            description: condition.description,
            icon: condition.icon,
        })
    }
}

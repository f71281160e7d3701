//! OpenWeatherMap API client

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::state::{CurrentWeather, ForecastEntry};

// ============================================================================
// Errors & config
// ============================================================================

/// Lookup error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("weather request failed: {0}")]
    Request(reqwest::Error),
    #[error("city not found: {0}")]
    NotFound(String),
    #[error("weather service returned {status} for {city}")]
    Status { status: u16, city: String },
    #[error("malformed weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL carries `appid`, so it never reaches the message.
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.without_url())
    }
}

/// Connection settings for the provider
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The key ends up in debug logs otherwise.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    clouds: CloudsBlock,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct CloudsBlock {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
}

impl From<CurrentResponse> for CurrentWeather {
    fn from(data: CurrentResponse) -> Self {
        CurrentWeather {
            city: data.name,
            temperature: data.main.temp,
            temp_min: data.main.temp_min,
            temp_max: data.main.temp_max,
            humidity: data.main.humidity,
            cloud_cover: data.clouds.all,
            wind_speed: data.wind.speed,
        }
    }
}

impl From<ForecastItem> for ForecastEntry {
    fn from(item: ForecastItem) -> Self {
        ForecastEntry {
            timestamp: item.dt,
            temperature: item.main.temp,
            description: item
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the current-conditions and forecast endpoints
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: ClientConfig,
}

impl OpenWeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint_url(&self, endpoint: &str, city: &str) -> String {
        format!(
            "{}/{}?q={}&appid={}&units=metric",
            self.config.base_url.trim_end_matches('/'),
            endpoint,
            urlencoding::encode(city),
            urlencoding::encode(&self.config.api_key)
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint_url(endpoint, city))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(city.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                city: city.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch current conditions for a city
    #[instrument(skip(self))]
    pub async fn current(&self, city: &str) -> Result<CurrentWeather, ApiError> {
        if city.trim().is_empty() {
            return Err(ApiError::NotFound(city.to_string()));
        }
        let data: CurrentResponse = self.get_json("weather", city).await?;
        if data.name.is_empty() {
            return Err(ApiError::NotFound(city.to_string()));
        }
        debug!(resolved = %data.name, temp = data.main.temp, "current conditions");
        Ok(data.into())
    }

    /// Fetch the 3-hourly forecast for a city, in provider order
    #[instrument(skip(self))]
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, ApiError> {
        let data: ForecastResponse = self.get_json("forecast", city).await?;
        debug!(entries = data.list.len(), "forecast");
        Ok(data.list.into_iter().map(ForecastEntry::from).collect())
    }
}

//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::presentation::{Backdrop, round_temperature};

/// Current conditions for a resolved city (metric units)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    /// City name as resolved by the provider
    pub city: String,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Cloud cover, percent
    pub cloud_cover: u8,
    /// Wind speed, m/s
    pub wind_speed: f64,
}

/// One 3-hour forecast data point
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastEntry {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    pub temperature: f64,
    pub description: String,
}

/// Coarse widget lifecycle, derived from state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetPhase {
    Intro,
    Idle,
    Loaded,
    Errored,
}

/// Message shown for any failed current-weather lookup.
pub const CITY_NOT_FOUND: &str = "City not found";

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Intro message visible (flips to false once)
    #[debug(section = "Widget", label = "Intro")]
    pub intro_visible: bool,

    /// Raw text from the city input
    #[debug(section = "Widget", label = "Query")]
    pub query: String,

    /// Last successful current-weather lookup
    #[debug(section = "Weather", label = "Current", debug_fmt)]
    pub weather: Option<CurrentWeather>,

    /// Lookup error (mutually exclusive with `weather`)
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    /// Full 3-hourly forecast, provider order
    #[debug(skip)]
    pub forecast: Vec<ForecastEntry>,

    /// Rounded temperature of the latest successful lookup
    #[debug(section = "Weather", label = "Last temp", debug_fmt)]
    pub last_temperature: Option<i64>,

    // --- Request bookkeeping ---
    /// Bumped on every keystroke; stale debounce timers compare against it
    #[debug(section = "Requests", label = "Input seq")]
    pub input_seq: u64,

    /// Sequence of the lookup whose responses are still accepted
    #[debug(section = "Requests", label = "Request seq")]
    pub request_seq: u64,

    /// City string sent with the accepted lookup (reused for the forecast)
    #[debug(section = "Requests", label = "Request city")]
    pub request_city: String,
}

impl AppState {
    /// Create state with an optional pre-filled query
    pub fn new(initial_query: Option<String>) -> Self {
        Self {
            intro_visible: true,
            query: initial_query.unwrap_or_default(),
            weather: None,
            error: None,
            forecast: Vec::new(),
            last_temperature: None,
            input_seq: 0,
            request_seq: 0,
            request_city: String::new(),
        }
    }

    pub fn phase(&self) -> WidgetPhase {
        if self.intro_visible {
            WidgetPhase::Intro
        } else if self.weather.is_some() {
            WidgetPhase::Loaded
        } else if self.error.is_some() {
            WidgetPhase::Errored
        } else {
            WidgetPhase::Idle
        }
    }

    /// Background bucket for the latest known temperature
    pub fn background(&self) -> Backdrop {
        self.last_temperature
            .map(|t| Backdrop::for_temperature(t as f64))
            .unwrap_or_default()
    }

    /// Replace the current conditions after a successful lookup
    pub fn apply_weather(&mut self, weather: CurrentWeather) {
        self.last_temperature = Some(round_temperature(weather.temperature));
        self.weather = Some(weather);
        self.error = None;
    }

    /// Record a failed lookup
    pub fn apply_lookup_error(&mut self) {
        self.weather = None;
        self.error = Some(CITY_NOT_FOUND.to_string());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

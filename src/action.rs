//! Actions - one per event the widget reacts to

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{CurrentWeather, ForecastEntry};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Intro category =====
    /// Result: intro timer fired
    IntroDidElapse,

    // ===== City category =====
    /// City input text changed (restarts the debounce)
    CityInputChange(String),

    /// Debounce window closed for the keystroke tagged `seq`
    CityLookupDue { seq: u64, city: String },

    // ===== Current category =====
    /// Result: current conditions loaded
    CurrentDidLoad { seq: u64, weather: CurrentWeather },

    /// Result: current conditions lookup failed
    CurrentDidError { seq: u64, message: String },

    // ===== Forecast category =====
    /// Result: forecast loaded
    ForecastDidLoad {
        seq: u64,
        entries: Vec<ForecastEntry>,
    },

    /// Result: forecast failed (degrades silently)
    ForecastDidError { seq: u64, message: String },

    // ===== Uncategorized (global) =====
    /// Widget mounted
    Init,

    /// Force a re-render (cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}

//! Derived display values - pure functions of state
//!
//! Nothing in here draws anything. Components call these when they
//! render; tests call them directly.

use chrono::{DateTime, Utc};
use ratatui::style::Color;

use crate::state::ForecastEntry;

/// Provider data points per calendar day (3-hour interval).
///
/// Sampling is a fixed stride over the list, not grouped by date. If the
/// provider interval changes this has to change with it.
pub const FORECAST_STRIDE: usize = 8;

/// Round a temperature for display, halves toward positive infinity.
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

/// Background bucket keyed on temperature
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    /// No temperature known yet
    #[default]
    Default,
    Cold,
    Cool,
    Mild,
    Warm,
}

impl Backdrop {
    /// Buckets: `(-inf, 0)`, `[0, 15]`, `(15, 25]`, `(25, inf)`.
    pub fn for_temperature(celsius: f64) -> Self {
        if celsius < 0.0 {
            Backdrop::Cold
        } else if celsius <= 15.0 {
            Backdrop::Cool
        } else if celsius <= 25.0 {
            Backdrop::Mild
        } else {
            Backdrop::Warm
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Backdrop::Default => "#FFFFFF",
            Backdrop::Cold => "#00BFFF",
            Backdrop::Cool => "#B0C4DE",
            Backdrop::Mild => "#FAFAD2",
            Backdrop::Warm => "#FFDAB9",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Backdrop::Default => Color::Rgb(255, 255, 255),
            Backdrop::Cold => Color::Rgb(0, 191, 255),
            Backdrop::Cool => Color::Rgb(176, 196, 222),
            Backdrop::Mild => Color::Rgb(250, 250, 210),
            Backdrop::Warm => Color::Rgb(255, 218, 185),
        }
    }
}

/// One entry per day: indices 0, 8, 16, ...
pub fn daily_sample(entries: &[ForecastEntry]) -> Vec<&ForecastEntry> {
    entries.iter().step_by(FORECAST_STRIDE).collect()
}

/// Short English weekday ("Mon") for an epoch timestamp, in UTC.
pub fn day_name(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_else(|| "---".to_string())
}

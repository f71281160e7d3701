//! Effects - side effects declared by the reducer, and the task wiring
//! that runs them

use tracing::warn;
use tui_dispatch::{TaskKey, TaskManager};

use crate::action::Action;
use crate::api::{ApiError, OpenWeatherClient};
use crate::config::Settings;

const INTRO_TASK: &str = "intro";
const LOOKUP_TASK: &str = "city_lookup";
const CURRENT_TASK: &str = "current_weather";
const FORECAST_TASK: &str = "forecast";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start the one-shot intro timer
    StartIntroTimer,
    /// (Re)start the debounce window for a city lookup
    ScheduleLookup { seq: u64, city: String },
    /// Drop any pending debounced lookup
    CancelLookup,
    /// Fetch current conditions for the city
    FetchCurrent { seq: u64, city: String },
    /// Fetch the 3-hourly forecast for the city
    FetchForecast { seq: u64, city: String },
}

/// Shared by every effect handler invocation
#[derive(Debug, Clone)]
pub struct Services {
    pub client: OpenWeatherClient,
    pub settings: Settings,
}

impl Services {
    pub fn new(settings: Settings) -> Result<Self, ApiError> {
        let client = OpenWeatherClient::new(settings.client.clone())?;
        Ok(Self { client, settings })
    }
}

/// Handle effects by spawning keyed tasks
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager<Action>, services: &Services) {
    match effect {
        Effect::StartIntroTimer => {
            let intro = services.settings.intro;
            tasks.spawn(INTRO_TASK, async move {
                tokio::time::sleep(intro).await;
                Action::IntroDidElapse
            });
        }
        Effect::ScheduleLookup { seq, city } => {
            tasks.debounce(LOOKUP_TASK, services.settings.debounce, async move {
                Action::CityLookupDue { seq, city }
            });
        }
        Effect::CancelLookup => {
            tasks.cancel(&TaskKey::new(LOOKUP_TASK));
        }
        Effect::FetchCurrent { seq, city } => {
            let client = services.client.clone();
            tasks.spawn(CURRENT_TASK, async move {
                match client.current(&city).await {
                    Ok(weather) => Action::CurrentDidLoad { seq, weather },
                    Err(e) => {
                        warn!(seq, %city, error = %e, "current weather lookup failed");
                        Action::CurrentDidError {
                            seq,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
        Effect::FetchForecast { seq, city } => {
            let client = services.client.clone();
            tasks.spawn(FORECAST_TASK, async move {
                match client.forecast(&city).await {
                    Ok(entries) => Action::ForecastDidLoad { seq, entries },
                    Err(e) => {
                        warn!(seq, %city, error = %e, "forecast lookup failed");
                        Action::ForecastDidError {
                            seq,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}

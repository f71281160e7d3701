pub mod current_conditions;
pub mod forecast_strip;
pub mod intro_message;
pub mod weather_widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use forecast_strip::{FORECAST_HEADING, ForecastStrip, ForecastStripProps};
pub use intro_message::{IntroMessage, WELCOME_TITLE};
pub use weather_widget::{INPUT_PLACEHOLDER, TITLE, WeatherWidget, WeatherWidgetProps};

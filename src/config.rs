//! Runtime settings and their defaults

use std::path::PathBuf;
use std::time::Duration;

use crate::api::ClientConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_INTRO_SECS: u64 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything the effect handlers need at runtime
#[derive(Clone, Debug)]
pub struct Settings {
    pub client: ClientConfig,
    /// Quiet period after the last keystroke before a lookup fires
    pub debounce: Duration,
    /// How long the intro message stays up
    pub intro: Duration,
    pub log_dir: PathBuf,
}

impl Settings {
    pub fn new(client: ClientConfig, log_dir: Option<PathBuf>) -> Self {
        Self {
            client,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            intro: Duration::from_secs(DEFAULT_INTRO_SECS),
            log_dir: log_dir.unwrap_or_else(default_log_dir),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_intro(mut self, intro: Duration) -> Self {
        self.intro = intro;
        self
    }
}

/// `<cache dir>/weather-hub`, or `./logs` when the platform has none
pub fn default_log_dir() -> PathBuf {
    dirs_next::cache_dir()
        .map(|dir| dir.join("weather-hub"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

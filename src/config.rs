//! Runtime configuration.
//!
//! Everything is read from environment variables; there is no config file.
//! Unset variables take the defaults from [`crate::constants`].

use std::path::PathBuf;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::constants::{
    DEFAULT_COLUMN_WIDTH, DEFAULT_LOG_FILE_NAME, IPINFO_URL, LOCATIONIQ_API_BASE,
    LOCATIONIQ_DEFAULT_KEY, OPEN_METEO_API_BASE,
};
use crate::formatters::RenderConfig;

pub const ENV_API_KEY: &str = "LOCATIONIQ_API_KEY";
pub const ENV_IPINFO_URL: &str = "ASCII_WEATHER_IPINFO_URL";
pub const ENV_GEOCODE_URL: &str = "ASCII_WEATHER_GEOCODE_URL";
pub const ENV_FORECAST_URL: &str = "ASCII_WEATHER_FORECAST_URL";
pub const ENV_COLUMN_WIDTH: &str = "ASCII_WEATHER_COLUMN_WIDTH";
pub const ENV_LOG_FILE: &str = "ASCII_WEATHER_LOG_FILE";

/// Endpoints and credentials for the three lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub ipinfo_url: String,
    pub geocode_base: String,
    pub geocode_key: String,
    pub forecast_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            ipinfo_url: IPINFO_URL.to_string(),
            geocode_base: LOCATIONIQ_API_BASE.to_string(),
            geocode_key: LOCATIONIQ_DEFAULT_KEY.to_string(),
            forecast_base: OPEN_METEO_API_BASE.to_string(),
        }
    }
}

/// Colours for the terminal view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub sunny: Style,
    pub rain: Style,
    pub cloud: Style,
    pub message: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Rgb(0x00, 0xff, 0x41))
                .add_modifier(Modifier::BOLD),
            sunny: Style::default().fg(Color::Rgb(0xf9, 0xd7, 0x1c)),
            rain: Style::default().fg(Color::Rgb(0xad, 0xd8, 0xe6)),
            cloud: Style::default().fg(Color::White),
            message: Style::default().fg(Color::Yellow),
        }
    }
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME)
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub render: RenderConfig,
    /// Log destination. Never stderr, which shares the terminal with the view.
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = ApiConfig::default();

        let api = ApiConfig {
            ipinfo_url: get(ENV_IPINFO_URL).unwrap_or(defaults.ipinfo_url),
            geocode_base: get(ENV_GEOCODE_URL).unwrap_or(defaults.geocode_base),
            geocode_key: get(ENV_API_KEY).unwrap_or(defaults.geocode_key),
            forecast_base: get(ENV_FORECAST_URL).unwrap_or(defaults.forecast_base),
        };

        let column_width = match get(ENV_COLUMN_WIDTH) {
            None => DEFAULT_COLUMN_WIDTH,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(width) if width > 0 => width,
                _ => {
                    warn!(
                        "Ignoring {}={:?}, using {}",
                        ENV_COLUMN_WIDTH, raw, DEFAULT_COLUMN_WIDTH
                    );
                    DEFAULT_COLUMN_WIDTH
                }
            },
        };

        Self {
            api,
            render: RenderConfig {
                column_width,
                theme: Theme::default(),
            },
            log_file: get(ENV_LOG_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(default_log_file),
        }
    }
}

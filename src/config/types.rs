use serde::Deserialize;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the user generation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the endpoint, without the query string.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of users requested per batch (default: 100).
    #[serde(default = "default_results")]
    pub results: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout in seconds (default: 15).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Tick interval driving the loading spinner, in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://randomuser.me/api".to_string()
}

fn default_results() -> u32 {
    100
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    15
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            results: default_results(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

//! Component settings: backend address and how long banners stay up.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Runtime settings for the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the todo backend, without the `/todos` suffix.
    pub api_url: String,
    /// How long a status or error message stays visible.
    pub notice_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }
}

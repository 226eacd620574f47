//! API endpoint configuration.

use log::debug;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "SFT_API_URL";

/// Base URL used when no value is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Number of history snapshots requested per vessel.
pub const HISTORY_LIMIT: usize = 15;

/// Where the tracking API lives and how much history to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub history_limit: usize,
}

impl ApiConfig {
    /// Resolve a base URL from a raw configured value.
    ///
    /// The value is trimmed (env files sometimes carry a trailing `\r`), a
    /// trailing `/` is dropped, and an empty result falls back to
    /// [`DEFAULT_API_URL`].
    pub fn resolve(raw: Option<&str>) -> Self {
        let configured = raw
            .map(str::trim)
            .map(|s| s.trim_end_matches('/'))
            .filter(|s| !s.is_empty());
        let base_url = match configured {
            Some(url) => url.to_string(),
            None => {
                debug!("No API URL configured, falling back to {}", DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            }
        };
        Self {
            base_url,
            history_limit: HISTORY_LIMIT,
        }
    }

    /// Resolve from the [`API_URL_ENV`] environment variable.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_URL_ENV).ok().as_deref())
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// `{base}/tracking`
    pub fn tracking_url(&self) -> String {
        format!("{}/tracking", self.base_url)
    }

    /// `{base}/tracking/history/{imo}?limit=N`
    pub fn history_url(&self, imo: &str) -> String {
        format!(
            "{}/tracking/history/{}?limit={}",
            self.base_url,
            imo.trim(),
            self.history_limit
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

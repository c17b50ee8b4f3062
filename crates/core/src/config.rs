//! Configuration structures for the RupeeRush contest pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upstream contest endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://8e04-150-242-197-103.ngrok-free.app/api/hackthon/";

/// Environment variable overriding [`ApiConfig::base_url`].
pub const ENV_API_URL: &str = "RUPEERUSH_API_URL";
/// Environment variable overriding [`ApiConfig::timeout_ms`].
pub const ENV_API_TIMEOUT_MS: &str = "RUPEERUSH_API_TIMEOUT_MS";
/// Environment variable overriding [`NormalizerConfig::market_utc_offset_minutes`].
pub const ENV_MARKET_OFFSET: &str = "RUPEERUSH_MARKET_UTC_OFFSET_MINUTES";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Main configuration for the contest pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API configuration.
    pub api: ApiConfig,
    /// Normalization defaults and market calendar.
    pub normalizer: NormalizerConfig,
}

impl Config {
    /// Build a configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            config.api.timeout_ms = raw.trim().parse().map_err(|_| {
                Error::config(format!("{} must be an integer, got '{}'", ENV_API_TIMEOUT_MS, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_MARKET_OFFSET) {
            config.normalizer.market_utc_offset_minutes = raw.trim().parse().map_err(|_| {
                Error::config(format!("{} must be an integer, got '{}'", ENV_MARKET_OFFSET, raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that every section holds usable values.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.normalizer.validate()
    }
}

/// Upstream contest API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Listing endpoint; result submissions are posted below it.
    pub base_url: String,
    /// Bound on every request (ms).
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: 5_000,
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given endpoint with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }

    /// Base URL guaranteed to end with a slash.
    pub fn base_url_with_slash(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    /// Endpoint receiving results for one contest: `{base_url}{contest_id}/results/`.
    pub fn results_url(&self, contest_id: &str) -> String {
        format!("{}{}/results/", self.base_url_with_slash(), contest_id)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("api.base_url must not be empty"));
        }
        if self.timeout_ms == 0 {
            return Err(Error::config("api.timeout_ms must be positive"));
        }
        Ok(())
    }
}

/// Normalization defaults and the market calendar used for placeholder windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// UTC offset of the market's local time (IST = +330).
    pub market_utc_offset_minutes: i32,
    /// Registration close, minutes after local midnight.
    pub registration_close_minutes: u32,
    /// Market open, minutes after local midnight.
    pub market_open_minutes: u32,
    /// Market close, minutes after local midnight.
    pub market_close_minutes: u32,
    /// Title used when upstream has none.
    pub default_title: String,
    /// Description used when upstream has none.
    pub default_description: String,
    /// Entry fee used when upstream has none.
    pub default_entry_fee: f64,
    /// Prize pool used when upstream has none.
    pub default_prize_pool: f64,
    /// Participant cap used when upstream has none.
    pub default_max_participants: u32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            market_utc_offset_minutes: 330,
            registration_close_minutes: 2 * 60,
            market_open_minutes: 9 * 60 + 30,
            market_close_minutes: 15 * 60 + 30,
            default_title: "Unnamed Contest".to_string(),
            default_description: "Join this exciting trading contest!".to_string(),
            default_entry_fee: 100.0,
            default_prize_pool: 25_000.0,
            default_max_participants: 200,
        }
    }
}

impl NormalizerConfig {
    fn validate(&self) -> Result<()> {
        // chrono::FixedOffset accepts strictly less than a day either way
        if self.market_utc_offset_minutes.unsigned_abs() >= MINUTES_PER_DAY {
            return Err(Error::config(format!(
                "normalizer.market_utc_offset_minutes out of range: {}",
                self.market_utc_offset_minutes
            )));
        }
        for (name, value) in [
            ("registration_close_minutes", self.registration_close_minutes),
            ("market_open_minutes", self.market_open_minutes),
            ("market_close_minutes", self.market_close_minutes),
        ] {
            if value >= MINUTES_PER_DAY {
                return Err(Error::config(format!(
                    "normalizer.{} must be below {}, got {}",
                    name, MINUTES_PER_DAY, value
                )));
            }
        }
        Ok(())
    }
}

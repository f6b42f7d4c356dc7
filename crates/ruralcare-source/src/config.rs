//! Indicator source configuration.
//!
//! A `SourceConfig` names the statistics endpoint, country, and indicator.
//! Every field has a default, so an empty TOML document is valid and points
//! at India's physician density on the World Bank v2 API.
//!
//! Example:
//! ```toml
//! base_url = "https://api.worldbank.org/v2"
//! country = "IN"
//! indicator = "SH.MED.PHYS.ZS"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use ruralcare_contracts::error::{StatsError, StatsResult};

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";
pub const DEFAULT_COUNTRY: &str = "IN";
/// Physicians (per 1,000 people).
pub const DEFAULT_INDICATOR: &str = "SH.MED.PHYS.ZS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// ISO country code, e.g. `"IN"`.
    pub country: String,
    /// World Bank indicator code.
    pub indicator: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            indicator: DEFAULT_INDICATOR.to_string(),
        }
    }
}

impl SourceConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `StatsError::ConfigError` if the TOML is malformed or a field
    /// fails validation.
    pub fn from_toml_str(s: &str) -> StatsResult<Self> {
        let config: SourceConfig = toml::from_str(s).map_err(|e| StatsError::ConfigError {
            reason: format!("failed to parse source TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML source configuration.
    pub fn from_file(path: &Path) -> StatsResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StatsError::ConfigError {
            reason: format!("failed to read source config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> StatsResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(StatsError::ConfigError {
                reason: format!("base_url '{}' must be an http(s) URL", self.base_url),
            });
        }
        if self.country.trim().is_empty() {
            return Err(StatsError::ConfigError {
                reason: "country must not be empty".to_string(),
            });
        }
        if self.indicator.trim().is_empty() {
            return Err(StatsError::ConfigError {
                reason: "indicator must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The full request URL, always asking for JSON.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json",
            self.base_url.trim_end_matches('/'),
            self.country,
            self.indicator
        )
    }
}

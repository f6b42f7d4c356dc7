//! HTTP `IndicatorSource` for the World Bank v2 API.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use tracing::debug;

use ruralcare_contracts::error::{StatsError, StatsResult};
use ruralcare_core::traits::IndicatorSource;

use crate::config::SourceConfig;

/// Issues one GET per `fetch_indicator()` call.
///
/// Uses the transport's default timeouts and never retries. Non-2xx
/// responses are reported as `HttpStatus` without reading the body.
#[derive(Debug, Clone)]
pub struct WorldBankSource {
    client: Client,
    config: SourceConfig,
    url: String,
}

impl WorldBankSource {
    /// Build a source from a validated configuration.
    ///
    /// Returns `StatsError::ConfigError` if the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(config: SourceConfig) -> StatsResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .build()
            .map_err(|e| StatsError::ConfigError {
                reason: format!("failed to create HTTP client: {}", e),
            })?;
        Self::with_client(config, client)
    }

    /// Build a source around a caller-configured client (proxy, TLS roots).
    pub fn with_client(config: SourceConfig, client: Client) -> StatsResult<Self> {
        config.validate()?;
        let url = config.endpoint_url();
        Ok(Self { client, config, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

#[async_trait]
impl IndicatorSource for WorldBankSource {
    async fn fetch_indicator(&self) -> StatsResult<String> {
        debug!(url = %self.url, "requesting indicator");

        let resp = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| StatsError::Transport {
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StatsError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| StatsError::Transport {
            reason: e.to_string(),
        })?;
        debug!(url = %self.url, bytes = body.len(), "indicator response received");
        Ok(body)
    }

    fn indicator(&self) -> &str {
        &self.config.indicator
    }
}

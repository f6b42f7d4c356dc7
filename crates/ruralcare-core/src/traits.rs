//! The trait seam between the provider and the outside world.
//!
//! `IndicatorSource` is the only I/O boundary in the acquisition pipeline.
//! Everything downstream of it (parsing, derivation, fallback) is pure and
//! lives in this crate.

use async_trait::async_trait;

use ruralcare_contracts::error::StatsResult;

/// A source of raw indicator responses.
///
/// Implementations are considered **untrusted**: the body they return may be
/// anything, and any error they raise is absorbed by the provider.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    /// Fetch the raw JSON body for the configured country and indicator.
    ///
    /// Exactly one outbound request per call. No retries, no caching.
    async fn fetch_indicator(&self) -> StatsResult<String>;

    /// The indicator code requested, e.g. `"SH.MED.PHYS.ZS"`.
    ///
    /// Used only to label diagnostics.
    fn indicator(&self) -> &str;
}

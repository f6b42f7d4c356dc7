//! World Bank indicator payload parsing.
//!
//! The v2 API answers `?format=json` requests with a two-element array:
//!
//! ```json
//! [
//!   { "page": 1, "pages": 2, "per_page": 50, "total": 64, "lastupdated": "2025-01-28" },
//!   [ { "date": "2023", "value": null }, { "date": "2021", "value": 0.7271 }, ... ]
//! ]
//! ```
//!
//! Error responses (unknown country, bad indicator) are a one-element array
//! holding a `message` object, which fails the tuple shape and surfaces as
//! `MalformedPayload`. A query with no rows returns `null` in place of the
//! observation array; that is treated as an empty sequence.

use serde::Deserialize;

use ruralcare_contracts::error::{StatsError, StatsResult};

/// Paging header of an indicator response. Only the fields we report on are
/// kept; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub lastupdated: Option<String>,
}

/// One yearly observation. Recent years are frequently unreported (`null`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// The full `[page, observations]` response.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorResponse(pub PageInfo, pub Option<Vec<Observation>>);

impl IndicatorResponse {
    pub fn observations(&self) -> &[Observation] {
        self.1.as_deref().unwrap_or(&[])
    }
}

/// Decode a raw response body.
pub fn parse_response(body: &str) -> StatsResult<IndicatorResponse> {
    serde_json::from_str(body).map_err(|e| StatsError::MalformedPayload {
        reason: e.to_string(),
    })
}

/// Return the first observation carrying a value, scanning the whole
/// sequence in source order.
pub fn first_reported(observations: &[Observation]) -> Option<&Observation> {
    observations.iter().find(|o| o.value.is_some())
}

/// Parse `body` and return the first non-null observation value.
///
/// Fails with `NoObservation` when the sequence is empty or every value is
/// null, and with `MalformedPayload` when the body does not have the
/// expected shape. A reported `0` is returned as-is.
pub fn parse_latest_density(body: &str, indicator: &str) -> StatsResult<f64> {
    let response = parse_response(body)?;
    first_reported(response.observations())
        .and_then(|o| o.value)
        .ok_or_else(|| StatsError::NoObservation {
            indicator: indicator.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! The statistics provider: fetch once, derive, or fall back.
//!
//! The provider runs one acquisition per call:
//!
//!   fetch_indicator → parse_latest_density → derive_live
//!
//! Any error along that path is logged and replaced by `fallback_stats()`.
//! The error type never crosses the provider boundary; callers always get a
//! complete `HealthcareStats`.

use chrono::Utc;
use tracing::{debug, warn};

use ruralcare_contracts::{
    error::StatsResult,
    report::{StatsOrigin, StatsReport},
    stats::HealthcareStats,
};

use crate::{
    derive::{derive_live, fallback_stats, FALLBACK_DENSITY},
    indicator::parse_latest_density,
    traits::IndicatorSource,
};

/// Produces `HealthcareStats` from a single indicator source.
///
/// Holds no state besides the source, so every call is independent: there is
/// no caching and no request deduplication between concurrent callers.
pub struct HealthcareStatsProvider {
    source: Box<dyn IndicatorSource>,
}

impl HealthcareStatsProvider {
    pub fn new(source: Box<dyn IndicatorSource>) -> Self {
        Self { source }
    }

    /// Fetch the indicator and return the first reported density.
    async fn acquire(&self) -> StatsResult<f64> {
        let body = self.source.fetch_indicator().await?;
        parse_latest_density(&body, self.source.indicator())
    }

    /// Run one acquisition and report which branch produced the result.
    pub async fn produce_report(&self) -> StatsReport {
        match self.acquire().await {
            Ok(density) => {
                debug!(
                    indicator = %self.source.indicator(),
                    physician_density = density,
                    "derived live healthcare stats"
                );
                StatsReport {
                    stats: derive_live(density),
                    origin: StatsOrigin::Live,
                    produced_at: Utc::now(),
                    failure: None,
                }
            }
            Err(e) => {
                warn!(
                    indicator = %self.source.indicator(),
                    error = %e,
                    "indicator acquisition failed; using fallback dataset"
                );
                StatsReport {
                    stats: fallback_stats(),
                    origin: StatsOrigin::Fallback,
                    produced_at: Utc::now(),
                    failure: Some(e.to_string()),
                }
            }
        }
    }

    /// Return the live-derived dataset, or the fallback dataset on any
    /// acquisition failure. Never fails.
    pub async fn produce_stats(&self) -> HealthcareStats {
        self.produce_report().await.stats
    }

    /// Independent density lookup for the headline chart.
    ///
    /// Returns the first reported density, or `FALLBACK_DENSITY` when the
    /// sequence has no value or the acquisition fails.
    pub async fn latest_physician_density(&self) -> f64 {
        match self.acquire().await {
            Ok(density) => density,
            Err(e) => {
                warn!(
                    indicator = %self.source.indicator(),
                    error = %e,
                    "physician density unavailable; using {}",
                    FALLBACK_DENSITY
                );
                FALLBACK_DENSITY
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use ruralcare_contracts::{
        error::{StatsError, StatsResult},
        region::Region,
        report::StatsOrigin,
        stats::{VacancyRates, WorkforceShortage},
    };

    use crate::derive::fallback_stats;
    use crate::traits::IndicatorSource;

    use super::HealthcareStatsProvider;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    enum Reply {
        Body(String),
        Transport,
        Status(u16),
    }

    /// A source that replays a fixed reply and counts fetches.
    struct MockSource {
        reply: Reply,
        calls: Arc<Mutex<u32>>,
    }

    impl MockSource {
        fn new(reply: Reply) -> (Self, Arc<Mutex<u32>>) {
            let calls = Arc::new(Mutex::new(0));
            (
                Self {
                    reply,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl IndicatorSource for MockSource {
        async fn fetch_indicator(&self) -> StatsResult<String> {
            *self.calls.lock().unwrap() += 1;
            match &self.reply {
                Reply::Body(body) => Ok(body.clone()),
                Reply::Transport => Err(StatsError::Transport {
                    reason: "connection refused".to_string(),
                }),
                Reply::Status(status) => Err(StatsError::HttpStatus { status: *status }),
            }
        }

        fn indicator(&self) -> &str {
            "SH.MED.PHYS.ZS"
        }
    }

    fn provider(reply: Reply) -> (HealthcareStatsProvider, Arc<Mutex<u32>>) {
        let (source, calls) = MockSource::new(reply);
        (HealthcareStatsProvider::new(Box::new(source)), calls)
    }

    /// Wrap observation JSON fragments in a World Bank style envelope.
    fn payload(observations: &[&str]) -> Reply {
        Reply::Body(format!(
            r#"[{{"page":1,"pages":1,"per_page":50,"total":{}}},[{}]]"#,
            observations.len(),
            observations.join(",")
        ))
    }

    // ── Live branch ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn live_value_drives_density_and_ratios() {
        let (provider, _) = provider(payload(&[r#"{"date":"2021","value":0.9}"#]));

        let stats = provider.produce_stats().await;

        assert_eq!(stats.physician_density, 0.9);
        assert_eq!(
            stats.doctor_population_ratio.rural.maharashtra,
            1.0 / (0.9 * 0.4 * 1000.0 * 1.0)
        );
        assert!((stats.doctor_population_ratio.rural.maharashtra - 1.0 / 360.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn live_branch_uses_live_literals() {
        let (provider, _) = provider(payload(&[r#"{"date":"2020","value":0.8}"#]));

        let report = provider.produce_report().await;

        assert_eq!(report.origin, StatsOrigin::Live);
        assert!(report.failure.is_none());
        assert_eq!(
            report.stats.vacancy_rates,
            VacancyRates { phc: 38.4, chc: 42.8, districthospitals: 28.1 }
        );
        assert_eq!(
            report.stats.workforce_shortage,
            WorkforceShortage { doctors: 600_000, nurses: 2_000_000, specialists: 100_000 }
        );
    }

    #[tokio::test]
    async fn oldest_first_with_nulls_takes_first_reported_value() {
        let (provider, _) = provider(payload(&[
            r#"{"date":"2000","value":null}"#,
            r#"{"date":"2001","value":0.55}"#,
            r#"{"date":"2002","value":null}"#,
            r#"{"date":"2003","value":0.61}"#,
        ]));

        let stats = provider.produce_stats().await;
        assert_eq!(stats.physician_density, 0.55);
    }

    // ── Fallback branch ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn all_null_sequence_returns_fallback() {
        let (provider, _) = provider(payload(&[
            r#"{"date":"2023","value":null}"#,
            r#"{"date":"2022","value":null}"#,
        ]));

        let report = provider.produce_report().await;

        assert_eq!(report.origin, StatsOrigin::Fallback);
        assert_eq!(report.stats, fallback_stats());
        assert_eq!(report.stats.physician_density, 0.8);
        assert!(report.failure.unwrap().contains("no non-null observation"));
    }

    #[tokio::test]
    async fn network_error_returns_fallback() {
        let (provider, _) = provider(Reply::Transport);

        let report = provider.produce_report().await;

        assert!(report.is_fallback());
        assert_eq!(report.stats, fallback_stats());
        assert!(report.failure.unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn network_error_matches_all_null_outcome() {
        let (null_provider, _) = provider(payload(&[r#"{"date":"2023","value":null}"#]));
        let (down_provider, _) = provider(Reply::Transport);

        assert_eq!(
            null_provider.produce_stats().await,
            down_provider.produce_stats().await
        );
    }

    #[tokio::test]
    async fn malformed_json_returns_fallback() {
        let (provider, _) = provider(Reply::Body("{not json".to_string()));
        assert_eq!(provider.produce_stats().await, fallback_stats());
    }

    #[tokio::test]
    async fn non_success_status_returns_fallback() {
        let (provider, _) = provider(Reply::Status(502));

        let report = provider.produce_report().await;

        assert!(report.is_fallback());
        assert!(report.failure.unwrap().contains("HTTP 502"));
    }

    // ── Shape ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn shape_is_identical_across_branches() {
        let (live, _) = provider(payload(&[r#"{"date":"2021","value":0.73}"#]));
        let (down, _) = provider(Reply::Transport);

        for stats in [live.produce_stats().await, down.produce_stats().await] {
            let value = serde_json::to_value(stats).unwrap();
            let ratio = &value["doctorPopulationRatio"];
            assert_eq!(ratio["rural"].as_object().unwrap().len(), 5);
            assert_eq!(ratio["urban"].as_object().unwrap().len(), 5);
            assert_eq!(value["vacancyRates"].as_object().unwrap().len(), 3);
            assert_eq!(value["workforceShortage"].as_object().unwrap().len(), 3);
            assert!(value["physicianDensity"].is_number());
            for region in Region::ALL {
                assert!(ratio["rural"][region.key()].is_number());
            }
        }
    }

    // ── Side effects ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn each_call_issues_one_fetch_without_caching() {
        let (provider, calls) = provider(payload(&[r#"{"date":"2021","value":0.9}"#]));

        provider.produce_stats().await;
        provider.produce_stats().await;
        provider.latest_physician_density().await;

        assert_eq!(*calls.lock().unwrap(), 3);
    }

    // ── Density lookup ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn density_lookup_returns_reported_value() {
        let (provider, _) = provider(payload(&[
            r#"{"date":"2023","value":null}"#,
            r#"{"date":"2021","value":0.7271}"#,
        ]));
        assert_eq!(provider.latest_physician_density().await, 0.7271);
    }

    #[tokio::test]
    async fn density_lookup_defaults_on_failure() {
        let (all_null, _) = provider(payload(&[r#"{"date":"2023","value":null}"#]));
        let (down, _) = provider(Reply::Transport);

        assert_eq!(all_null.latest_physician_density().await, 0.8);
        assert_eq!(down.latest_physician_density().await, 0.8);
    }
}

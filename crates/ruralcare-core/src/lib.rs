//! # ruralcare-core
//!
//! Physician-density acquisition with fallback, and everything derived from
//! it.
//!
//! This crate provides:
//! - The `IndicatorSource` trait (the only I/O seam)
//! - World Bank payload parsing
//! - The live and fallback value sets for `HealthcareStats`
//! - `HealthcareStatsProvider`, the always-succeeds acquisition entry point
//! - Chart-row preparation for the data views
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ruralcare_core::HealthcareStatsProvider;
//!
//! let provider = HealthcareStatsProvider::new(Box::new(source));
//! let stats = provider.produce_stats().await;
//! ```

pub mod chart;
pub mod derive;
pub mod indicator;
pub mod provider;
pub mod traits;

pub use provider::HealthcareStatsProvider;
pub use traits::IndicatorSource;

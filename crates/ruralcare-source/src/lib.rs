//! # ruralcare-source
//!
//! The production `IndicatorSource`: a TOML-configured HTTP client for the
//! World Bank v2 indicator API.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use ruralcare_source::{SourceConfig, WorldBankSource};
//!
//! let config = SourceConfig::from_file(Path::new("ruralcare.toml"))?;
//! let source = WorldBankSource::new(config)?;
//! // Pass `Box::new(source)` to `HealthcareStatsProvider::new(...)`.
//! ```

pub mod config;
pub mod worldbank;

pub use config::SourceConfig;
pub use worldbank::WorldBankSource;

// ── Tests ─────────────────────────────────────────────────────────────────────

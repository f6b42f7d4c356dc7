//! # ruralcare-contracts
//!
//! Shared types and error contracts for the rural healthcare workforce
//! presentation.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod error;
pub mod region;
pub mod report;
pub mod stats;

pub use error::{StatsError, StatsResult};
pub use region::{FacilityTier, Region, WorkforceRole};
pub use report::{StatsOrigin, StatsReport};
pub use stats::{DoctorPopulationRatio, HealthcareStats, RegionalRatios, VacancyRates, WorkforceShortage};

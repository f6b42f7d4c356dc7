//! Fixed key sets used by `HealthcareStats`.
//!
//! Each enum lists its members in the order charts and tables present them.
//! `key()` is the JSON key the member serializes under; `label()` is the
//! human-readable name shown in views.

use serde::{Deserialize, Serialize};

/// One of the five Indian states tracked by the doctor-population ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Maharashtra,
    Bihar,
    Kerala,
    UttarPradesh,
    TamilNadu,
}

impl Region {
    /// All regions in presentation order.
    pub const ALL: [Region; 5] = [
        Region::Maharashtra,
        Region::Bihar,
        Region::Kerala,
        Region::UttarPradesh,
        Region::TamilNadu,
    ];

    /// The JSON key for this region, e.g. `"uttarPradesh"`.
    pub fn key(self) -> &'static str {
        match self {
            Region::Maharashtra => "maharashtra",
            Region::Bihar => "bihar",
            Region::Kerala => "kerala",
            Region::UttarPradesh => "uttarPradesh",
            Region::TamilNadu => "tamilNadu",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Maharashtra => "Maharashtra",
            Region::Bihar => "Bihar",
            Region::Kerala => "Kerala",
            Region::UttarPradesh => "Uttar Pradesh",
            Region::TamilNadu => "Tamil Nadu",
        }
    }
}

/// Public facility tiers reported in the vacancy statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityTier {
    /// Primary Health Centre.
    Phc,
    /// Community Health Centre.
    Chc,
    DistrictHospitals,
}

impl FacilityTier {
    pub const ALL: [FacilityTier; 3] = [
        FacilityTier::Phc,
        FacilityTier::Chc,
        FacilityTier::DistrictHospitals,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FacilityTier::Phc => "phc",
            FacilityTier::Chc => "chc",
            FacilityTier::DistrictHospitals => "districthospitals",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FacilityTier::Phc => "Primary Health Centers",
            FacilityTier::Chc => "Community Health Centers",
            FacilityTier::DistrictHospitals => "District Hospitals",
        }
    }
}

/// Workforce roles whose national shortage is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkforceRole {
    Doctors,
    Nurses,
    Specialists,
}

impl WorkforceRole {
    pub const ALL: [WorkforceRole; 3] = [
        WorkforceRole::Doctors,
        WorkforceRole::Nurses,
        WorkforceRole::Specialists,
    ];

    pub fn key(self) -> &'static str {
        match self {
            WorkforceRole::Doctors => "doctors",
            WorkforceRole::Nurses => "nurses",
            WorkforceRole::Specialists => "specialists",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkforceRole::Doctors => "Doctors",
            WorkforceRole::Nurses => "Nurses",
            WorkforceRole::Specialists => "Specialists",
        }
    }
}

//! The `HealthcareStats` data model.
//!
//! Every map in the model is a plain struct with one field per key, so a
//! value that type-checks always carries the full key set. Field names are
//! renamed on the wire to the camelCase keys the charts are built from.

use serde::{Deserialize, Serialize};

use crate::region::{FacilityTier, Region, WorkforceRole};

/// A per-region ratio for the five tracked states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalRatios {
    pub maharashtra: f64,
    pub bihar: f64,
    pub kerala: f64,
    #[serde(rename = "uttarPradesh")]
    pub uttar_pradesh: f64,
    #[serde(rename = "tamilNadu")]
    pub tamil_nadu: f64,
}

impl RegionalRatios {
    /// Build a ratio set by evaluating `f` once per region.
    pub fn from_fn(mut f: impl FnMut(Region) -> f64) -> Self {
        Self {
            maharashtra: f(Region::Maharashtra),
            bihar: f(Region::Bihar),
            kerala: f(Region::Kerala),
            uttar_pradesh: f(Region::UttarPradesh),
            tamil_nadu: f(Region::TamilNadu),
        }
    }

    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::Maharashtra => self.maharashtra,
            Region::Bihar => self.bihar,
            Region::Kerala => self.kerala,
            Region::UttarPradesh => self.uttar_pradesh,
            Region::TamilNadu => self.tamil_nadu,
        }
    }

    /// Iterate `(region, ratio)` pairs in `Region::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, f64)> + '_ {
        Region::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

/// Doctors per person, split by rural and urban settings, plus the WHO
/// reference ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoctorPopulationRatio {
    pub rural: RegionalRatios,
    pub urban: RegionalRatios,
    /// WHO recommended standard: one doctor per 1,000 people.
    pub who: f64,
}

/// Vacancy percentages (0–100) by facility tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VacancyRates {
    pub phc: f64,
    pub chc: f64,
    pub districthospitals: f64,
}

impl VacancyRates {
    pub fn get(&self, tier: FacilityTier) -> f64 {
        match tier {
            FacilityTier::Phc => self.phc,
            FacilityTier::Chc => self.chc,
            FacilityTier::DistrictHospitals => self.districthospitals,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacilityTier, f64)> + '_ {
        FacilityTier::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

/// Absolute headcount shortage by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceShortage {
    pub doctors: u64,
    pub nurses: u64,
    pub specialists: u64,
}

impl WorkforceShortage {
    pub fn get(&self, role: WorkforceRole) -> u64 {
        match role {
            WorkforceRole::Doctors => self.doctors,
            WorkforceRole::Nurses => self.nurses,
            WorkforceRole::Specialists => self.specialists,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WorkforceRole, u64)> + '_ {
        WorkforceRole::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

/// The complete dataset consumed by the charts.
///
/// Produced either from a live physician-density observation or from the
/// literal fallback set, never a mix of the two. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareStats {
    pub doctor_population_ratio: DoctorPopulationRatio,
    pub vacancy_rates: VacancyRates,
    pub workforce_shortage: WorkforceShortage,
    /// Physicians per 1,000 population.
    pub physician_density: f64,
}

//! Live and fallback value sets for `HealthcareStats`.
//!
//! The regional multipliers are presentation data, not sourced statistics.
//! They are reproduced as literal tables and must not be re-derived.
//!
//! Live and fallback carry different vacancy and shortage literals. Which
//! branch produced a value is therefore visible from those numbers alone.

use ruralcare_contracts::{
    region::Region,
    stats::{DoctorPopulationRatio, HealthcareStats, RegionalRatios, VacancyRates, WorkforceShortage},
};

/// Density substituted when no observation is available.
pub const FALLBACK_DENSITY: f64 = 0.8;

/// WHO recommended standard: one doctor per 1,000 people.
pub const WHO_RATIO: f64 = 1.0 / 1000.0;

/// Urban baseline: doctors per 1,000 in the best-case urban setting.
pub const URBAN_BASELINE_FACTOR: f64 = 3.0;

/// Rural baseline: doctors per 1,000 in the worst-case rural setting.
pub const RURAL_BASELINE_FACTOR: f64 = 0.4;

pub const RURAL_MULTIPLIERS: [(Region, f64); 5] = [
    (Region::Maharashtra, 1.0),
    (Region::Bihar, 1.5),
    (Region::Kerala, 0.7),
    (Region::UttarPradesh, 1.3),
    (Region::TamilNadu, 0.8),
];

pub const URBAN_MULTIPLIERS: [(Region, f64); 5] = [
    (Region::Maharashtra, 1.0),
    (Region::Bihar, 1.2),
    (Region::Kerala, 0.9),
    (Region::UttarPradesh, 1.1),
    (Region::TamilNadu, 0.85),
];

const LIVE_VACANCY: VacancyRates = VacancyRates {
    phc: 38.4,
    chc: 42.8,
    districthospitals: 28.1,
};

const LIVE_SHORTAGE: WorkforceShortage = WorkforceShortage {
    doctors: 600_000,
    nurses: 2_000_000,
    specialists: 100_000,
};

const FALLBACK_VACANCY: VacancyRates = VacancyRates {
    phc: 38.0,
    chc: 42.0,
    districthospitals: 28.0,
};

const FALLBACK_SHORTAGE: WorkforceShortage = WorkforceShortage {
    doctors: 76_500,
    nurses: 201_000,
    specialists: 87_500,
};

pub fn rural_multiplier(region: Region) -> f64 {
    match region {
        Region::Maharashtra => 1.0,
        Region::Bihar => 1.5,
        Region::Kerala => 0.7,
        Region::UttarPradesh => 1.3,
        Region::TamilNadu => 0.8,
    }
}

pub fn urban_multiplier(region: Region) -> f64 {
    match region {
        Region::Maharashtra => 1.0,
        Region::Bihar => 1.2,
        Region::Kerala => 0.9,
        Region::UttarPradesh => 1.1,
        Region::TamilNadu => 0.85,
    }
}

/// `1 / (baseline × 1000 × multiplier)`, evaluated left to right.
fn regional_ratio(baseline: f64, multiplier: f64) -> f64 {
    1.0 / (baseline * 1000.0 * multiplier)
}

/// Build the live value set from a physician density (per 1,000 people).
///
/// The density is not range-checked. A reported density of zero yields
/// infinite regional ratios, which serialize as JSON `null`.
pub fn derive_live(physician_density: f64) -> HealthcareStats {
    let urban_baseline = physician_density * URBAN_BASELINE_FACTOR;
    let rural_baseline = physician_density * RURAL_BASELINE_FACTOR;

    HealthcareStats {
        doctor_population_ratio: DoctorPopulationRatio {
            rural: RegionalRatios::from_fn(|r| regional_ratio(rural_baseline, rural_multiplier(r))),
            urban: RegionalRatios::from_fn(|r| regional_ratio(urban_baseline, urban_multiplier(r))),
            who: WHO_RATIO,
        },
        vacancy_rates: LIVE_VACANCY,
        workforce_shortage: LIVE_SHORTAGE,
        physician_density,
    }
}

/// The literal substitute dataset.
pub fn fallback_stats() -> HealthcareStats {
    HealthcareStats {
        doctor_population_ratio: DoctorPopulationRatio {
            rural: RegionalRatios {
                maharashtra: 1.0 / 10500.0,
                bihar: 1.0 / 17000.0,
                kerala: 1.0 / 5000.0,
                uttar_pradesh: 1.0 / 12000.0,
                tamil_nadu: 1.0 / 6500.0,
            },
            urban: RegionalRatios {
                maharashtra: 1.0 / 800.0,
                bihar: 1.0 / 2000.0,
                kerala: 1.0 / 500.0,
                uttar_pradesh: 1.0 / 1500.0,
                tamil_nadu: 1.0 / 750.0,
            },
            who: WHO_RATIO,
        },
        vacancy_rates: FALLBACK_VACANCY,
        workforce_shortage: FALLBACK_SHORTAGE,
        physician_density: FALLBACK_DENSITY,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

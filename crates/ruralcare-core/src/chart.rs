//! Chart-row preparation for the data views.
//!
//! Each function flattens part of a `HealthcareStats` into the rows a bar
//! chart plots. Rows serialize with the same field names the charts key on.

use serde::Serialize;

use ruralcare_contracts::{
    region::{FacilityTier, Region, WorkforceRole},
    stats::HealthcareStats,
};

/// Reference density shown next to the national figure.
pub const WHO_RECOMMENDED_DENSITY: f64 = 1.0;

/// Population per doctor for one region (lower is better).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatioRow {
    pub name: String,
    pub rural: u64,
    pub urban: u64,
    pub who: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyRow {
    pub name: String,
    pub rate: f64,
}

/// Shortage in thousands of workers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortageRow {
    pub name: String,
    pub shortage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityRow {
    pub name: String,
    pub value: f64,
}

/// Upper-case the first character of a key: `uttarPradesh` → `UttarPradesh`.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `round(1 / ratio)` as a whole population count.
fn population_per_doctor(ratio: f64) -> u64 {
    (1.0 / ratio).round() as u64
}

pub fn ratio_rows(stats: &HealthcareStats) -> Vec<RatioRow> {
    let ratio = &stats.doctor_population_ratio;
    Region::ALL
        .into_iter()
        .map(|region| RatioRow {
            name: capitalize(region.key()),
            rural: population_per_doctor(ratio.rural.get(region)),
            urban: population_per_doctor(ratio.urban.get(region)),
            who: population_per_doctor(ratio.who),
        })
        .collect()
}

pub fn vacancy_rows(stats: &HealthcareStats) -> Vec<VacancyRow> {
    FacilityTier::ALL
        .into_iter()
        .map(|tier| VacancyRow {
            name: tier.label().to_string(),
            rate: stats.vacancy_rates.get(tier),
        })
        .collect()
}

pub fn shortage_rows(stats: &HealthcareStats) -> Vec<ShortageRow> {
    WorkforceRole::ALL
        .into_iter()
        .map(|role| ShortageRow {
            name: role.label().to_string(),
            shortage: stats.workforce_shortage.get(role) as f64 / 1000.0,
        })
        .collect()
}

/// National density next to the WHO recommendation.
pub fn density_rows(physician_density: f64) -> Vec<DensityRow> {
    vec![
        DensityRow {
            name: "India".to_string(),
            value: physician_density,
        },
        DensityRow {
            name: "WHO Recommended".to_string(),
            value: WHO_RECOMMENDED_DENSITY,
        },
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{derive_live, fallback_stats};

    #[test]
    fn ratio_rows_from_fallback() {
        let rows = ratio_rows(&fallback_stats());

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Maharashtra", "Bihar", "Kerala", "UttarPradesh", "TamilNadu"]
        );
        assert_eq!(
            rows[1],
            RatioRow {
                name: "Bihar".to_string(),
                rural: 17000,
                urban: 2000,
                who: 1000,
            }
        );
        assert_eq!(rows[4].rural, 6500);
        assert_eq!(rows[4].urban, 750);
    }

    #[test]
    fn ratio_rows_from_live_density() {
        // rural maharashtra: 1 / (0.9 * 0.4 * 1000) ≈ 1/360
        let rows = ratio_rows(&derive_live(0.9));
        assert_eq!(rows[0].rural, 360);
        // urban maharashtra: 0.9 * 3 * 1000 = 2700
        assert_eq!(rows[0].urban, 2700);
        // rural bihar: 360 * 1.5 = 540
        assert_eq!(rows[1].rural, 540);
        assert!(rows.iter().all(|r| r.who == 1000));
    }

    #[test]
    fn vacancy_rows_use_tier_labels() {
        let rows = vacancy_rows(&derive_live(0.9));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Primary Health Centers");
        assert_eq!(rows[0].rate, 38.4);
        assert_eq!(rows[2].name, "District Hospitals");
        assert_eq!(rows[2].rate, 28.1);
    }

    #[test]
    fn shortage_rows_are_in_thousands() {
        let rows = shortage_rows(&fallback_stats());
        let values: Vec<f64> = rows.iter().map(|r| r.shortage).collect();
        assert_eq!(values, vec![76.5, 201.0, 87.5]);
        assert_eq!(rows[2].name, "Specialists");
    }

    #[test]
    fn density_rows_pair_india_with_who() {
        let rows = density_rows(0.7271);
        assert_eq!(rows[0].name, "India");
        assert_eq!(rows[0].value, 0.7271);
        assert_eq!(rows[1].name, "WHO Recommended");
        assert_eq!(rows[1].value, 1.0);
    }

    #[test]
    fn capitalize_handles_empty_and_camel_case() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("tamilNadu"), "TamilNadu");
    }
}

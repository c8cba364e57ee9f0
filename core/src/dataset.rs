//! Synthetic data provider: every table the desk displays.
//!
//! Generation is a pure function of (seed, DatasetConfig). Randomised
//! tables (applications, trend) draw from their own RngBank slot; the
//! reference tables (product volumes, feature impact, cohorts, drift,
//! incidents) are fixed and only shaped by the config's counts and
//! anchor dates.
//!
//! Nothing here is mutated after generation. Views only read and project.

use crate::{
    config::DatasetConfig,
    rng::{DatasetSlot, RngBank},
    types::{ApplicationId, ApplicationStatus, Product, Quarter, RiskLevel, Seed},
};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First application id is `USR{ID_BASE}`.
pub const ID_BASE: usize = 1000;

/// Scores are drawn from [SCORE_MIN, SCORE_MAX).
pub const SCORE_MIN: u32 = 300;
pub const SCORE_MAX: u32 = 1000;

// ── Records ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub id:         ApplicationId,
    pub product:    Product,
    pub score:      u32,
    pub risk_level: RiskLevel,
    pub status:     ApplicationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub date:              NaiveDate,
    pub application_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductPeriodMetric {
    pub period:          Quarter,
    pub product_volumes: BTreeMap<Product, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactFeature {
    pub feature:      String,
    pub impact_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CohortStat {
    pub cohort:       RiskLevel,
    pub default_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftPoint {
    pub date: NaiveDate,
    pub auc:  f64,
    pub ks:   f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentRecord {
    pub timestamp:     NaiveDateTime,
    pub incident_type: String,
    pub resolved:      bool,
}

/// One session's worth of data. Built once, read by every view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub seed:            Seed,
    pub applications:    Vec<ApplicationRecord>,
    pub trend:           Vec<TrendPoint>,
    pub product_metrics: Vec<ProductPeriodMetric>,
    pub impact:          Vec<ImpactFeature>,
    pub cohorts:         Vec<CohortStat>,
    pub drift:           Vec<DriftPoint>,
    pub incidents:       Vec<IncidentRecord>,
}

// ── Reference tables ─────────────────────────────────────────────────────────

const PRODUCT_VOLUMES: &[(Quarter, [(Product, u32); 3])] = &[
    (Quarter::Q1, [(Product::Bnpl, 320), (Product::PersonalLoan, 210), (Product::LineOfCredit, 170)]),
    (Quarter::Q2, [(Product::Bnpl, 270), (Product::PersonalLoan, 190), (Product::LineOfCredit, 150)]),
    (Quarter::Q3, [(Product::Bnpl, 300), (Product::PersonalLoan, 220), (Product::LineOfCredit, 200)]),
];

const FEATURE_IMPACT: &[(&str, f64)] = &[
    ("Bank Transactions", 0.8),
    ("Digital Footprint", 0.6),
    ("Location",          0.3),
    ("Device Info",       0.2),
];

const COHORT_DEFAULT_RATES: &[(RiskLevel, f64)] = &[
    (RiskLevel::Low,    0.01),
    (RiskLevel::Medium, 0.08),
    (RiskLevel::High,   0.20),
];

/// Reference model decay curve, oldest first: (AUC, KS).
const DRIFT_CURVE: &[(f64, f64)] = &[
    (0.82, 0.48),
    (0.80, 0.47),
    (0.76, 0.44),
    (0.71, 0.40),
    (0.68, 0.35),
];

/// (incident type, resolved). Longer incident lists cycle this pattern.
const INCIDENT_PATTERN: &[(&str, bool)] = &[
    ("Model Timeout",      true),
    ("Latency Spike",      false),
    ("Fallback Triggered", true),
];

// ── Generation ───────────────────────────────────────────────────────────────

/// Generate a dataset with the default shape.
pub fn generate(seed: Seed) -> Dataset {
    generate_with(seed, &DatasetConfig::default())
}

/// Generate a dataset. Same (seed, config) always yields the same dataset.
pub fn generate_with(seed: Seed, config: &DatasetConfig) -> Dataset {
    let bank = RngBank::new(seed);

    let dataset = Dataset {
        seed,
        applications:    generate_applications(&bank, config.applications),
        trend:           generate_trend(&bank, config),
        product_metrics: product_metrics(),
        impact:          FEATURE_IMPACT
            .iter()
            .map(|(feature, impact_score)| ImpactFeature {
                feature:      (*feature).to_string(),
                impact_score: *impact_score,
            })
            .collect(),
        cohorts:         COHORT_DEFAULT_RATES
            .iter()
            .map(|(cohort, default_rate)| CohortStat {
                cohort:       *cohort,
                default_rate: *default_rate,
            })
            .collect(),
        drift:           drift_series(config.as_of.date(), config.drift_points),
        incidents:       incidents(config.as_of, config.incidents),
    };

    log::debug!(
        "seed={seed} dataset: {} applications, {} trend points, {} drift points, {} incidents",
        dataset.applications.len(),
        dataset.trend.len(),
        dataset.drift.len(),
        dataset.incidents.len()
    );
    dataset
}

fn generate_applications(bank: &RngBank, count: usize) -> Vec<ApplicationRecord> {
    let mut rng = bank.for_slot(DatasetSlot::Applications);
    (0..count)
        .map(|i| ApplicationRecord {
            id:         format!("USR{}", ID_BASE + i),
            product:    rng.pick(Product::ALL),
            score:      rng.range(SCORE_MIN, SCORE_MAX),
            risk_level: rng.pick(RiskLevel::ALL),
            status:     rng.pick(ApplicationStatus::ALL),
        })
        .collect()
}

/// One point per month end, starting with the month of `trend_start`.
fn generate_trend(bank: &RngBank, config: &DatasetConfig) -> Vec<TrendPoint> {
    let mut rng = bank.for_slot(DatasetSlot::Trend);
    let first_of_month = config.trend_start.with_day(1).unwrap_or(config.trend_start);

    (0..config.trend_points)
        .filter_map(|i| {
            let count = rng.range(config.trend_volume_min, config.trend_volume_max);
            month_end(first_of_month, i).map(|date| TrendPoint {
                date,
                application_count: count,
            })
        })
        .collect()
}

/// Last day of the month `offset` months after `first_of_month`.
fn month_end(first_of_month: NaiveDate, offset: usize) -> Option<NaiveDate> {
    let months = u32::try_from(offset + 1).ok()?;
    first_of_month
        .checked_add_months(Months::new(months))
        .and_then(|d| d.pred_opt())
}

fn product_metrics() -> Vec<ProductPeriodMetric> {
    PRODUCT_VOLUMES
        .iter()
        .map(|(period, volumes)| ProductPeriodMetric {
            period:          *period,
            product_volumes: volumes.iter().copied().collect(),
        })
        .collect()
}

/// Daily drift points ending on `end`. `count` other than the reference
/// curve's length resamples the curve by linear interpolation.
fn drift_series(end: NaiveDate, count: usize) -> Vec<DriftPoint> {
    (0..count)
        .filter_map(|i| {
            let (auc, ks) = sample_curve(i, count);
            let days_back = (count - 1 - i) as u64;
            end.checked_sub_days(Days::new(days_back))
                .map(|date| DriftPoint { date, auc, ks })
        })
        .collect()
}

fn sample_curve(i: usize, count: usize) -> (f64, f64) {
    let last = DRIFT_CURVE.len() - 1;
    if count <= 1 {
        return DRIFT_CURVE[last];
    }
    let pos = i as f64 * last as f64 / (count - 1) as f64;
    let lo = (pos.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let frac = pos - lo as f64;
    let (auc_lo, ks_lo) = DRIFT_CURVE[lo];
    let (auc_hi, ks_hi) = DRIFT_CURVE[hi];
    (
        auc_lo + (auc_hi - auc_lo) * frac,
        ks_lo + (ks_hi - ks_lo) * frac,
    )
}

fn incidents(as_of: NaiveDateTime, count: usize) -> Vec<IncidentRecord> {
    INCIDENT_PATTERN
        .iter()
        .cycle()
        .take(count)
        .map(|(incident_type, resolved)| IncidentRecord {
            timestamp:     as_of,
            incident_type: (*incident_type).to_string(),
            resolved:      *resolved,
        })
        .collect()
}

//! Desk configuration: dataset shape, form defaults and alert thresholds.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides. In tests, use DeskConfig::default().

use crate::types::{Country, Product, ProductStatus, RuleVersion};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeskConfig {
    pub data:           DatasetConfig,
    pub rule_builder:   RuleBuilderConfig,
    pub product_config: ProductConfigDefaults,
    pub analytics:      AnalyticsConfig,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data:           DatasetConfig::default(),
            rule_builder:   RuleBuilderConfig::default(),
            product_config: ProductConfigDefaults::default(),
            analytics:      AnalyticsConfig::default(),
        }
    }
}

impl DeskConfig {
    /// Load from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DeskConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!(
            "loaded config from {path}: {} applications, {} trend points",
            config.data.applications,
            config.data.trend_points
        );
        Ok(config)
    }

    /// Every `[min, max]` pair must be ordered. Defaults outside their
    /// range are allowed; forms clamp them and warn.
    pub fn validate(&self) -> anyhow::Result<()> {
        let pairs = [
            ("rule_builder.income_min", "income_max", self.rule_builder.income_min, self.rule_builder.income_max),
            ("rule_builder.score_min", "score_max", self.rule_builder.score_min, self.rule_builder.score_max),
            (
                "product_config.min_score_floor",
                "min_score_ceiling",
                self.product_config.min_score_floor,
                self.product_config.min_score_ceiling,
            ),
            ("data.trend_volume_min", "trend_volume_max", self.data.trend_volume_min, self.data.trend_volume_max),
        ];
        for (low_name, high_name, low, high) in pairs {
            if low > high {
                anyhow::bail!("{low_name} > {high_name} ({low} > {high})");
            }
        }
        Ok(())
    }
}

// ── Synthetic data ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub applications:  usize,
    pub trend_points:  usize,
    pub drift_points:  usize,
    pub incidents:     usize,
    /// Any day in the first month of the trend series.
    pub trend_start:   NaiveDate,
    /// "Now" for the drift series and incident timestamps.
    /// Fixed here so generation stays reproducible; the runner
    /// overrides it with the wall clock.
    pub as_of:         NaiveDateTime,
    /// Application counts per trend point are drawn from [min, max).
    pub trend_volume_min: u32,
    pub trend_volume_max: u32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            applications:     10,
            trend_points:     12,
            drift_points:     5,
            incidents:        3,
            trend_start:      ymd(2024, 1, 1),
            as_of:            ymd(2024, 12, 31).and_hms_opt(9, 0, 0).unwrap_or_default(),
            trend_volume_min: 800,
            trend_volume_max: 1500,
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

// ── Rule Builder form ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuleBuilderConfig {
    pub product:          Product,
    pub income_min:       u32,
    pub income_max:       u32,
    pub income_default:   u32,
    pub score_min:        u32,
    pub score_max:        u32,
    pub score_default:    u32,
    pub country:          Country,
    pub version:          RuleVersion,
}

impl Default for RuleBuilderConfig {
    fn default() -> Self {
        Self {
            product:        Product::Bnpl,
            income_min:     0,
            income_max:     20_000,
            income_default: 3_000,
            score_min:      300,
            score_max:      1_000,
            score_default:  650,
            country:        Country::Uae,
            version:        RuleVersion::V2_0,
        }
    }
}

// ── Product Config form ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductConfigDefaults {
    pub product:               Product,
    pub min_score_floor:       u32,
    pub min_score_ceiling:     u32,
    pub min_score:             u32,
    pub credit_limit:          f64,
    pub use_bank_transactions: bool,
    pub use_digital_footprint: bool,
    pub status:                ProductStatus,
}

impl Default for ProductConfigDefaults {
    fn default() -> Self {
        Self {
            product:               Product::Bnpl,
            min_score_floor:       300,
            min_score_ceiling:     1_000,
            min_score:             600,
            credit_limit:          5_000.0,
            use_bank_transactions: true,
            use_digital_footprint: false,
            status:                ProductStatus::Active,
        }
    }
}

// ── Analytics ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Alert when the latest AUC is strictly below this value.
    pub drift_auc_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { drift_auc_threshold: 0.70 }
    }
}

//! Per-page form state.
//!
//! Forms exist only while their page is selected; the session rebuilds
//! them from config defaults on every page change. Numeric inputs arrive
//! unchecked and are clamped into their declared bounds. Clamping never
//! fails, it reports a `DeskError::InvalidParameter` alongside the value.

use crate::{
    config::{ProductConfigDefaults, RuleBuilderConfig},
    error::DeskError,
    types::{ApplicationId, Country, Product, ProductStatus, RuleVersion},
};
use serde::{Deserialize, Serialize};

/// A value forced into range, plus the violation if one occurred.
#[derive(Debug)]
pub struct Clamped<T> {
    pub value: T,
    pub error: Option<DeskError>,
}

/// Clamp `value` into `[min, max]`. Infinities land on the nearest bound,
/// NaN on the lower one. Inverted bounds are swapped.
pub fn clamp_param(name: &'static str, value: f64, min: f64, max: f64) -> Clamped<f64> {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let clamped = if value.is_nan() { min } else { value.max(min).min(max) };
    let error = (clamped != value).then(|| {
        log::warn!("{name}={value} outside [{min}, {max}], using {clamped}");
        DeskError::InvalidParameter { name, value, min, max, clamped }
    });
    Clamped { value: clamped, error }
}

/// Integer slider variant of `clamp_param`.
pub fn clamp_slider(name: &'static str, value: i64, min: u32, max: u32) -> Clamped<u32> {
    let Clamped { value: v, error } = clamp_param(name, value as f64, f64::from(min), f64::from(max));
    Clamped { value: v.round() as u32, error }
}

// ── Rule Builder ─────────────────────────────────────────────────────────────

/// Transient rule under construction. Never applied to any application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDraft {
    pub product_scope:          Product,
    pub income_threshold:       u32,
    pub credit_score_threshold: u32,
    pub country_scope:          Country,
    pub rule_version:           RuleVersion,
}

impl RuleDraft {
    /// Slider defaults outside their configured range are clamped and
    /// the violations returned alongside the draft.
    pub fn from_config(cfg: &RuleBuilderConfig) -> (Self, Vec<DeskError>) {
        let income = clamp_slider("income", cfg.income_default.into(), cfg.income_min, cfg.income_max);
        let score = clamp_slider("credit_score", cfg.score_default.into(), cfg.score_min, cfg.score_max);
        let draft = Self {
            product_scope:          cfg.product,
            income_threshold:       income.value,
            credit_score_threshold: score.value,
            country_scope:          cfg.country,
            rule_version:           cfg.version,
        };
        (draft, income.error.into_iter().chain(score.error).collect())
    }
}

// ── Product Config ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductConfigForm {
    pub product:               Product,
    pub min_score:             u32,
    pub credit_limit:          f64,
    pub use_bank_transactions: bool,
    pub use_digital_footprint: bool,
    pub status:                ProductStatus,
}

impl ProductConfigForm {
    pub fn from_config(cfg: &ProductConfigDefaults) -> (Self, Vec<DeskError>) {
        let score = clamp_slider("min_score", cfg.min_score.into(), cfg.min_score_floor, cfg.min_score_ceiling);
        let limit = clamp_credit_limit(cfg.credit_limit);
        let form = Self {
            product:               cfg.product,
            min_score:             score.value,
            credit_limit:          limit.value,
            use_bank_transactions: cfg.use_bank_transactions,
            use_digital_footprint: cfg.use_digital_footprint,
            status:                cfg.status,
        };
        (form, score.error.into_iter().chain(limit.error).collect())
    }
}

/// Credit limits have no upper bound.
pub fn clamp_credit_limit(value: f64) -> Clamped<f64> {
    clamp_param("credit_limit", value, 0.0, f64::MAX)
}

// ── All forms ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub rule:                 RuleDraft,
    pub product_config:       ProductConfigForm,
    /// None means "first application in the table".
    pub selected_application: Option<ApplicationId>,
}

/// Defaults that had to be clamped while building fresh forms, kept per
/// page so each warning shows where its slider lives.
#[derive(Debug, Default)]
pub struct DefaultIssues {
    pub rule:           Vec<DeskError>,
    pub product_config: Vec<DeskError>,
}

impl FormInputs {
    pub fn from_config(rule: &RuleBuilderConfig, product: &ProductConfigDefaults) -> (Self, DefaultIssues) {
        let (rule, rule_issues) = RuleDraft::from_config(rule);
        let (product_config, product_issues) = ProductConfigForm::from_config(product);
        let forms = Self { rule, product_config, selected_application: None };
        (forms, DefaultIssues { rule: rule_issues, product_config: product_issues })
    }
}

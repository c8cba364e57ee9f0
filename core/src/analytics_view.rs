//! Analytics & model insights.
//!
//! Model metrics are static display scalars. The only derived value is
//! the drift alert: raised when the most recent AUC is strictly below
//! the configured threshold.

use crate::{
    config::AnalyticsConfig,
    dataset::{CohortStat, Dataset, DriftPoint, ImpactFeature},
    router::Page,
    view::{Metric, Notice},
};
use serde::{Deserialize, Serialize};

const MODEL_METRICS: &[(&str, &str)] = &[
    ("AUC",          "0.82"),
    ("Gini",         "0.64"),
    ("KS Statistic", "0.48"),
];

pub const DRIFT_ALERT: &str = "Significant model drift detected. Consider retraining.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsView {
    pub title:         String,
    pub model_metrics: Vec<Metric>,
    pub impact:        Vec<ImpactFeature>,
    pub cohorts:       Vec<CohortStat>,
    pub drift:         Vec<DriftPoint>,
    pub drift_alert:   Option<Notice>,
    pub notices:       Vec<Notice>,
}

/// Alert iff the last point's AUC < `threshold`. Empty series: no alert.
pub fn drift_alert(drift: &[DriftPoint], threshold: f64) -> Option<Notice> {
    let latest = drift.last()?;
    if latest.auc < threshold {
        log::debug!("drift alert: auc={:.2} < {threshold:.2} on {}", latest.auc, latest.date);
        Some(Notice::error(DRIFT_ALERT))
    } else {
        None
    }
}

pub fn build(data: &Dataset, cfg: &AnalyticsConfig) -> AnalyticsView {
    AnalyticsView {
        title:         Page::Analytics.title().to_string(),
        model_metrics: MODEL_METRICS
            .iter()
            .map(|(label, value)| Metric::new(label, value))
            .collect(),
        impact:        data.impact.clone(),
        cohorts:       data.cohorts.clone(),
        drift:         data.drift.clone(),
        drift_alert:   drift_alert(&data.drift, cfg.drift_auc_threshold),
        notices:       vec![
            Notice::error("Model drift detected in 'Digital Footprint' feature."),
            Notice::success("BNPL model retrained successfully last week."),
        ],
    }
}

//! Dashboard: executive overview.
//!
//! Passthrough of the headline metrics, trend series, quarterly product
//! volumes and the incident monitoring table.

use crate::{
    dataset::{Dataset, ProductPeriodMetric, TrendPoint},
    router::Page,
    view::{cold_start_notice, Metric, Notice},
};
use serde::{Deserialize, Serialize};

const HEADLINE_METRICS: &[(&str, &str)] = &[
    ("Total Applications",   "12,280"),
    ("Approval Rate",        "76%"),
    ("Avg. Processing Time", "180 ms"),
    ("Avg. Risk Score",      "620"),
];

pub const INCIDENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub title:           String,
    pub metrics:         Vec<Metric>,
    pub trend:           Vec<TrendPoint>,
    pub product_volumes: Vec<ProductPeriodMetric>,
    pub incidents:       Vec<IncidentRow>,
    pub notices:         Vec<Notice>,
}

/// Display row for the incident monitoring table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentRow {
    pub time:     String,
    pub incident: String,
    pub resolved: String,
}

pub fn build(data: &Dataset) -> DashboardView {
    DashboardView {
        title:           Page::Dashboard.title().to_string(),
        metrics:         HEADLINE_METRICS
            .iter()
            .map(|(label, value)| Metric::new(label, value))
            .collect(),
        trend:           data.trend.clone(),
        product_volumes: data.product_metrics.clone(),
        incidents:       data
            .incidents
            .iter()
            .map(|i| IncidentRow {
                time:     i.timestamp.format(INCIDENT_TIME_FORMAT).to_string(),
                incident: i.incident_type.clone(),
                resolved: if i.resolved { "Yes" } else { "No" }.to_string(),
            })
            .collect(),
        notices:         vec![cold_start_notice()],
    }
}

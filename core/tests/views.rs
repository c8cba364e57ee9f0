//! Page view builders against generated data.

use chrono::NaiveDate;
use scoring_core::{
    analytics_view::{self, DRIFT_ALERT},
    applications_view,
    config::{AnalyticsConfig, DeskConfig},
    dashboard_view,
    dataset::{generate, DriftPoint},
    router::Page,
    session::Session,
    view::{NoticeLevel, ViewModel},
};

fn with_last_auc(auc: f64) -> scoring_core::dataset::Dataset {
    let mut data = generate(9);
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    data.drift.push(DriftPoint { date, auc, ks: 0.30 });
    data
}

#[test]
fn analytics_alerts_on_drift_below_threshold() {
    let view = analytics_view::build(&with_last_auc(0.68), &AnalyticsConfig::default());
    let alert = view.drift_alert.expect("drift alert");
    assert_eq!(alert.level, NoticeLevel::Error);
    assert_eq!(alert.message, DRIFT_ALERT);
}

#[test]
fn analytics_quiet_above_threshold() {
    let view = analytics_view::build(&with_last_auc(0.75), &AnalyticsConfig::default());
    assert!(view.drift_alert.is_none());
}

#[test]
fn default_drift_curve_triggers_alert() {
    let mut s = Session::new(1, DeskConfig::default());
    s.select_page(Page::Analytics);
    let ViewModel::Analytics(view) = s.render() else { panic!("expected analytics view") };
    assert!(view.drift_alert.is_some());
    assert_eq!(view.model_metrics.len(), 3);
    assert_eq!(view.impact.len(), 4);
    assert_eq!(view.cohorts[2].default_rate, 0.20);
}

#[test]
fn threshold_comes_from_config() {
    let cfg = AnalyticsConfig { drift_auc_threshold: 0.60 };
    let view = analytics_view::build(&generate(1), &cfg);
    assert!(view.drift_alert.is_none());
}

#[test]
fn cold_start_notice_only_on_dashboard_and_applications() {
    let data = generate(2);
    let dash = dashboard_view::build(&data);
    let apps = applications_view::build(&data, None);
    assert!(dash.notices.iter().any(|n| n.message.starts_with("Cold Start")));
    assert!(apps.notices.iter().any(|n| n.message.starts_with("Cold Start")));

    let analytics = analytics_view::build(&data, &AnalyticsConfig::default());
    assert!(analytics.notices.iter().all(|n| !n.message.starts_with("Cold Start")));
}

#[test]
fn applications_view_lists_identity_overlays() {
    let view = applications_view::build(&generate(2), Some("USR1003"));
    assert_eq!(view.overlays.len(), 3);
    assert_eq!(view.detail.map(|r| r.id), Some("USR1003".to_string()));
}

#[test]
fn view_model_serializes_with_page_tag() {
    let s = Session::new(3, DeskConfig::default());
    let json = serde_json::to_value(s.render()).expect("serialize view");
    assert_eq!(json["page"], "dashboard");
    assert_eq!(json["title"], "Executive Overview");
    assert_eq!(json["metrics"][0]["label"], "Total Applications");
}

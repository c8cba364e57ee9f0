//! View models: the contract with the presentation layer.
//!
//! RULE: View builders are pure. They read the dataset and form state,
//! and return plain data. No rendering concerns live here.

use crate::{
    analytics_view::AnalyticsView,
    applications_view::ApplicationsView,
    dashboard_view::DashboardView,
    product_config_view::ProductConfigView,
    router::Page,
    rule_builder_view::RuleBuilderView,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum ViewModel {
    Dashboard(DashboardView),
    RuleBuilder(RuleBuilderView),
    Applications(ApplicationsView),
    ProductConfig(ProductConfigView),
    Analytics(AnalyticsView),
}

impl ViewModel {
    pub fn page(&self) -> Page {
        match self {
            Self::Dashboard(_)     => Page::Dashboard,
            Self::RuleBuilder(_)   => Page::RuleBuilder,
            Self::Applications(_)  => Page::Applications,
            Self::ProductConfig(_) => Page::ProductConfig,
            Self::Analytics(_)     => Page::Analytics,
        }
    }

    pub fn notices(&self) -> &[Notice] {
        match self {
            Self::Dashboard(v)     => &v.notices,
            Self::RuleBuilder(v)   => &v.notices,
            Self::Applications(v)  => &v.notices,
            Self::ProductConfig(v) => &v.notices,
            Self::Analytics(v)     => &v.notices,
        }
    }

    pub(crate) fn notices_mut(&mut self) -> &mut Vec<Notice> {
        match self {
            Self::Dashboard(v)     => &mut v.notices,
            Self::RuleBuilder(v)   => &mut v.notices,
            Self::Applications(v)  => &mut v.notices,
            Self::ProductConfig(v) => &mut v.notices,
            Self::Analytics(v)     => &mut v.notices,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub level:   NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// A labelled display scalar. Values are preformatted strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: &str, value: &str) -> Self {
        Self { label: label.to_string(), value: value.to_string() }
    }
}

/// Sidebar notice shown on pages that serve thin-file applicants.
pub fn cold_start_notice() -> Notice {
    Notice::info(
        "Cold Start & Thin-File Users: fallback logic active for users with limited \
         credit data. Using: Telco Metadata, Device Fingerprint, Behavioral Analytics",
    )
}

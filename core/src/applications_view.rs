//! Applications monitor: full table, one selected record, CSV export.

use crate::{
    application_lookup::{export_csv, find_by_id, CSV_CONTENT_TYPE, CSV_FILE_NAME},
    dataset::{ApplicationRecord, Dataset},
    router::Page,
    types::ApplicationId,
    view::{cold_start_notice, Notice},
};
use serde::{Deserialize, Serialize};

const IDENTITY_OVERLAYS: &[&str] = &[
    "Device Fingerprint: Checked",
    "Geolocation match: Confirmed",
    "Behavioral anomaly: None detected",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationsView {
    pub title:        String,
    pub applications: Vec<ApplicationRecord>,
    pub selected_id:  Option<ApplicationId>,
    pub detail:       Option<ApplicationRecord>,
    /// Set when the selected id is not in the table.
    pub error:        Option<String>,
    pub overlays:     Vec<String>,
    pub export:       ExportAction,
    pub notices:      Vec<Notice>,
}

/// What the "Export as CSV" button hands to the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportAction {
    pub file_name:    String,
    pub content_type: String,
}

/// `selected` of None picks the first row, as the dropdown does.
pub fn build(data: &Dataset, selected: Option<&str>) -> ApplicationsView {
    let selected_id = selected
        .map(str::to_string)
        .or_else(|| data.applications.first().map(|r| r.id.clone()));

    let (detail, error) = match selected_id.as_deref() {
        None => (None, None),
        Some(id) => match find_by_id(&data.applications, id) {
            Ok(record) => (Some(record.clone()), None),
            Err(e) => (None, Some(e.to_string())),
        },
    };

    let mut notices = vec![cold_start_notice()];
    if let Some(message) = &error {
        notices.push(Notice::error(message.clone()));
    }

    ApplicationsView {
        title: Page::Applications.title().to_string(),
        applications: data.applications.clone(),
        selected_id,
        detail,
        error,
        overlays: IDENTITY_OVERLAYS.iter().map(|s| s.to_string()).collect(),
        export: ExportAction {
            file_name:    CSV_FILE_NAME.to_string(),
            content_type: CSV_CONTENT_TYPE.to_string(),
        },
        notices,
    }
}

/// Body for the export action.
pub fn export_body(data: &Dataset) -> String {
    export_csv(&data.applications)
}

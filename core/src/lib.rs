//! Credit-scoring desk core: synthetic data, page routing, view builders,
//! and the applications lookup/export.
//!
//! Data flow: dataset -> session (router + forms) -> page view builder ->
//! view model. Rendering belongs to whoever consumes the view model.

pub mod application_lookup;
pub mod command;
pub mod config;
pub mod dataset;
pub mod error;
pub mod form;
pub mod rng;
pub mod router;
pub mod session;
pub mod types;
pub mod view;

pub mod analytics_view;
pub mod applications_view;
pub mod dashboard_view;
pub mod product_config_view;
pub mod rule_builder_view;

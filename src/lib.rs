//! health-portal
//!
//! Non-UI core of the digital health record portal for migrant workers:
//! dictionary-based translation of UI labels, and filtering and aggregation
//! over worker, alert, facility and article records.

pub mod config;
pub mod dataset;
pub mod i18n;
pub mod records;
pub mod session;
pub mod types;

/// Shared test fixtures.
mod test_utils;

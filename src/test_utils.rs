//! Fixtures shared by the unit tests.
#![cfg(test)]

use chrono::NaiveDate;

use crate::dataset::{
    Dataset,
    MigrantWorker,
};

/// The date tests use as "today".
///
/// Rajesh Kumar's arrival (2024-01-15) is exactly 30 days earlier.
pub(crate) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 14).unwrap_or_default()
}

/// The bundled sample records.
pub(crate) fn sample_dataset() -> Dataset {
    Dataset::builtin().unwrap_or_default()
}

/// The eight bundled workers, in registration order.
pub(crate) fn sample_workers() -> Vec<MigrantWorker> {
    sample_dataset().workers
}

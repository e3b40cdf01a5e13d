//! Generic filtering and aggregation over collections of records.
//!
//! Records expose their fields by name through [`Record`]; a [`CriteriaSet`]
//! combines a free-text search, exact-match selections and date periods.

/// Grouping and counting.
mod aggregate;
/// Criteria types.
mod criteria;
/// Applying criteria.
mod filter;
/// Field access by name.
mod record;

pub use aggregate::{
    CategoryStats,
    StatusCount,
    aggregate_by_category,
    distinct_values,
};
pub use criteria::{
    ALL,
    CriteriaSet,
    DateCriterion,
    DatePeriod,
    FieldCriterion,
    Search,
    Selection,
};
pub use filter::{
    days_since,
    filter_records,
    filter_records_today,
    matches,
};
pub use record::Record;

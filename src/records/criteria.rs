//! Filter criteria: per-dimension selections with an "all" sentinel, a
//! free-text search, and date periods.

use std::fmt;

/// The sentinel selection value meaning "no constraint".
pub const ALL: &str = "all";

/// A dropdown selection for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parses a selection value; [`ALL`] is the unconstrained sentinel.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL { Self::All } else { Self::Only(value.to_string()) }
    }

    #[must_use]
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Exact comparison. A missing value only satisfies [`Selection::All`].
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => value == Some(expected.as_str()),
        }
    }

    /// The value as shown in a selector, [`ALL`] for the sentinel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arrival period buckets offered by the worker dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatePeriod {
    #[default]
    All,
    Last30Days,
    Last90Days,
    Last180Days,
    /// More than 180 days ago.
    Older,
}

impl DatePeriod {
    /// Selector options in display order.
    pub const ALL_PERIODS: &'static [Self] =
        &[Self::All, Self::Last30Days, Self::Last90Days, Self::Last180Days, Self::Older];

    /// Selector value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Last30Days => "last30",
            Self::Last90Days => "last90",
            Self::Last180Days => "last180",
            Self::Older => "older",
        }
    }

    /// Parses a selector value. Unknown values leave the dimension unconstrained.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL_PERIODS.iter().copied().find(|period| period.key() == key).unwrap_or_else(|| {
            tracing::debug!("Unknown date period '{key}', treating as unconstrained");
            Self::All
        })
    }

    /// Display label, also the translation key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Periods",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::Last180Days => "Last 6 months",
            Self::Older => "Older than 6 months",
        }
    }

    /// Whether a date `days_ago` whole days in the past falls in this period.
    ///
    /// Bounded periods are inclusive; future dates count as recent.
    #[must_use]
    pub const fn contains(self, days_ago: i64) -> bool {
        match self {
            Self::All => true,
            Self::Last30Days => days_ago <= 30,
            Self::Last90Days => days_ago <= 90,
            Self::Last180Days => days_ago <= 180,
            Self::Older => days_ago > 180,
        }
    }
}

/// Case-insensitive substring search over several fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Search {
    pub query: String,
    pub fields: Vec<String>,
}

/// Exact-match constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCriterion {
    pub field: String,
    pub selection: Selection,
}

/// Period constraint on one date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCriterion {
    pub field: String,
    pub period: DatePeriod,
}

/// Independent constraints applied together.
///
/// A record passes when the search matches any of its fields and every field
/// and date criterion holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriteriaSet {
    /// Free-text search, if the view has a search box.
    search: Option<Search>,
    /// Exact-match dimensions in the order they were added.
    fields: Vec<FieldCriterion>,
    /// Date dimensions in the order they were added.
    dates: Vec<DateCriterion>,
}

impl CriteriaSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a search over `fields`, replacing any previous search.
    #[must_use]
    pub fn with_search<I, S>(mut self, query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = Some(Search {
            query: query.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: &str, selection: impl Into<Selection>) -> Self {
        self.select(field, selection);
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, field: &str, period: DatePeriod) -> Self {
        self.set_period(field, period);
        self
    }

    /// Updates the search text, keeping its fields. Does nothing without a search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if let Some(search) = &mut self.search {
            search.query = query.into();
        }
    }

    /// Sets the selection of a dimension, adding the dimension if needed.
    pub fn select(&mut self, field: &str, selection: impl Into<Selection>) {
        let selection = selection.into();
        match self.fields.iter_mut().find(|criterion| criterion.field == field) {
            Some(criterion) => criterion.selection = selection,
            None => self.fields.push(FieldCriterion { field: field.to_string(), selection }),
        }
    }

    /// Sets the period of a date dimension, adding the dimension if needed.
    pub fn set_period(&mut self, field: &str, period: DatePeriod) {
        match self.dates.iter_mut().find(|criterion| criterion.field == field) {
            Some(criterion) => criterion.period = period,
            None => self.dates.push(DateCriterion { field: field.to_string(), period }),
        }
    }

    /// Resets every dimension to its unconstrained value.
    pub fn clear(&mut self) {
        if let Some(search) = &mut self.search {
            search.query.clear();
        }
        for criterion in &mut self.fields {
            criterion.selection = Selection::All;
        }
        for criterion in &mut self.dates {
            criterion.period = DatePeriod::All;
        }
    }

    /// True when no dimension narrows the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search.as_ref().is_none_or(|search| search.query.is_empty())
            && self.fields.iter().all(|criterion| criterion.selection.is_all())
            && self.dates.iter().all(|criterion| criterion.period == DatePeriod::All)
    }

    #[must_use]
    pub const fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    #[must_use]
    pub fn field_criteria(&self) -> &[FieldCriterion] {
        &self.fields
    }

    #[must_use]
    pub fn date_criteria(&self) -> &[DateCriterion] {
        &self.dates
    }
}

//! Grouping records by a category field.

use std::cmp::Reverse;
use std::collections::{
    BTreeSet,
    HashMap,
};

use serde::Serialize;

use super::record::Record;

/// Records with one status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Totals for one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,
    pub total: usize,
    /// Per status, in order of first appearance.
    pub counts_by_status: Vec<StatusCount>,
}

impl CategoryStats {
    /// An empty group for `category`.
    const fn new(category: String) -> Self {
        Self { category, total: 0, counts_by_status: Vec::new() }
    }

    /// Records with `status`, 0 when none were seen.
    #[must_use]
    pub fn count(&self, status: &str) -> usize {
        self.counts_by_status
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }

    /// Counts one record of the group, with its status if it has one.
    fn record_status(&mut self, status: Option<&str>) {
        self.total += 1;
        let Some(status) = status else {
            return;
        };
        match self.counts_by_status.iter_mut().find(|entry| entry.status == status) {
            Some(entry) => entry.count += 1,
            None => self.counts_by_status.push(StatusCount { status: status.to_string(), count: 1 }),
        }
    }
}

/// Groups records by `category_field` and counts `status_field` values per group.
///
/// Groups are ordered by descending total; equal totals keep the order in
/// which their category first appeared. Records without the category field
/// are left out. Records without the status field count toward `total` only.
#[must_use]
pub fn aggregate_by_category<'a, R, I>(
    records: I,
    category_field: &str,
    status_field: &str,
) -> Vec<CategoryStats>
where
    R: Record + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut groups: Vec<CategoryStats> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(category) = record.field(category_field) else {
            tracing::trace!(category_field, "Record has no category, skipping");
            continue;
        };

        let position = match positions.get(&*category) {
            Some(&position) => position,
            None => {
                let category = category.into_owned();
                positions.insert(category.clone(), groups.len());
                groups.push(CategoryStats::new(category));
                groups.len() - 1
            }
        };

        if let Some(group) = groups.get_mut(position) {
            group.record_status(record.field(status_field).as_deref());
        }
    }

    groups.sort_by_key(|group| Reverse(group.total));
    groups
}

/// Distinct values of `field`, sorted. Feeds the options of a selector.
#[must_use]
pub fn distinct_values<'a, R, I>(records: I, field: &str) -> Vec<String>
where
    R: Record + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter_map(|record| record.field(field).map(std::borrow::Cow::into_owned))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

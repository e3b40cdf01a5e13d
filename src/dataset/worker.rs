//! Migrant worker health records and the worker dashboard filters.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use crate::records::{
    CategoryStats,
    CriteriaSet,
    DatePeriod,
    Record,
    Selection,
    aggregate_by_category,
    filter_records,
};
use crate::types::{
    Gender,
    HealthStatus,
    VaccinationStatus,
};

/// A registered migrant worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrantWorker {
    pub id: String,
    pub name: String,
    pub health_id: String,
    pub origin_state: String,
    pub origin_district: String,
    pub kerala_district: String,
    /// As recorded; a value that is not a date never falls in an arrival period.
    pub arrival_date: String,
    pub health_status: HealthStatus,
    pub occupation: String,
    pub employer: String,
    pub last_checkup: String,
    pub vaccination_status: VaccinationStatus,
    pub age: u32,
    pub gender: Gender,
    pub blood_type: String,
    pub emergency_contact: String,
}

impl MigrantWorker {
    pub const ID: &'static str = "id";
    pub const NAME: &'static str = "name";
    pub const HEALTH_ID: &'static str = "healthId";
    pub const ORIGIN_STATE: &'static str = "originState";
    pub const ORIGIN_DISTRICT: &'static str = "originDistrict";
    pub const KERALA_DISTRICT: &'static str = "keralaDistrict";
    pub const ARRIVAL_DATE: &'static str = "arrivalDate";
    pub const HEALTH_STATUS: &'static str = "healthStatus";
    pub const OCCUPATION: &'static str = "occupation";
    pub const EMPLOYER: &'static str = "employer";
    pub const LAST_CHECKUP: &'static str = "lastCheckup";
    pub const VACCINATION_STATUS: &'static str = "vaccinationStatus";
    pub const AGE: &'static str = "age";
    pub const GENDER: &'static str = "gender";
    pub const BLOOD_TYPE: &'static str = "bloodType";
    pub const EMERGENCY_CONTACT: &'static str = "emergencyContact";
}

impl Record for MigrantWorker {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            Self::ID => Cow::Borrowed(self.id.as_str()),
            Self::NAME => Cow::Borrowed(self.name.as_str()),
            Self::HEALTH_ID => Cow::Borrowed(self.health_id.as_str()),
            Self::ORIGIN_STATE => Cow::Borrowed(self.origin_state.as_str()),
            Self::ORIGIN_DISTRICT => Cow::Borrowed(self.origin_district.as_str()),
            Self::KERALA_DISTRICT => Cow::Borrowed(self.kerala_district.as_str()),
            Self::ARRIVAL_DATE => Cow::Borrowed(self.arrival_date.as_str()),
            Self::HEALTH_STATUS => Cow::Borrowed(self.health_status.label()),
            Self::OCCUPATION => Cow::Borrowed(self.occupation.as_str()),
            Self::EMPLOYER => Cow::Borrowed(self.employer.as_str()),
            Self::LAST_CHECKUP => Cow::Borrowed(self.last_checkup.as_str()),
            Self::VACCINATION_STATUS => Cow::Borrowed(self.vaccination_status.label()),
            Self::AGE => Cow::Owned(self.age.to_string()),
            Self::GENDER => Cow::Borrowed(self.gender.label()),
            Self::BLOOD_TYPE => Cow::Borrowed(self.blood_type.as_str()),
            Self::EMERGENCY_CONTACT => Cow::Borrowed(self.emergency_contact.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

/// Selections of the worker dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkerFilters {
    /// Free text matched against name, health id and employer.
    pub search: String,
    pub origin_state: Selection,
    pub kerala_district: Selection,
    pub health_status: Selection,
    pub arrival_period: DatePeriod,
}

impl WorkerFilters {
    pub const SEARCH_FIELDS: &'static [&'static str] =
        &[MigrantWorker::NAME, MigrantWorker::HEALTH_ID, MigrantWorker::EMPLOYER];

    #[must_use]
    pub fn to_criteria(&self) -> CriteriaSet {
        CriteriaSet::new()
            .with_search(self.search.as_str(), Self::SEARCH_FIELDS.iter().copied())
            .with_field(MigrantWorker::ORIGIN_STATE, self.origin_state.clone())
            .with_field(MigrantWorker::KERALA_DISTRICT, self.kerala_district.clone())
            .with_field(MigrantWorker::HEALTH_STATUS, self.health_status.clone())
            .with_date_range(MigrantWorker::ARRIVAL_DATE, self.arrival_period)
    }

    /// Workers matching the selections, in input order.
    #[must_use]
    pub fn apply<'a>(&self, workers: &'a [MigrantWorker], today: NaiveDate) -> Vec<&'a MigrantWorker> {
        filter_records(workers, &self.to_criteria(), today)
    }

    /// Back to "all" for every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.to_criteria().is_unconstrained()
    }
}

/// Per origin state totals by health status, busiest state first.
#[must_use]
pub fn state_health_stats(workers: &[MigrantWorker]) -> Vec<CategoryStats> {
    aggregate_by_category(workers, MigrantWorker::ORIGIN_STATE, MigrantWorker::HEALTH_STATUS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{
        reference_date,
        sample_workers,
    };

    fn names<'a>(workers: &[&'a MigrantWorker]) -> Vec<&'a str> {
        workers.iter().map(|worker| worker.name.as_str()).collect()
    }

    #[googletest::test]
    fn worker_fields_by_name() {
        let workers = sample_workers();
        let rajesh = &workers[0];

        expect_that!(rajesh.field(MigrantWorker::NAME).as_deref(), some(eq("Rajesh Kumar")));
        expect_that!(rajesh.field(MigrantWorker::ARRIVAL_DATE).as_deref(), some(eq("2024-01-15")));
        expect_that!(rajesh.field(MigrantWorker::HEALTH_STATUS).as_deref(), some(eq("Good")));
        expect_that!(rajesh.field(MigrantWorker::AGE).as_deref(), some(eq("32")));
        expect_that!(rajesh.field("keralDistrict"), none());
    }

    #[rstest]
    #[case::lowercase("priya")]
    #[case::uppercase("PRIYA")]
    fn search_by_name(#[case] query: &str) {
        let workers = sample_workers();
        let filters = WorkerFilters { search: query.to_string(), ..WorkerFilters::default() };

        let filtered = filters.apply(&workers, reference_date());

        assert_eq!(names(&filtered), vec!["Priya Sharma"]);
    }

    #[rstest]
    #[case::health_id("001236", vec!["Mohammed Ali"])]
    #[case::employer("kerala", vec![
        "Priya Sharma",
        "Mohammed Ali",
        "Ravi Chandra",
        "Amit Singh",
        "Kavitha Reddy",
    ])]
    #[case::no_match("nobody", vec![])]
    fn search_by_health_id_and_employer(#[case] query: &str, #[case] expected: Vec<&str>) {
        let workers = sample_workers();
        let filters = WorkerFilters { search: query.to_string(), ..WorkerFilters::default() };

        assert_eq!(names(&filters.apply(&workers, reference_date())), expected);
    }

    #[rstest]
    fn combined_filters() {
        let workers = sample_workers();
        let filters = WorkerFilters {
            kerala_district: Selection::only("Ernakulam"),
            health_status: Selection::only("Good"),
            arrival_period: DatePeriod::Last30Days,
            ..WorkerFilters::default()
        };

        let filtered = filters.apply(&workers, reference_date());

        assert_eq!(names(&filtered), vec!["Rajesh Kumar"]);
    }

    #[rstest]
    fn older_arrivals() {
        let workers = sample_workers();
        let filters =
            WorkerFilters { arrival_period: DatePeriod::Older, ..WorkerFilters::default() };

        assert!(filters.apply(&workers, reference_date()).is_empty());
        let later = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(
            names(&filters.apply(&workers, later)),
            vec!["Lakshmi Devi", "Kavitha Reddy"]
        );
    }

    #[googletest::test]
    fn clear_restores_everything() {
        let workers = sample_workers();
        let mut filters = WorkerFilters {
            search: "amit".to_string(),
            origin_state: Selection::only("Delhi"),
            ..WorkerFilters::default()
        };
        expect_that!(filters.is_active(), eq(true));

        filters.clear();

        expect_that!(filters.is_active(), eq(false));
        expect_that!(filters.apply(&workers, reference_date()), len(eq(workers.len())));
    }

    #[rstest]
    fn stats_by_origin_state() {
        let workers = sample_workers();

        let stats = state_health_stats(&workers);

        assert_eq!(stats.len(), 8);
        assert!(stats.iter().all(|group| group.total == 1));
        assert_eq!(stats[0].category, "Uttar Pradesh");
        assert_eq!(stats[1].count(HealthStatus::AtRisk.label()), 1);
    }
}

//! Applying a [`CriteriaSet`] to records.

use chrono::{
    DateTime,
    NaiveDate,
};

use super::criteria::{
    CriteriaSet,
    DatePeriod,
    Search,
};
use super::record::Record;

/// Whether `record` satisfies every criterion in `criteria`.
///
/// `today` anchors date periods so results are reproducible.
#[must_use]
pub fn matches<R: Record + ?Sized>(record: &R, criteria: &CriteriaSet, today: NaiveDate) -> bool {
    if let Some(search) = criteria.search()
        && !matches_search(record, search)
    {
        return false;
    }

    let fields_match = criteria.field_criteria().iter().all(|criterion| {
        criterion.selection.is_all()
            || criterion.selection.matches(record.field(&criterion.field).as_deref())
    });
    if !fields_match {
        return false;
    }

    criteria.date_criteria().iter().all(|criterion| {
        if criterion.period == DatePeriod::All {
            return true;
        }
        record
            .field(&criterion.field)
            .and_then(|value| days_since(&value, today))
            .is_some_and(|days| criterion.period.contains(days))
    })
}

/// The records satisfying `criteria`, in input order.
///
/// Unconstrained criteria return every record; applying the same criteria to
/// the output again returns it unchanged.
#[must_use]
pub fn filter_records<'a, R, I>(records: I, criteria: &CriteriaSet, today: NaiveDate) -> Vec<&'a R>
where
    R: Record + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().filter(|record| matches(*record, criteria, today)).collect()
}

/// [`filter_records`] anchored at the host's local date.
#[must_use]
pub fn filter_records_today<'a, R, I>(records: I, criteria: &CriteriaSet) -> Vec<&'a R>
where
    R: Record + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    filter_records(records, criteria, chrono::Local::now().date_naive())
}

/// Whole calendar days from the date in `value` to `today`.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; negative for future dates.
#[must_use]
pub fn days_since(value: &str, today: NaiveDate) -> Option<i64> {
    parse_date(value).map(|date| (today - date).num_days())
}

/// A calendar date from `YYYY-MM-DD` or the date part of an RFC 3339 timestamp.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    value.parse::<NaiveDate>().ok().or_else(|| {
        DateTime::parse_from_rfc3339(value).ok().map(|timestamp| timestamp.date_naive())
    })
}

/// Case-insensitive substring match against any value of any searched field.
fn matches_search<R: Record + ?Sized>(record: &R, search: &Search) -> bool {
    if search.query.is_empty() {
        return true;
    }
    let query = search.query.to_lowercase();
    search.fields.iter().any(|field| {
        record.field_values(field).iter().any(|value| value.to_lowercase().contains(&query))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::{
        Value,
        json,
    };

    use super::*;

    const fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
    }

    fn people() -> Vec<Value> {
        vec![
            json!({"name": "Rajesh Kumar", "state": "Uttar Pradesh", "status": "Good", "arrived": "2024-01-15"}),
            json!({"name": "Priya Sharma", "state": "Rajasthan", "status": "At Risk", "arrived": "2023-12-20"}),
            json!({"name": "Mohammed Ali", "state": "West Bengal", "status": "Good", "arrived": "2023-08-01"}),
            json!({"name": "Lakshmi Devi", "state": "Tamil Nadu", "arrived": "not a date"}),
        ]
    }

    fn names(records: &[&Value]) -> Vec<String> {
        records.iter().map(|record| record["name"].as_str().unwrap_or_default().to_string()).collect()
    }

    #[rstest]
    fn unconstrained_criteria_keep_everything() {
        let records = people();
        let criteria = CriteriaSet::new()
            .with_search("", ["name"])
            .with_field("state", "all")
            .with_date_range("arrived", DatePeriod::All);

        let filtered = filter_records(&records, &criteria, today());

        assert_eq!(filtered.len(), records.len());
        assert!(filtered.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[rstest]
    #[case::lowercase("priya")]
    #[case::uppercase("PRIYA")]
    #[case::partial("sharm")]
    fn search_is_case_insensitive(#[case] query: &str) {
        let records = people();
        let criteria = CriteriaSet::new().with_search(query, ["name"]);

        let filtered = filter_records(&records, &criteria, today());

        assert_eq!(names(&filtered), vec!["Priya Sharma"]);
    }

    #[rstest]
    fn search_matches_any_field() {
        let records = people();
        let criteria = CriteriaSet::new().with_search("bengal", ["name", "state"]);

        let filtered = filter_records(&records, &criteria, today());

        assert_eq!(names(&filtered), vec!["Mohammed Ali"]);
    }

    #[rstest]
    #[case::one_element("vaccin", vec!["Community Health Center"])]
    #[case::name_or_element("health", vec!["Community Health Center", "Migrant Worker Health Post"])]
    #[case::no_element("dental", vec![])]
    fn search_reaches_list_elements(#[case] query: &str, #[case] expected: Vec<&str>) {
        let records = vec![
            json!({"name": "Government General Hospital", "services": ["Emergency", "Surgery"]}),
            json!({"name": "Community Health Center", "services": ["Primary Care", "Vaccinations"]}),
            json!({"name": "Migrant Worker Health Post", "services": ["Language Assistance"]}),
        ];
        let criteria = CriteriaSet::new().with_search(query, ["name", "services"]);

        assert_eq!(names(&filter_records(&records, &criteria, today())), expected);
    }

    #[rstest]
    fn search_without_fields_matches_nothing() {
        let records = people();
        let criteria = CriteriaSet::new().with_search("priya", Vec::<String>::new());

        assert!(filter_records(&records, &criteria, today()).is_empty());
    }

    #[rstest]
    fn field_criteria_are_conjunctive() {
        let records = people();
        let criteria =
            CriteriaSet::new().with_field("status", "Good").with_field("state", "West Bengal");

        let filtered = filter_records(&records, &criteria, today());

        assert_eq!(names(&filtered), vec!["Mohammed Ali"]);
    }

    #[rstest]
    fn missing_field_fails_constrained_criterion() {
        let records = people();
        let criteria = CriteriaSet::new().with_field("status", "Good");

        let filtered = filter_records(&records, &criteria, today());

        assert_eq!(names(&filtered), vec!["Rajesh Kumar", "Mohammed Ali"]);
    }

    #[rstest]
    #[case::last_30(DatePeriod::Last30Days, vec!["Rajesh Kumar"])]
    #[case::last_90(DatePeriod::Last90Days, vec!["Rajesh Kumar", "Priya Sharma"])]
    #[case::last_180(DatePeriod::Last180Days, vec!["Rajesh Kumar", "Priya Sharma"])]
    #[case::older(DatePeriod::Older, vec!["Mohammed Ali"])]
    #[case::all(DatePeriod::All, vec!["Rajesh Kumar", "Priya Sharma", "Mohammed Ali", "Lakshmi Devi"])]
    fn date_periods(#[case] period: DatePeriod, #[case] expected: Vec<&str>) {
        let records = people();
        let criteria = CriteriaSet::new().with_date_range("arrived", period);

        let filtered = filter_records(&records, &criteria, today());

        assert_eq!(names(&filtered), expected);
    }

    #[rstest]
    #[case::exactly_30_days("2024-01-15", true)]
    #[case::day_31("2024-01-14", false)]
    #[case::future("2024-03-01", true)]
    fn last_30_boundary(#[case] arrived: &str, #[case] expected: bool) {
        let record = json!({"arrived": arrived});
        let criteria = CriteriaSet::new().with_date_range("arrived", DatePeriod::Last30Days);

        assert_eq!(matches(&record, &criteria, today()), expected);
    }

    #[rstest]
    fn filtering_is_idempotent() {
        let records = people();
        let criteria = CriteriaSet::new()
            .with_search("a", ["name"])
            .with_date_range("arrived", DatePeriod::Last180Days);

        let once = filter_records(&records, &criteria, today());
        let twice = filter_records(once.iter().copied(), &criteria, today());

        assert_eq!(names(&once), names(&twice));
    }

    #[googletest::test]
    fn days_since_formats() {
        expect_that!(days_since("2024-02-04", today()), some(eq(10)));
        expect_that!(days_since(" 2024-02-14 ", today()), some(eq(0)));
        expect_that!(days_since("2024-02-13T23:30:00+05:30", today()), some(eq(1)));
        expect_that!(days_since("2024-02-20", today()), some(eq(-6)));
        expect_that!(days_since("14/02/2024", today()), none());
    }
}

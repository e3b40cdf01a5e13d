//! Disease outbreak alerts inside Kerala and in the workers' home states.

use std::borrow::Cow;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use crate::records::{
    CriteriaSet,
    Record,
    Selection,
    filter_records,
};
use crate::types::{
    AlertLevel,
    Trend,
};

/// What every outbreak alert reports, wherever it was raised.
pub trait DiseaseAlert {
    /// The district or state the alert was raised for.
    fn region(&self) -> &str;
    /// Cases reported so far.
    fn cases_reported(&self) -> u32;
    fn severity(&self) -> AlertLevel;
    /// Direction of the case count since the previous report.
    fn trend(&self) -> Trend;

    /// Risk to migrants travelling from the region, for alerts that rate it.
    fn risk_to_migrants(&self) -> Option<AlertLevel> {
        None
    }
}

/// An outbreak reported in a Kerala district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDiseaseAlert {
    pub district: String,
    pub disease_name: String,
    pub cases_reported: u32,
    pub severity: AlertLevel,
    pub last_updated: String,
    pub trend: Trend,
    #[serde(default)]
    pub affected_areas: Vec<String>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
}

impl DistrictDiseaseAlert {
    pub const DISTRICT: &'static str = "district";
    pub const DISEASE_NAME: &'static str = "diseaseName";
    pub const CASES_REPORTED: &'static str = "casesReported";
    pub const SEVERITY: &'static str = "severity";
    pub const LAST_UPDATED: &'static str = "lastUpdated";
    pub const TREND: &'static str = "trend";
}

impl Record for DistrictDiseaseAlert {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            Self::DISTRICT => Cow::Borrowed(self.district.as_str()),
            Self::DISEASE_NAME => Cow::Borrowed(self.disease_name.as_str()),
            Self::CASES_REPORTED => Cow::Owned(self.cases_reported.to_string()),
            Self::SEVERITY => Cow::Borrowed(self.severity.label()),
            Self::LAST_UPDATED => Cow::Borrowed(self.last_updated.as_str()),
            Self::TREND => Cow::Borrowed(self.trend.label()),
            _ => return None,
        };
        Some(value)
    }
}

impl DiseaseAlert for DistrictDiseaseAlert {
    fn region(&self) -> &str {
        &self.district
    }

    fn cases_reported(&self) -> u32 {
        self.cases_reported
    }

    fn severity(&self) -> AlertLevel {
        self.severity
    }

    fn trend(&self) -> Trend {
        self.trend
    }
}

/// An outbreak in another state, rated by the risk it carries for migrants
/// travelling from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterStateDiseaseAlert {
    pub state: String,
    pub disease_name: String,
    pub cases_reported: u32,
    pub severity: AlertLevel,
    pub last_updated: String,
    pub trend: Trend,
    #[serde(default)]
    pub affected_districts: Vec<String>,
    pub risk_to_migrants: AlertLevel,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
}

impl InterStateDiseaseAlert {
    pub const STATE: &'static str = "state";
    pub const DISEASE_NAME: &'static str = "diseaseName";
    pub const CASES_REPORTED: &'static str = "casesReported";
    pub const SEVERITY: &'static str = "severity";
    pub const LAST_UPDATED: &'static str = "lastUpdated";
    pub const TREND: &'static str = "trend";
    pub const RISK_TO_MIGRANTS: &'static str = "riskToMigrants";
}

impl Record for InterStateDiseaseAlert {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            Self::STATE => Cow::Borrowed(self.state.as_str()),
            Self::DISEASE_NAME => Cow::Borrowed(self.disease_name.as_str()),
            Self::CASES_REPORTED => Cow::Owned(self.cases_reported.to_string()),
            Self::SEVERITY => Cow::Borrowed(self.severity.label()),
            Self::LAST_UPDATED => Cow::Borrowed(self.last_updated.as_str()),
            Self::TREND => Cow::Borrowed(self.trend.label()),
            Self::RISK_TO_MIGRANTS => Cow::Borrowed(self.risk_to_migrants.label()),
            _ => return None,
        };
        Some(value)
    }
}

impl DiseaseAlert for InterStateDiseaseAlert {
    fn region(&self) -> &str {
        &self.state
    }

    fn cases_reported(&self) -> u32 {
        self.cases_reported
    }

    fn severity(&self) -> AlertLevel {
        self.severity
    }

    fn trend(&self) -> Trend {
        self.trend
    }

    fn risk_to_migrants(&self) -> Option<AlertLevel> {
        Some(self.risk_to_migrants)
    }
}

/// Selections of the inter-state alert view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertFilters {
    pub state: Selection,
    pub severity: Selection,
    pub risk_level: Selection,
}

impl AlertFilters {
    #[must_use]
    pub fn to_criteria(&self) -> CriteriaSet {
        CriteriaSet::new()
            .with_field(InterStateDiseaseAlert::STATE, self.state.clone())
            .with_field(InterStateDiseaseAlert::SEVERITY, self.severity.clone())
            .with_field(InterStateDiseaseAlert::RISK_TO_MIGRANTS, self.risk_level.clone())
    }

    /// Alerts matching the selections, in input order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        alerts: &'a [InterStateDiseaseAlert],
        today: NaiveDate,
    ) -> Vec<&'a InterStateDiseaseAlert> {
        filter_records(alerts, &self.to_criteria(), today)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Headline counts shown above an alert list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total_alerts: usize,
    pub critical_severity: usize,
    pub high_severity: usize,
    pub increasing: usize,
    /// High or critical risk to migrants. Always 0 for district alerts.
    pub elevated_risk: usize,
    pub critical_risk: usize,
    pub total_cases: u64,
    /// Distinct districts or states with an alert.
    pub regions: usize,
}

impl AlertSummary {
    #[must_use]
    pub fn from_alerts<'a, A, I>(alerts: I) -> Self
    where
        A: DiseaseAlert + 'a,
        I: IntoIterator<Item = &'a A>,
    {
        let mut summary = Self::default();
        let mut regions = HashSet::new();

        for alert in alerts {
            summary.total_alerts += 1;
            summary.total_cases += u64::from(alert.cases_reported());
            regions.insert(alert.region());
            match alert.severity() {
                AlertLevel::Critical => summary.critical_severity += 1,
                AlertLevel::High => summary.high_severity += 1,
                AlertLevel::Low | AlertLevel::Medium => {}
            }
            if alert.trend() == Trend::Increasing {
                summary.increasing += 1;
            }
            if let Some(risk) = alert.risk_to_migrants() {
                if risk.is_elevated() {
                    summary.elevated_risk += 1;
                }
                if risk == AlertLevel::Critical {
                    summary.critical_risk += 1;
                }
            }
        }

        summary.regions = regions.len();
        summary
    }
}

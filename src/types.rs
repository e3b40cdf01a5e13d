//! Core types used throughout the project.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Declares a closed set of display labels that round-trip through serde
/// using the same text the dashboards show.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The label used in records and as a translation key.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Parses a label, matching exactly.
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum! {
    /// Health status recorded for a migrant worker.
    HealthStatus {
        Good => "Good",
        AtRisk => "At Risk",
        UnderTreatment => "Under Treatment",
        Critical => "Critical",
    }
}

labelled_enum! {
    VaccinationStatus {
        Complete => "Complete",
        Partial => "Partial",
        None => "None",
    }
}

labelled_enum! {
    Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

labelled_enum! {
    /// Severity of an outbreak, also used for the risk it poses to migrants.
    AlertLevel {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

labelled_enum! {
    Trend {
        Increasing => "Increasing",
        Stable => "Stable",
        Decreasing => "Decreasing",
    }
}

labelled_enum! {
    /// Kind of care a health facility offers, as chosen in the facility finder.
    FacilityType {
        Hospital => "hospital",
        Clinic => "clinic",
        Specialty => "specialty",
    }
}

labelled_enum! {
    /// Topic of an awareness article.
    ArticleCategory {
        Safety => "Safety",
        Insurance => "Insurance",
        Prevention => "Prevention",
        MentalHealth => "Mental Health",
        Vaccination => "Vaccination",
        Nutrition => "Nutrition",
    }
}

impl AlertLevel {
    /// High and Critical levels.
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::good(HealthStatus::Good, "Good")]
    #[case::at_risk(HealthStatus::AtRisk, "At Risk")]
    #[case::under_treatment(HealthStatus::UnderTreatment, "Under Treatment")]
    #[case::critical(HealthStatus::Critical, "Critical")]
    fn health_status_labels(#[case] status: HealthStatus, #[case] label: &str) {
        assert_that!(status.label(), eq(label));
        assert_that!(HealthStatus::from_label(label), some(eq(status)));
        assert_that!(status.to_string(), eq(label));
    }

    #[rstest]
    #[case::hospital(FacilityType::Hospital, "hospital")]
    #[case::specialty(FacilityType::Specialty, "specialty")]
    fn facility_type_labels(#[case] facility_type: FacilityType, #[case] label: &str) {
        assert_that!(facility_type.label(), eq(label));
        assert_that!(FacilityType::from_label(label), some(eq(facility_type)));
    }

    #[rstest]
    fn article_category_keeps_spaces() {
        let category: ArticleCategory = serde_json::from_str("\"Mental Health\"").unwrap();
        assert_that!(category, eq(ArticleCategory::MentalHealth));
        assert_that!(ArticleCategory::ALL.len(), eq(6));
    }

    #[rstest]
    fn from_label_is_case_sensitive() {
        assert_that!(HealthStatus::from_label("at risk"), none());
        assert_that!(Trend::from_label("Rising"), none());
    }

    #[rstest]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&HealthStatus::UnderTreatment).unwrap();
        assert_that!(json, eq("\"Under Treatment\""));

        let level: AlertLevel = serde_json::from_str("\"Critical\"").unwrap();
        assert_that!(level, eq(AlertLevel::Critical));
    }

    #[rstest]
    #[case(AlertLevel::Low, false)]
    #[case(AlertLevel::Medium, false)]
    #[case(AlertLevel::High, true)]
    #[case(AlertLevel::Critical, true)]
    fn alert_level_is_elevated(#[case] level: AlertLevel, #[case] expected: bool) {
        assert_that!(level.is_elevated(), eq(expected));
    }

    #[rstest]
    fn all_lists_variants_in_order() {
        assert_eq!(
            HealthStatus::ALL,
            &[
                HealthStatus::Good,
                HealthStatus::AtRisk,
                HealthStatus::UnderTreatment,
                HealthStatus::Critical
            ]
        );
    }
}

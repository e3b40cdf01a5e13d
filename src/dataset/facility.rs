//! Health facilities near the worker and the facility finder filters.

use std::borrow::Cow;

use serde::{
    Deserialize,
    Serialize,
};

use crate::records::{
    CriteriaSet,
    Record,
    Selection,
    filter_records_today,
};
use crate::types::FacilityType;

/// A hospital, clinic or specialty centre listed in the facility finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthFacility {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    /// Road distance as displayed, e.g. `0.8 km`.
    pub distance: String,
    pub rating: f64,
    #[serde(default)]
    pub services: Vec<String>,
    pub phone: String,
    pub address: String,
    pub wait_time: String,
    pub available: bool,
}

impl HealthFacility {
    pub const NAME: &'static str = "name";
    pub const TYPE: &'static str = "type";
    pub const DISTANCE: &'static str = "distance";
    pub const RATING: &'static str = "rating";
    pub const SERVICES: &'static str = "services";
    pub const ADDRESS: &'static str = "address";
    pub const WAIT_TIME: &'static str = "waitTime";
    pub const AVAILABLE: &'static str = "available";
}

impl Record for HealthFacility {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            Self::NAME => Cow::Borrowed(self.name.as_str()),
            Self::TYPE => Cow::Borrowed(self.facility_type.label()),
            Self::DISTANCE => Cow::Borrowed(self.distance.as_str()),
            Self::RATING => Cow::Owned(self.rating.to_string()),
            Self::ADDRESS => Cow::Borrowed(self.address.as_str()),
            Self::WAIT_TIME => Cow::Borrowed(self.wait_time.as_str()),
            Self::AVAILABLE => Cow::Owned(self.available.to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn field_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        if name == Self::SERVICES {
            return self.services.iter().map(|service| Cow::Borrowed(service.as_str())).collect();
        }
        self.field(name).into_iter().collect()
    }
}

/// Selections of the facility finder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacilityFilters {
    /// Free text matched against the name and every offered service.
    pub search: String,
    pub facility_type: Selection,
}

impl FacilityFilters {
    pub const SEARCH_FIELDS: &'static [&'static str] = &[HealthFacility::NAME, HealthFacility::SERVICES];

    #[must_use]
    pub fn to_criteria(&self) -> CriteriaSet {
        CriteriaSet::new()
            .with_search(self.search.as_str(), Self::SEARCH_FIELDS.iter().copied())
            .with_field(HealthFacility::TYPE, self.facility_type.clone())
    }

    /// Facilities matching the selections, in input order.
    #[must_use]
    pub fn apply<'a>(&self, facilities: &'a [HealthFacility]) -> Vec<&'a HealthFacility> {
        filter_records_today(facilities, &self.to_criteria())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

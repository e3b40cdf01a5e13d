//! The signed-in user and what each role may see.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::dataset::MigrantWorker;

/// Account kinds of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Government,
    Employer,
    Migrant,
}

impl Role {
    /// Sign-in choices in display order.
    pub const ALL: &'static [Self] = &[Self::Government, Self::Employer, Self::Migrant];

    /// Serialized name, also the `role` tag of [`UserProfile`].
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Employer => "employer",
            Self::Migrant => "migrant",
        }
    }

    /// Title of the sign-in card, also the translation key.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Government => "Government Dashboard",
            Self::Employer => "Employer Portal",
            Self::Migrant => "Migrant Worker Access",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The signed-in user. Each role carries only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum UserProfile {
    Government { name: String, organization: String, access_level: String },
    Employer { name: String, organization: String, access_level: String },
    Migrant { name: String, health_id: String },
}

impl UserProfile {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Government { .. } => Role::Government,
            Self::Employer { .. } => Role::Employer,
            Self::Migrant { .. } => Role::Migrant,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Government { name, .. } | Self::Employer { name, .. } | Self::Migrant { name, .. } => {
                name
            }
        }
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        match self {
            Self::Government { organization, .. } | Self::Employer { organization, .. } => {
                Some(organization)
            }
            Self::Migrant { .. } => None,
        }
    }

    /// Whether this user may open `worker`'s health record.
    #[must_use]
    pub fn can_view_worker(&self, worker: &MigrantWorker) -> bool {
        match self {
            Self::Government { .. } => true,
            Self::Employer { organization, .. } => worker.employer == *organization,
            Self::Migrant { health_id, .. } => worker.health_id == *health_id,
        }
    }

    /// The workers this user may see, in input order.
    #[must_use]
    pub fn visible_workers<'a>(&self, workers: &'a [MigrantWorker]) -> Vec<&'a MigrantWorker> {
        workers.iter().filter(|worker| self.can_view_worker(worker)).collect()
    }

    /// Dashboard sections available to this user, in menu order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Section::COMMON.to_vec();
        match self.role() {
            Role::Government => {
                sections.extend([Section::SdgDashboard, Section::EmployerDashboard]);
            }
            Role::Employer => sections.push(Section::EmployerDashboard),
            Role::Migrant => {}
        }
        sections
    }
}

/// Top-level portal sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Dashboard,
    HealthRecords,
    FindHealthcare,
    Emergency,
    MedicalAwareness,
    SdgDashboard,
    EmployerDashboard,
}

impl Section {
    /// Sections every role can open.
    pub const COMMON: &'static [Self] = &[
        Self::Dashboard,
        Self::HealthRecords,
        Self::FindHealthcare,
        Self::Emergency,
        Self::MedicalAwareness,
    ];

    /// Menu label, also the translation key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::HealthRecords => "Health Records",
            Self::FindHealthcare => "Find Healthcare",
            Self::Emergency => "Emergency",
            Self::MedicalAwareness => "Medical Awareness",
            Self::SdgDashboard => "SDG Dashboard",
            Self::EmployerDashboard => "Employer Dashboard",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

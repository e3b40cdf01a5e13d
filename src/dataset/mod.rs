//! Typed portal records: migrant workers, disease alerts, health facilities
//! and awareness articles.

/// Disease outbreak alerts.
mod alert;
/// Awareness articles.
mod article;
/// Health facilities.
mod facility;
/// Migrant worker records.
mod worker;

use std::path::{
    Path,
    PathBuf,
};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use alert::{
    AlertFilters,
    AlertSummary,
    DiseaseAlert,
    DistrictDiseaseAlert,
    InterStateDiseaseAlert,
};
pub use article::{
    Article,
    ArticleFilters,
    articles_per_category,
    featured_articles,
};
pub use facility::{
    FacilityFilters,
    HealthFacility,
};
pub use worker::{
    MigrantWorker,
    WorkerFilters,
    state_health_stats,
};

pub const WORKERS_FILE: &str = "workers.json";
pub const DISTRICT_ALERTS_FILE: &str = "district_alerts.json";
pub const INTERSTATE_ALERTS_FILE: &str = "interstate_alerts.json";
pub const FACILITIES_FILE: &str = "facilities.json";
pub const ARTICLES_FILE: &str = "articles.json";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Every record collection the dashboards work on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub workers: Vec<MigrantWorker>,
    pub district_alerts: Vec<DistrictDiseaseAlert>,
    pub interstate_alerts: Vec<InterStateDiseaseAlert>,
    pub facilities: Vec<HealthFacility>,
    pub articles: Vec<Article>,
}

impl Dataset {
    /// The bundled sample records.
    pub fn builtin() -> Result<Self, DatasetError> {
        Ok(Self {
            workers: parse(Path::new(WORKERS_FILE), include_str!("../../data/workers.json"))?,
            district_alerts: parse(
                Path::new(DISTRICT_ALERTS_FILE),
                include_str!("../../data/district_alerts.json"),
            )?,
            interstate_alerts: parse(
                Path::new(INTERSTATE_ALERTS_FILE),
                include_str!("../../data/interstate_alerts.json"),
            )?,
            facilities: parse(Path::new(FACILITIES_FILE), include_str!("../../data/facilities.json"))?,
            articles: parse(Path::new(ARTICLES_FILE), include_str!("../../data/articles.json"))?,
        })
    }

    /// Loads every data file from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, DatasetError> {
        tracing::debug!(dir = %dir.display(), "Loading dataset");
        let dataset = Self {
            workers: load(&dir.join(WORKERS_FILE))?,
            district_alerts: load(&dir.join(DISTRICT_ALERTS_FILE))?,
            interstate_alerts: load(&dir.join(INTERSTATE_ALERTS_FILE))?,
            facilities: load(&dir.join(FACILITIES_FILE))?,
            articles: load(&dir.join(ARTICLES_FILE))?,
        };
        tracing::debug!(
            workers = dataset.workers.len(),
            district_alerts = dataset.district_alerts.len(),
            interstate_alerts = dataset.interstate_alerts.len(),
            facilities = dataset.facilities.len(),
            articles = dataset.articles.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    #[must_use]
    pub fn find_worker(&self, health_id: &str) -> Option<&MigrantWorker> {
        self.workers.iter().find(|worker| worker.health_id == health_id)
    }
}

/// Reads and parses one data file.
fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })?;
    parse(path, &content)
}

/// Parses a JSON array of records, naming `path` on failure.
fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(content)
        .map_err(|source| DatasetError::Parse { path: path.to_path_buf(), source })
}

//! Reports translation coverage and dataset statistics for a portal workspace.

use std::path::PathBuf;
use std::process::ExitCode;

use health_portal::config::{
    ConfigError,
    ConfigManager,
};
use health_portal::dataset::{
    AlertSummary,
    Dataset,
    DatasetError,
    state_health_stats,
};
use health_portal::i18n::{
    Catalog,
    CatalogError,
    language_info,
    load_catalog,
};
use health_portal::types::HealthStatus;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Failures that end the report.
#[derive(Error, Debug)]
enum AppError {
    /// No workspace argument and no usable current directory.
    #[error("Cannot determine workspace directory: {0}")]
    Workspace(#[source] std::io::Error),

    /// Invalid or unreadable settings file.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid locale file patterns.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Missing or malformed data file.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the workspace given as the first argument and logs its reports.
fn run() -> Result<(), AppError> {
    let workspace_root = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => std::env::current_dir().map_err(AppError::Workspace)?,
    };
    tracing::info!(workspace = %workspace_root.display(), "Loading portal workspace");

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(workspace_root.clone()))?;
    let settings = config_manager.get_settings();

    let mut catalog = load_catalog(&workspace_root, settings)?;
    if catalog.base_table().is_empty() && catalog.languages().len() == 1 {
        tracing::info!("No locale files found, using bundled translations");
        catalog = Catalog::builtin();
    }
    report_coverage(&catalog, settings.required_languages.as_deref());

    let dataset = match config_manager.data_dir() {
        Some(dir) => Dataset::load_from_dir(&dir)?,
        None => Dataset::builtin()?,
    };
    report_dataset(&dataset);

    Ok(())
}

/// Logs translation coverage per language.
fn report_coverage(catalog: &Catalog, required_languages: Option<&[String]>) {
    let languages: Vec<&str> = required_languages.map_or_else(
        || catalog.languages().into_iter().skip(1).collect(),
        |required| required.iter().map(String::as_str).collect(),
    );

    for language in languages {
        let coverage = catalog.coverage(language);
        let name = language_info(language).map_or(language, |info| info.name);
        tracing::info!(
            language,
            "{name}: {}/{} phrases translated ({}%)",
            coverage.translated,
            coverage.total,
            coverage.percent()
        );
        let missing = catalog.missing_keys(language);
        if !missing.is_empty() {
            tracing::debug!(language, ?missing, "Untranslated phrases");
        }
    }
}

/// Logs per-state worker statistics and the alert summaries.
fn report_dataset(dataset: &Dataset) {
    tracing::info!(
        workers = dataset.workers.len(),
        district_alerts = dataset.district_alerts.len(),
        interstate_alerts = dataset.interstate_alerts.len(),
        facilities = dataset.facilities.len(),
        articles = dataset.articles.len(),
        "Dataset loaded"
    );

    for stats in state_health_stats(&dataset.workers) {
        tracing::info!(
            "{}: {} workers ({} good, {} at risk, {} under treatment)",
            stats.category,
            stats.total,
            stats.count(HealthStatus::Good.label()),
            stats.count(HealthStatus::AtRisk.label()),
            stats.count(HealthStatus::UnderTreatment.label()),
        );
    }

    log_summary("District", AlertSummary::from_alerts(&dataset.district_alerts));
    log_summary("Inter-state", AlertSummary::from_alerts(&dataset.interstate_alerts));
}

/// Logs one alert summary as JSON.
fn log_summary(scope: &str, summary: AlertSummary) {
    match serde_json::to_string(&summary) {
        Ok(json) => tracing::info!("{scope} alert summary: {json}"),
        Err(e) => tracing::warn!("Failed to serialize {scope} alert summary: {e}"),
    }
}

//! Locale file discovery and parsing.

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use serde_json::Value;
use thiserror::Error;

use super::catalog::Catalog;
use super::dictionary::Dictionary;
use super::language::detect_language_from_path;
use crate::config::{
    FileMatcher,
    MatcherError,
    PortalSettings,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read translation file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation file {} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Cannot detect the language of translation file {}", path.display())]
    UnknownLanguage { path: PathBuf },

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}

/// A parsed locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub path: PathBuf,
    /// Normalized code detected from the path, region included.
    pub language: String,
    pub dictionary: Dictionary,
}

/// Load a locale file, detecting its language from the path.
///
/// # Errors
/// Returns error if the file cannot be read, is not a JSON object, or its
/// path names no language.
pub fn load_translation_file(file_path: &Path) -> Result<TranslationFile, CatalogError> {
    let language = detect_language_from_path(file_path)
        .ok_or_else(|| CatalogError::UnknownLanguage { path: file_path.to_path_buf() })?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| CatalogError::Io { path: file_path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| CatalogError::Parse { path: file_path.to_path_buf(), source })?;

    if !json.is_object() {
        return Err(CatalogError::NotAnObject { path: file_path.to_path_buf() });
    }

    Ok(TranslationFile {
        path: file_path.to_path_buf(),
        language,
        dictionary: Dictionary::from_json(&json),
    })
}

/// Locale files under the workspace matching the settings, in path order.
fn find_translation_files(workspace_root: &Path, matcher: &FileMatcher) -> Vec<PathBuf> {
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(workspace_root)
        .hidden(false)
        .git_ignore(true)
        .git_exclude(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if matcher.is_translation_file(entry.path()) {
            found_files.push(entry.path().to_path_buf());
        }
    }

    found_files
}

/// Build a catalog from the locale files of a workspace.
///
/// Files that fail to load are logged and skipped. Several files for one
/// language merge in path order.
///
/// # Errors
/// Returns error if the configured patterns are invalid.
pub fn load_catalog(
    workspace_root: &Path,
    settings: &PortalSettings,
) -> Result<Catalog, CatalogError> {
    tracing::debug!(workspace_root = %workspace_root.display(), "Loading translation catalog");
    let matcher = FileMatcher::new(workspace_root.to_path_buf(), settings)?;

    let mut catalog = Catalog::new(&settings.base_language);
    for path in find_translation_files(workspace_root, &matcher) {
        match load_translation_file(&path) {
            Ok(file) => {
                tracing::debug!(
                    path = %file.path.display(),
                    language = %file.language,
                    entries = file.dictionary.len(),
                    "Loaded translation file"
                );
                catalog.merge_table(&file.language, &file.dictionary);
            }
            Err(e) => tracing::warn!("Skipping translation file: {e}"),
        }
    }

    Ok(catalog)
}

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "requiredLanguages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortalSettings {
    /// Language every dictionary key is written in.
    pub base_language: String,

    pub translation_files: TranslationFilesConfig,

    pub exclude_patterns: Vec<String>,

    /// Languages checked by the coverage report.
    ///
    /// - `None`: every loaded language (default)
    /// - `Some([...])`: only the listed languages
    pub required_languages: Option<Vec<String>>,

    /// Directory holding `workers.json`, `district_alerts.json` and
    /// `interstate_alerts.json`. Relative paths resolve against the workspace.
    /// When unset the bundled sample data is used.
    pub data_dir: Option<String>,

    /// Pins "today" for arrival period filters.
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub file_pattern: String,
}

impl PortalSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.base_language.trim().is_empty() {
            errors.push(ValidationError::new(
                "baseLanguage",
                "The base language cannot be empty. Example: \"en\"",
            ));
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/locales/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if let Some(languages) = &self.required_languages {
            for (index, code) in languages.iter().enumerate() {
                if code.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("requiredLanguages[{index}]"),
                        "The language code cannot be empty. Remove the entry or use a code such as \"ml\"",
                    ));
                }
            }
        }

        if let Some(dir) = &self.data_dir
            && dir.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "dataDir",
                "The directory cannot be empty. Remove this field to use the bundled data",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/locales/*.json".to_string() }
    }
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            base_language: "en".to_string(),
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: vec!["target/**".to_string(), "node_modules/**".to_string()],
            required_languages: None,
            data_dir: None,
            reference_date: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = PortalSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"requiredLanguages": ["ml", "hi"], "referenceDate": "2024-02-01"}"#;

        let settings: PortalSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.base_language, eq("en"));
        assert_that!(settings.exclude_patterns, len(eq(2)));
        assert_that!(settings.required_languages, some(elements_are![eq("ml"), eq("hi")]));
        assert_that!(settings.reference_date, eq(NaiveDate::from_ymd_opt(2024, 2, 1)));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: PortalSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, PortalSettings::default());
        assert_that!(settings.translation_files.file_pattern, eq("**/locales/*.json"));
    }

    #[rstest]
    fn deserialize_rejects_malformed_reference_date() {
        let result = serde_json::from_str::<PortalSettings>(r#"{"referenceDate": "last week"}"#);

        assert_that!(result, err(anything()));
    }

    #[rstest]
    fn validate_invalid_base_language_empty() {
        let settings =
            PortalSettings { base_language: "  ".to_string(), ..PortalSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("baseLanguage")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translation_file_pattern_empty() {
        let settings = PortalSettings {
            translation_files: TranslationFilesConfig { file_pattern: String::new() },
            ..PortalSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.filePattern")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translation_file_pattern_invalid_glob() {
        let settings = PortalSettings {
            translation_files: TranslationFilesConfig {
                file_pattern: "**/{locales,i18n/*.json".to_string(),
            },
            ..PortalSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.filePattern")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = PortalSettings {
            exclude_patterns: vec!["target/**".to_string(), "invalid[pattern".to_string()],
            ..PortalSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_required_language_empty() {
        let settings = PortalSettings {
            required_languages: Some(vec!["ml".to_string(), String::new()]),
            ..PortalSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("requiredLanguages[1]"))])
        );
    }

    #[rstest]
    fn validate_invalid_data_dir_empty() {
        let settings =
            PortalSettings { data_dir: Some(String::new()), ..PortalSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("dataDir"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = PortalSettings {
            base_language: String::new(),
            translation_files: TranslationFilesConfig { file_pattern: String::new() },
            ..PortalSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. baseLanguage"));
        assert_that!(error_message, contains_substring("2. translationFiles.filePattern"));
    }
}

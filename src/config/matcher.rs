//! File pattern matcher for locale files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::PortalSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidTranslationPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files against configured glob patterns.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    /// Root that relative patterns are matched against.
    workspace_root: PathBuf,
    /// Locale file pattern.
    translation_set: GlobSet,
    /// Paths never treated as locale files.
    exclude_set: GlobSet,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(workspace_root: PathBuf, settings: &PortalSettings) -> Result<Self, MatcherError> {
        let translation_set = Self::build_glob_set(
            std::slice::from_ref(&settings.translation_files.file_pattern),
            |pattern, source| MatcherError::InvalidTranslationPattern { pattern, source },
        )?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { workspace_root, translation_set, exclude_set })
    }

    /// Compiles `patterns`, reporting the first invalid one through `make_error`.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Returns true if the path matches `translationFiles.filePattern`
    /// but not `excludePatterns`.
    ///
    /// The path must be absolute and under the workspace root.
    #[must_use]
    pub fn is_translation_file(&self, absolute_path: &Path) -> bool {
        let Some(relative_path) = absolute_path.strip_prefix(&self.workspace_root).ok() else {
            return false;
        };

        self.is_translation_file_relative(relative_path)
    }

    /// The path must be relative to the workspace root.
    #[must_use]
    pub fn is_translation_file_relative(&self, relative_path: &Path) -> bool {
        self.translation_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use super::*;
    use crate::config::TranslationFilesConfig;

    fn create_settings(translation_pattern: &str, exclude: &[&str]) -> PortalSettings {
        PortalSettings {
            exclude_patterns: exclude.iter().copied().map(String::from).collect(),
            translation_files: TranslationFilesConfig {
                file_pattern: translation_pattern.to_string(),
            },
            ..PortalSettings::default()
        }
    }

    #[rstest]
    fn is_translation_file_with_default_pattern() {
        let settings = PortalSettings::default();
        let matcher =
            FileMatcher::new(PathBuf::from("/workspace"), &settings).expect("valid patterns");

        assert!(matcher.is_translation_file(Path::new("/workspace/locales/en.json")));
        assert!(matcher.is_translation_file(Path::new("/workspace/web/locales/ml.json")));

        assert!(!matcher.is_translation_file(Path::new("/workspace/data/workers.json")));
        assert!(!matcher.is_translation_file(Path::new("/workspace/locales/README.md")));
    }

    #[rstest]
    fn is_translation_file_with_exclude() {
        let settings = create_settings("**/i18n/**/*.json", &["**/node_modules/**"]);
        let matcher =
            FileMatcher::new(PathBuf::from("/workspace"), &settings).expect("valid patterns");

        assert!(matcher.is_translation_file(Path::new("/workspace/i18n/en.json")));
        assert!(!matcher.is_translation_file(Path::new("/workspace/node_modules/i18n/en.json")));
    }

    #[rstest]
    fn default_excludes_build_output() {
        let matcher = FileMatcher::new(PathBuf::from("/workspace"), &PortalSettings::default())
            .expect("valid patterns");

        assert!(!matcher.is_translation_file_relative(Path::new("target/locales/en.json")));
    }

    #[rstest]
    fn is_translation_file_outside_workspace() {
        let settings = PortalSettings::default();
        let matcher =
            FileMatcher::new(PathBuf::from("/workspace"), &settings).expect("valid patterns");

        assert!(!matcher.is_translation_file(Path::new("/other/locales/en.json")));
    }

    #[rstest]
    fn new_with_invalid_exclude_pattern() {
        let settings = create_settings("**/*.json", &["[invalid"]);

        let result = FileMatcher::new(PathBuf::from("/workspace"), &settings);

        assert!(matches!(result, Err(MatcherError::InvalidExcludePattern { .. })));
    }

    #[rstest]
    fn new_with_invalid_translation_pattern() {
        let settings = create_settings("**/*.{json", &[]);

        let result = FileMatcher::new(PathBuf::from("/workspace"), &settings);

        assert!(matches!(result, Err(MatcherError::InvalidTranslationPattern { .. })));
    }

    #[rstest]
    fn workspace_root_accessor() {
        let settings = PortalSettings::default();
        let matcher =
            FileMatcher::new(PathBuf::from("/workspace"), &settings).expect("valid patterns");

        assert_eq!(matcher.workspace_root(), Path::new("/workspace"));
    }
}

//! Immutable set of translation tables handed to a [`Translator`](super::Translator).

use std::collections::BTreeMap;

use serde_json::Value;

use super::dictionary::Dictionary;
use super::language::{
    normalize_language_code,
    primary_subtag,
};

/// Bundled locale files, base language first.
const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("ml", include_str!("../../locales/ml.json")),
    ("hi", include_str!("../../locales/hi.json")),
    ("ta", include_str!("../../locales/ta.json")),
];

/// Translation tables keyed by normalized language code.
///
/// The base-language table always exists (possibly empty); it is what
/// unknown language codes resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Normalized code of the language every key is written in.
    base_language: String,
    /// Table of the base language.
    base: Dictionary,
    /// Tables of every other language.
    tables: BTreeMap<String, Dictionary>,
}

/// How much of the base table a language covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    /// Base keys the language has an entry for.
    pub translated: usize,
    /// Base keys overall.
    pub total: usize,
}

impl Coverage {
    /// Whole percent, rounded down. An empty base table counts as fully covered.
    #[must_use]
    pub const fn percent(self) -> usize {
        if self.total == 0 { 100 } else { self.translated * 100 / self.total }
    }
}

impl Catalog {
    /// An empty catalog; every lookup passes text through unchanged.
    #[must_use]
    pub fn new(base_language: &str) -> Self {
        Self {
            base_language: normalize_language_code(base_language),
            base: Dictionary::new(),
            tables: BTreeMap::new(),
        }
    }

    /// Adds a table, merging into an existing table for the same language.
    #[must_use]
    pub fn with_table(mut self, language: &str, dictionary: Dictionary) -> Self {
        self.merge_table(language, &dictionary);
        self
    }

    /// Merges `dictionary` into the table of `language`.
    pub(super) fn merge_table(&mut self, language: &str, dictionary: &Dictionary) {
        let code = normalize_language_code(language);
        if code == self.base_language {
            self.base.extend_from(dictionary);
        } else {
            self.tables.entry(code).or_default().extend_from(dictionary);
        }
    }

    /// The portal's own English, Malayalam, Hindi and Tamil tables.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new("en");
        for (code, source) in BUILTIN_LOCALES {
            match serde_json::from_str::<Value>(source) {
                Ok(json) => catalog.merge_table(code, &Dictionary::from_json(&json)),
                Err(e) => tracing::warn!("Bundled locale '{code}' is not valid JSON: {e}"),
            }
        }
        catalog
    }

    #[must_use]
    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    #[must_use]
    pub const fn base_table(&self) -> &Dictionary {
        &self.base
    }

    /// The table for `language`, if one was loaded.
    ///
    /// A code without its own table uses the table of its primary language
    /// (`ml-IN` → `ml`), then the first region-tagged table of that language
    /// (`hi` → `hi-in`).
    #[must_use]
    pub fn table(&self, language: &str) -> Option<&Dictionary> {
        let code = normalize_language_code(language);
        let primary = primary_subtag(&code);
        self.exact_table(&code).or_else(|| self.exact_table(primary)).or_else(|| {
            self.tables
                .iter()
                .find(|(tag, _)| primary_subtag(tag) == primary)
                .map(|(_, table)| table)
        })
    }

    /// The table stored under exactly `code`.
    fn exact_table(&self, code: &str) -> Option<&Dictionary> {
        if code == self.base_language { Some(&self.base) } else { self.tables.get(code) }
    }

    /// The table for `language`, or the base table when there is none.
    #[must_use]
    pub fn resolve(&self, language: &str) -> &Dictionary {
        self.table(language).unwrap_or(&self.base)
    }

    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.table(language).is_some()
    }

    /// Loaded language codes, base language first, then alphabetical.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        std::iter::once(self.base_language.as_str())
            .chain(self.tables.keys().map(String::as_str))
            .collect()
    }

    /// Base keys without an entry in `language`, in base order.
    ///
    /// A language with no table is missing every key.
    #[must_use]
    pub fn missing_keys(&self, language: &str) -> Vec<&str> {
        let table = self.table(language);
        self.base
            .keys()
            .filter(|key| !table.is_some_and(|table| table.contains_key(key)))
            .collect()
    }

    #[must_use]
    pub fn coverage(&self, language: &str) -> Coverage {
        let total = self.base.len();
        Coverage { translated: total - self.missing_keys(language).len(), total }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

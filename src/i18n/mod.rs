//! Dictionary-based UI translation.
//!
//! Every label is authored in the base language and used as its own key.
//! A [`Translator`] looks labels up in an immutable [`Catalog`] of per-language
//! [`Dictionary`] tables, either the bundled ones or tables loaded from locale
//! files with [`load_catalog`].

/// Language tables and coverage.
mod catalog;
/// Ordered phrase tables.
mod dictionary;
/// Language codes.
mod language;
/// Locale file discovery and loading.
mod loader;
/// Phrase lookup.
mod translator;

pub use catalog::{
    Catalog,
    Coverage,
};
pub use dictionary::Dictionary;
pub use language::{
    LanguageInfo,
    SUPPORTED_LANGUAGES,
    detect_language_from_path,
    language_info,
    normalize_language_code,
    primary_subtag,
};
pub use loader::{
    CatalogError,
    TranslationFile,
    load_catalog,
    load_translation_file,
};
pub use translator::{
    Localizer,
    Translator,
};

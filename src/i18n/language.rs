//! Language codes: the portal's supported languages and detection of a
//! locale file's language from its path.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// A language offered in the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    /// English name
    pub name: &'static str,
    /// Name in the language itself
    pub native: &'static str,
}

/// Languages the portal ships dictionaries for, base language first.
pub const SUPPORTED_LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo { code: "en", name: "English", native: "English" },
    LanguageInfo { code: "ml", name: "Malayalam", native: "മലയാളം" },
    LanguageInfo { code: "hi", name: "Hindi", native: "हिन्दी" },
    LanguageInfo { code: "ta", name: "Tamil", native: "தமிழ்" },
];

/// Looks up a supported language by code.
#[must_use]
pub fn language_info(code: &str) -> Option<&'static LanguageInfo> {
    let code = normalize_language_code(code);
    SUPPORTED_LANGUAGES.iter().find(|info| info.code == code)
}

/// ISO 639-1 codes accepted as the language part of a locale file path.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "af", "ar", "as", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "dv", "el",
        "en", "eo", "es", "et", "eu", "fa", "fi", "fo", "fr", "gl", "gu", "he", "hi", "hr", "hu",
        "hy", "id", "is", "it", "ja", "ka", "kk", "kn", "ko", "ks", "ky", "lt", "lv", "mi", "mk",
        "ml", "mn", "mr", "ms", "mt", "nb", "ne", "nl", "nn", "or", "pa", "pl", "ps", "pt", "qu",
        "ro", "ru", "sa", "sd", "se", "sk", "sl", "sq", "sr", "sv", "sw", "ta", "te", "th", "tr",
        "tt", "uk", "ur", "uz", "vi", "zh",
    ]
    .into_iter()
    .collect()
});

/// Trims and lowercases a language code (`" ML "` → `"ml"`).
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// The language part of a code without its region (`hi-in` → `hi`).
#[must_use]
pub fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// True for a known code, optionally followed by a region (`ml`, `ml-IN`, `ml_in`).
fn is_language_code(part: &str) -> bool {
    let lower = part.to_lowercase();
    let primary = lower.split(['-', '_']).next().unwrap_or_default();
    let region_ok = lower
        .split(['-', '_'])
        .skip(1)
        .all(|region| (2..=4).contains(&region.len()) && region.chars().all(char::is_alphanumeric));
    LANGUAGE_CODES.contains(primary) && region_ok && lower.split(['-', '_']).count() <= 3
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that is a known language code.
///
/// # Examples
/// - `locales/ml.json` → `ml`
/// - `locales/hi-IN/portal.json` → `hi-in`
/// - `locales/common.json` → `None`
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> Option<String> {
    let path_str = file_path.to_string_lossy();
    path_str
        .split(['/', '\\', '.'])
        .rev()
        .find(|part| is_language_code(part))
        .map(normalize_language_code)
}

//! Insertion-ordered phrase dictionary for one language.

use indexmap::IndexMap;
use serde_json::Value;

/// Source phrase → localized phrase, enumerated in insertion order.
///
/// The enumeration order decides which key wins the substring fallback in
/// [`Translator::translate`](super::Translator::translate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Phrases in the order they were first inserted.
    entries: IndexMap<String, String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. A replaced entry keeps its original
    /// position. Empty keys are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            tracing::debug!("Ignoring dictionary entry with an empty key");
            return;
        }
        self.entries.insert(key, value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends every entry of `other`, in its order.
    pub fn extend_from(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Builds a dictionary from a locale JSON document.
    ///
    /// String leaves become entries. Nested objects only group phrases: their
    /// members are added under their own key, without a prefix. Other scalars
    /// are stored as JSON text and arrays are skipped.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use health_portal::i18n::Dictionary;
    ///
    /// let json = json!({
    ///     "Dashboard": "ഡാഷ്‌ബോർഡ്",
    ///     "emergency": { "Call Now": "ഇപ്പോൾ വിളിക്കുക" }
    /// });
    ///
    /// let dictionary = Dictionary::from_json(&json);
    /// assert_eq!(dictionary.get("Call Now"), Some("ഇപ്പോൾ വിളിക്കുക"));
    /// assert_eq!(dictionary.get("emergency"), None);
    /// ```
    #[must_use]
    pub fn from_json(json: &Value) -> Self {
        let mut dictionary = Self::new();
        if let Value::Object(map) = json {
            for (key, value) in map {
                dictionary.collect_entry(key, value);
            }
        }
        dictionary
    }

    /// Adds one JSON member, descending into grouping objects.
    fn collect_entry(&mut self, key: &str, value: &Value) {
        match value {
            Value::Object(map) => {
                for (nested_key, nested_value) in map {
                    self.collect_entry(nested_key, nested_value);
                }
            }
            Value::Array(_) => {
                tracing::debug!("Skipping array value for dictionary key '{key}'");
            }
            Value::String(s) => self.insert(key, s.as_str()),
            _ => self.insert(key, value.to_string()),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

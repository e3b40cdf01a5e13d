//! Phrase lookup against a [`Catalog`].

use std::borrow::Cow;

use super::catalog::Catalog;

/// Localizes base-language phrases using an injected catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    /// Tables consulted by every lookup.
    catalog: Catalog,
}

impl Translator {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// A translator over the bundled tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Best-effort localization of `text` into `language`.
    ///
    /// 1. Unknown languages use the base-language table.
    /// 2. An exact key returns its value.
    /// 3. Otherwise the first key (in table order) found inside `text` has its
    ///    first occurrence replaced by its value. Overlapping keys are not
    ///    disambiguated: an earlier, shorter key can win over a later, longer one.
    /// 4. Otherwise `text` is returned unchanged.
    ///
    /// Never fails.
    #[must_use]
    pub fn translate<'a>(&'a self, text: &'a str, language: &str) -> Cow<'a, str> {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }

        let table = self.catalog.resolve(language);

        if let Some(value) = table.get(text) {
            return Cow::Borrowed(value);
        }

        for (key, value) in table.iter() {
            if text.contains(key) {
                return Cow::Owned(text.replacen(key, value, 1));
            }
        }

        Cow::Borrowed(text)
    }

    /// Binds the translator to one language.
    #[must_use]
    pub const fn localizer<'a>(&'a self, language: &'a str) -> Localizer<'a> {
        Localizer { translator: self, language }
    }
}

/// A translator fixed to the currently selected language.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    /// Translator doing the lookups.
    translator: &'a Translator,
    /// Language code passed to every lookup.
    language: &'a str,
}

impl<'a> Localizer<'a> {
    #[must_use]
    pub const fn language(&self) -> &'a str {
        self.language
    }

    /// Same as [`Translator::translate`] for the bound language.
    #[must_use]
    pub fn t(&self, text: &'a str) -> Cow<'a, str> {
        self.translator.translate(text, self.language)
    }
}

//! Medical awareness articles and their search filters.

use std::borrow::Cow;

use serde::{
    Deserialize,
    Serialize,
};

use crate::records::{
    CriteriaSet,
    Record,
    Selection,
    filter_records_today,
};
use crate::types::ArticleCategory;

/// A health awareness article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: ArticleCategory,
    pub author: String,
    /// Publication date as recorded.
    pub date: String,
    pub read_time: String,
    pub views: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    pub const TITLE: &'static str = "title";
    pub const EXCERPT: &'static str = "excerpt";
    pub const CONTENT: &'static str = "content";
    pub const CATEGORY: &'static str = "category";
    pub const AUTHOR: &'static str = "author";
    pub const DATE: &'static str = "date";
    pub const VIEWS: &'static str = "views";
    pub const TAGS: &'static str = "tags";
    pub const FEATURED: &'static str = "featured";
}

impl Record for Article {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            Self::TITLE => Cow::Borrowed(self.title.as_str()),
            Self::EXCERPT => Cow::Borrowed(self.excerpt.as_str()),
            Self::CONTENT => Cow::Borrowed(self.content.as_str()),
            Self::CATEGORY => Cow::Borrowed(self.category.label()),
            Self::AUTHOR => Cow::Borrowed(self.author.as_str()),
            Self::DATE => Cow::Borrowed(self.date.as_str()),
            Self::VIEWS => Cow::Owned(self.views.to_string()),
            Self::FEATURED => Cow::Owned(self.featured.to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn field_values(&self, name: &str) -> Vec<Cow<'_, str>> {
        if name == Self::TAGS {
            return self.tags.iter().map(|tag| Cow::Borrowed(tag.as_str())).collect();
        }
        self.field(name).into_iter().collect()
    }
}

/// Selections of the article list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleFilters {
    /// Free text matched against the title, the excerpt and every tag.
    pub search: String,
    pub category: Selection,
}

impl ArticleFilters {
    pub const SEARCH_FIELDS: &'static [&'static str] = &[Article::TITLE, Article::EXCERPT, Article::TAGS];

    #[must_use]
    pub fn to_criteria(&self) -> CriteriaSet {
        CriteriaSet::new()
            .with_search(self.search.as_str(), Self::SEARCH_FIELDS.iter().copied())
            .with_field(Article::CATEGORY, self.category.clone())
    }

    /// Articles matching the selections, in input order.
    #[must_use]
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        filter_records_today(articles, &self.to_criteria())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Articles marked as featured, in input order.
#[must_use]
pub fn featured_articles(articles: &[Article]) -> Vec<&Article> {
    articles.iter().filter(|article| article.featured).collect()
}

/// Article count for every category, in category order, empty ones included.
#[must_use]
pub fn articles_per_category(articles: &[Article]) -> Vec<(ArticleCategory, usize)> {
    ArticleCategory::ALL
        .iter()
        .map(|&category| {
            (category, articles.iter().filter(|article| article.category == category).count())
        })
        .collect()
}

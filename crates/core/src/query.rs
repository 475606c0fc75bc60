//! List filtering and pagination.
//!
//! Query parameters arrive as raw optional strings. Parsing never fails: a page or limit that is
//! absent, non-numeric or zero falls back to its default. Any other value is used as given, so a
//! page always covers exactly `[(page - 1) * limit, page * limit)` of the filtered records.

use crate::article::Article;
use crate::config::CoreConfig;
use crate::constants::DEFAULT_PAGE;

/// A parsed list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleQuery {
    search: String,
    status: Option<String>,
    page: usize,
    limit: usize,
}

fn positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
}

impl ArticleQuery {
    /// Builds a query from raw request values.
    pub fn from_raw(
        search: Option<&str>,
        status: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
        cfg: &CoreConfig,
    ) -> Self {
        Self {
            search: search.unwrap_or_default().to_lowercase(),
            status: status.filter(|s| !s.is_empty()).map(str::to_string),
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            limit: positive(limit).unwrap_or(cfg.default_page_limit()),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first record of this page within the filtered sequence.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Case-insensitive title search AND exact status match.
    ///
    /// A status outside the known set matches nothing.
    pub fn matches(&self, article: &Article) -> bool {
        let matches_search = article.title.as_str().to_lowercase().contains(&self.search);
        let matches_status = self
            .status
            .as_deref()
            .map_or(true, |s| article.status.as_str() == s);
        matches_search && matches_status
    }

    /// Filters `articles` and returns the requested page, preserving relative order.
    pub fn apply(&self, articles: Vec<Article>) -> Vec<Article> {
        articles
            .into_iter()
            .filter(|a| self.matches(a))
            .skip(self.offset())
            .take(self.limit)
            .collect()
    }
}

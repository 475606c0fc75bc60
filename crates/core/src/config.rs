//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables; they only see
//! the `CoreConfig` they were built with.

use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_REST_ADDR};
use crate::{ArticleError, ArticleResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    seed_articles: bool,
    default_page_limit: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidInput`] if `default_page_limit` is zero.
    pub fn new(seed_articles: bool, default_page_limit: usize) -> ArticleResult<Self> {
        if default_page_limit == 0 {
            return Err(ArticleError::InvalidInput(
                "default page limit must be at least 1".into(),
            ));
        }

        Ok(Self {
            seed_articles,
            default_page_limit,
        })
    }

    pub fn seed_articles(&self) -> bool {
        self.seed_articles
    }

    pub fn default_page_limit(&self) -> usize {
        self.default_page_limit
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_articles: true,
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the REST listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.into())
}

/// Parse the seed toggle from an optional string value.
///
/// Accepts `true`/`false`, `1`/`0` and `yes`/`no` in any case. Unset or blank means `true`.
pub fn seed_from_env_value(value: Option<String>) -> ArticleResult<bool> {
    match non_blank(value) {
        None => Ok(true),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ArticleError::InvalidInput(format!(
                "expected a boolean seed flag, got '{v}'"
            ))),
        },
    }
}

/// Parse a page limit from an optional string value, falling back to `default` when unset.
///
/// # Errors
///
/// Returns [`ArticleError::InvalidInput`] if the value is not a positive integer.
pub fn page_limit_from_env_value(value: Option<String>, default: usize) -> ArticleResult<usize> {
    let Some(v) = non_blank(value) else {
        return Ok(default);
    };
    match v.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ArticleError::InvalidInput(format!(
            "page limit must be a positive integer, got '{v}'"
        ))),
    }
}

//! Article domain types.
//!
//! Inbound data arrives as loosely-typed drafts and patches (every field optional, statuses as
//! raw strings). Validation turns them into [`NewArticle`] and [`ArticleChanges`], which are the
//! only shapes the store accepts, so a stored [`Article`] always has a non-empty title and a
//! known status.

use crate::{ArticleError, ArticleResult, NonEmptyText};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Article identifier assigned by the store.
pub type ArticleId = u64;

/// Publication state of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = ArticleError;

    /// Parses the lowercase wire form. Anything else is [`ArticleError::InvalidStatus`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            other => Err(ArticleError::InvalidStatus(other.to_string())),
        }
    }
}

/// A stored article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: NonEmptyText,
    pub status: ArticleStatus,
    pub author: String,
    /// ISO-8601 creation timestamp. Kept as text because callers may supply their own value.
    pub created_at: String,
}

/// Current UTC time in the form JavaScript's `toISOString` produces, e.g.
/// `2024-01-15T10:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Unvalidated input for creating an article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub status: Option<String>,
    pub author: Option<String>,
    pub created_at: Option<String>,
}

impl ArticleDraft {
    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// - [`ArticleError::MissingFields`] if `title`, `status` or `author` is absent or blank.
    /// - [`ArticleError::InvalidStatus`] if `status` is not `draft` or `published`.
    pub fn validate(self) -> ArticleResult<NewArticle> {
        let (Some(title), Some(status), Some(author)) = (
            supplied(self.title),
            supplied(self.status),
            supplied(self.author),
        ) else {
            return Err(ArticleError::MissingFields);
        };

        Ok(NewArticle {
            title: NonEmptyText::new(title)?,
            status: status.parse()?,
            author,
            created_at: supplied(self.created_at),
        })
    }
}

/// Validated input for [`ArticleStore::insert`](crate::ArticleStore::insert).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewArticle {
    pub title: NonEmptyText,
    pub status: ArticleStatus,
    pub author: String,
    /// Defaults to [`timestamp_now`] at insertion when `None`.
    pub created_at: Option<String>,
}

/// Unvalidated partial update. Fields left `None` are not touched.
///
/// Has no `id` field: an article keeps the id it was addressed by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub status: Option<String>,
    pub author: Option<String>,
    pub created_at: Option<String>,
}

impl ArticlePatch {
    /// Validates the supplied fields.
    ///
    /// # Errors
    ///
    /// - [`ArticleError::InvalidInput`] if a supplied `title` is blank.
    /// - [`ArticleError::InvalidStatus`] if a supplied `status` is unknown.
    pub fn validate(self) -> ArticleResult<ArticleChanges> {
        Ok(ArticleChanges {
            title: self.title.map(NonEmptyText::new).transpose()?,
            status: self.status.map(|s| s.parse::<ArticleStatus>()).transpose()?,
            author: self.author,
            created_at: self.created_at,
        })
    }
}

/// Validated partial update, applied as a shallow merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleChanges {
    pub title: Option<NonEmptyText>,
    pub status: Option<ArticleStatus>,
    pub author: Option<String>,
    pub created_at: Option<String>,
}

impl ArticleChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.author.is_none()
            && self.created_at.is_none()
    }

    /// Overwrites every supplied field on `article`. The id is never touched.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(status) = self.status {
            article.status = status;
        }
        if let Some(author) = &self.author {
            article.author = author.clone();
        }
        if let Some(created_at) = &self.created_at {
            article.created_at = created_at.clone();
        }
    }
}

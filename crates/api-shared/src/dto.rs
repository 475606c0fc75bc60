//! JSON request and response bodies.
//!
//! Request bodies keep every field optional so that a missing field reaches core validation and
//! is reported as "Missing required fields" rather than as a deserialisation failure.

use articles_core::{Article, ArticleDraft, ArticlePatch};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Human-readable outcome, used for confirmations and for every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    #[schema(example = "Article not found")]
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRes {
    #[schema(example = 2)]
    pub id: u64,
    #[schema(example = "Second Article")]
    pub title: String,
    /// Either `draft` or `published`.
    #[schema(example = "draft")]
    pub status: String,
    pub author: String,
    /// ISO-8601 creation timestamp.
    #[schema(example = "2024-01-15T10:00:00.000Z")]
    pub created_at: String,
}

impl From<Article> for ArticleRes {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title.into_inner(),
            status: article.status.to_string(),
            author: article.author,
            created_at: article.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListArticlesRes {
    pub data: Vec<ArticleRes>,
}

/// Listing filters. Values are kept as raw text; unusable `page`/`limit` values fall back to
/// their defaults instead of rejecting the request.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListArticlesQuery {
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
    /// `draft` or `published`; empty means any.
    pub status: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<String>,
    /// Page size, default 10.
    pub limit: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleReq {
    pub title: Option<String>,
    pub status: Option<String>,
    pub author: Option<String>,
    /// Defaults to the time of creation.
    pub created_at: Option<String>,
}

impl From<CreateArticleReq> for ArticleDraft {
    fn from(req: CreateArticleReq) -> Self {
        Self {
            title: req.title,
            status: req.status,
            author: req.author,
            created_at: req.created_at,
        }
    }
}

/// Partial update. Any `id` in the body is ignored; the path decides which article changes.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleReq {
    pub title: Option<String>,
    pub status: Option<String>,
    pub author: Option<String>,
    pub created_at: Option<String>,
}

impl From<UpdateArticleReq> for ArticlePatch {
    fn from(req: UpdateArticleReq) -> Self {
        Self {
            title: req.title,
            status: req.status,
            author: req.author,
            created_at: req.created_at,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteArticleReq {
    pub id: Option<u64>,
}

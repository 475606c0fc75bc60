//! # Articles Core
//!
//! Core business logic for the article manager.
//!
//! This crate contains pure data operations over an in-memory article collection:
//! - Article domain types and validation of inbound drafts and patches
//! - The process-wide [`ArticleStore`] and its mutation points
//! - [`ArticleService`] for list/filter/paginate, get, create, update and delete
//!
//! **No API concerns**: HTTP routing, JSON wire types and OpenAPI documentation belong in
//! `api-rest` or `api-shared`.

pub mod article;
pub mod config;
pub mod constants;
pub mod error;
pub mod query;
pub mod service;
pub mod store;

pub use article::{
    timestamp_now, Article, ArticleChanges, ArticleDraft, ArticleId, ArticlePatch, ArticleStatus,
    NewArticle,
};
pub use article_types::{NonEmptyText, TextError};
pub use config::CoreConfig;
pub use error::{ArticleError, ArticleResult};
pub use query::ArticleQuery;
pub use service::{parse_article_id, ArticleService};
pub use store::ArticleStore;

//! Constants used throughout the articles core crate.
//!
//! Response messages live here so the core errors and the API layer agree on wording.

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// First page number; pages are 1-based.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller does not supply a usable `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Author recorded on the seed articles.
pub const SEED_AUTHOR: &str = "Brandon Dick";

/// Titles and statuses of the articles loaded at startup, in insertion order.
pub const SEED_ARTICLES: [(&str, crate::ArticleStatus); 3] = [
    ("First Article", crate::ArticleStatus::Published),
    ("Second Article", crate::ArticleStatus::Draft),
    ("Third Article", crate::ArticleStatus::Published),
];

pub const ARTICLE_NOT_FOUND_MESSAGE: &str = "Article not found";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const ARTICLE_REMOVED_MESSAGE: &str = "Article removed successfully";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Not found";

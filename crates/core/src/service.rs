//! Article operations.
//!
//! [`ArticleService`] is the request-facing layer over [`ArticleStore`]: it parses identifiers,
//! validates drafts and patches before the store is touched, and turns absent records into
//! [`ArticleError::NotFound`]. It is cheap to clone and holds the store by `Arc`.

use crate::article::{Article, ArticleDraft, ArticleId, ArticlePatch};
use crate::config::CoreConfig;
use crate::query::ArticleQuery;
use crate::store::ArticleStore;
use crate::{ArticleError, ArticleResult};
use std::sync::Arc;

/// Parses an article id from a path segment.
///
/// Absent or non-numeric input becomes `0`, an id the store never assigns, so lookups fall
/// through to not-found instead of failing as a bad request.
pub fn parse_article_id(raw: Option<&str>) -> ArticleId {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct ArticleService {
    cfg: Arc<CoreConfig>,
    store: Arc<ArticleStore>,
}

impl ArticleService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ArticleStore>) -> Self {
        Self { cfg, store }
    }

    /// Builds the store the configuration asks for (seeded or empty) and wraps it in a service.
    pub fn from_config(cfg: Arc<CoreConfig>) -> Self {
        let store = if cfg.seed_articles() {
            ArticleStore::seeded()
        } else {
            ArticleStore::new()
        };
        Self::new(cfg, Arc::new(store))
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Parses raw list parameters against this service's page limits.
    pub fn query(
        &self,
        search: Option<&str>,
        status: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> ArticleQuery {
        ArticleQuery::from_raw(search, status, page, limit, &self.cfg)
    }

    /// Filtered, paginated snapshot of the store.
    pub fn list(&self, query: &ArticleQuery) -> Vec<Article> {
        let page = query.apply(self.store.list());
        tracing::debug!(
            page = query.page(),
            limit = query.limit(),
            returned = page.len(),
            "listed articles"
        );
        page
    }

    /// Looks up an article by its raw path id.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::NotFound`] if no article has that id.
    pub fn get(&self, raw_id: Option<&str>) -> ArticleResult<Article> {
        let id = parse_article_id(raw_id);
        self.store.find_by_id(id).ok_or(ArticleError::NotFound)
    }

    /// Validates `draft` and stores it under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::MissingFields`] or [`ArticleError::InvalidStatus`]; the store is
    /// left untouched in both cases.
    pub fn create(&self, draft: ArticleDraft) -> ArticleResult<Article> {
        let new = draft.validate()?;
        let article = self.store.insert(new);
        tracing::info!("++ Created article {} ({})", article.id, article.status);
        Ok(article)
    }

    /// Shallow-merges `patch` onto the article addressed by `raw_id`.
    ///
    /// The id in the result is always the one parsed from `raw_id`.
    ///
    /// # Errors
    ///
    /// - [`ArticleError::InvalidInput`] / [`ArticleError::InvalidStatus`] for a bad patch.
    /// - [`ArticleError::NotFound`] if no article has that id.
    pub fn update(&self, raw_id: Option<&str>, patch: ArticlePatch) -> ArticleResult<Article> {
        let id = parse_article_id(raw_id);
        let changes = patch.validate()?;
        let article = self
            .store
            .update(id, &changes)
            .ok_or(ArticleError::NotFound)?;
        tracing::info!("~~ Updated article {}", id);
        Ok(article)
    }

    /// Removes the article with `id`. Unknown ids succeed without changing anything.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::MissingFields`] if `id` is absent or `0`.
    pub fn delete(&self, id: Option<ArticleId>) -> ArticleResult<bool> {
        let id = id.filter(|id| *id != 0).ok_or(ArticleError::MissingFields)?;
        let removed = self.store.remove(id);
        if removed {
            tracing::info!("-- Removed article {}", id);
        } else {
            tracing::debug!("-- No article {} to remove", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArticleStatus, NonEmptyText};

    fn setup_service() -> ArticleService {
        let articles = vec![
            Article {
                id: 1,
                title: NonEmptyText::new("Article 1").unwrap(),
                status: ArticleStatus::Draft,
                author: "Author 1".into(),
                created_at: "2024-01-01".into(),
            },
            Article {
                id: 2,
                title: NonEmptyText::new("Article 2").unwrap(),
                status: ArticleStatus::Published,
                author: "Author 2".into(),
                created_at: "2024-01-02".into(),
            },
            Article {
                id: 3,
                title: NonEmptyText::new("Article 3").unwrap(),
                status: ArticleStatus::Draft,
                author: "Author 3".into(),
                created_at: "2024-01-03".into(),
            },
        ];
        ArticleService::new(
            Arc::new(CoreConfig::default()),
            Arc::new(ArticleStore::from_articles(articles).unwrap()),
        )
    }

    #[test]
    fn test_parse_article_id() {
        assert_eq!(parse_article_id(Some("2")), 2);
        assert_eq!(parse_article_id(Some("invalid")), 0);
        assert_eq!(parse_article_id(Some("-1")), 0);
        assert_eq!(parse_article_id(None), 0);
    }

    #[test]
    fn test_from_config_respects_seed_flag() {
        let seeded = ArticleService::from_config(Arc::new(CoreConfig::default()));
        assert_eq!(seeded.store().len(), 3);

        let cfg = CoreConfig::new(false, 10).unwrap();
        let empty = ArticleService::from_config(Arc::new(cfg));
        assert!(empty.store().is_empty());
    }

    #[test]
    fn test_get_existing_and_missing() {
        let service = setup_service();
        assert_eq!(service.get(Some("2")).unwrap().author, "Author 2");
        assert_eq!(service.get(Some("999")), Err(ArticleError::NotFound));
        assert_eq!(service.get(Some("invalid")), Err(ArticleError::NotFound));
        assert_eq!(service.get(None), Err(ArticleError::NotFound));
    }

    #[test]
    fn test_list_uses_query() {
        let service = setup_service();
        let q = service.query(None, Some("draft"), None, None);
        let ids: Vec<_> = service.list(&q).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let service = setup_service();
        let created = service
            .create(ArticleDraft {
                title: Some("Test Article".into()),
                status: Some("published".into()),
                author: Some("John Doe".into()),
                created_at: None,
            })
            .unwrap();
        assert_eq!(created.id, 4);

        let fetched = service.get(Some("4")).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title.as_str(), "Test Article");
        assert_eq!(fetched.status, ArticleStatus::Published);
        assert_eq!(fetched.author, "John Doe");
    }

    #[test]
    fn test_create_stores_padded_fields_as_given() {
        let service = setup_service();
        let created = service
            .create(ArticleDraft {
                title: Some("  Padded  ".into()),
                status: Some("draft".into()),
                author: Some("  Bob ".into()),
                created_at: Some("2024-02-15".into()),
            })
            .unwrap();

        let fetched = service.get(Some(&created.id.to_string())).unwrap();
        assert_eq!(fetched.title.as_str(), "  Padded  ");
        assert_eq!(fetched.author, "  Bob ");
        assert_eq!(fetched.created_at, "2024-02-15");
    }

    #[test]
    fn test_create_missing_fields_leaves_store_untouched() {
        let service = setup_service();
        assert_eq!(
            service.create(ArticleDraft::default()),
            Err(ArticleError::MissingFields)
        );
        assert_eq!(service.store().len(), 3);
    }

    #[test]
    fn test_update_pins_id_and_merges() {
        let service = setup_service();
        let updated = service
            .update(
                Some("2"),
                ArticlePatch {
                    title: Some("Updated".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.title.as_str(), "Updated");
        assert_eq!(updated.author, "Author 2");
        assert_eq!(updated.status, ArticleStatus::Published);
        assert_eq!(updated.created_at, "2024-01-02");
    }

    #[test]
    fn test_update_with_empty_patch_is_identity() {
        let service = setup_service();
        let before = service.get(Some("1")).unwrap();
        let after = service.update(Some("1"), ArticlePatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_missing_article() {
        let service = setup_service();
        assert_eq!(
            service.update(Some("999"), ArticlePatch::default()),
            Err(ArticleError::NotFound)
        );
        assert_eq!(
            service.update(None, ArticlePatch::default()),
            Err(ArticleError::NotFound)
        );
    }

    #[test]
    fn test_update_with_invalid_status_does_not_modify() {
        let service = setup_service();
        let result = service.update(
            Some("1"),
            ArticlePatch {
                title: Some("Changed".into()),
                status: Some("archived".into()),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(ArticleError::InvalidStatus("archived".into())));
        assert_eq!(service.get(Some("1")).unwrap().title.as_str(), "Article 1");
    }

    #[test]
    fn test_delete_requires_id() {
        let service = setup_service();
        assert_eq!(service.delete(None), Err(ArticleError::MissingFields));
        assert_eq!(service.delete(Some(0)), Err(ArticleError::MissingFields));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let service = setup_service();
        assert_eq!(service.delete(Some(2)), Ok(true));
        assert_eq!(service.delete(Some(2)), Ok(false));
        assert_eq!(service.delete(Some(999)), Ok(false));

        let ids: Vec<_> = service.store().list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}

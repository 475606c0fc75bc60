//! In-memory article store.
//!
//! The store owns the canonical ordered list of articles for the lifetime of the process. It is
//! created once at startup and shared by `Arc` handle; every mutation goes through the write half
//! of a single [`RwLock`], so id assignment and append happen in one critical section.
//!
//! Ids come from a monotonic counter, not from the current length, so an id is never handed out
//! twice even after deletions.

use crate::article::{timestamp_now, Article, ArticleChanges, ArticleId, NewArticle};
use crate::constants::{SEED_ARTICLES, SEED_AUTHOR};
use crate::{ArticleError, ArticleResult, NonEmptyText};
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct StoreInner {
    articles: Vec<Article>,
    next_id: ArticleId,
}

#[derive(Debug)]
pub struct ArticleStore {
    inner: RwLock<StoreInner>,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    /// Creates an empty store. The first inserted article gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                articles: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store holding the three startup articles, all stamped with the current time.
    pub fn seeded() -> Self {
        let store = Self::new();
        let created_at = timestamp_now();
        for (title, status) in SEED_ARTICLES {
            // Seed titles are non-empty literals.
            let Ok(title) = NonEmptyText::new(title) else {
                continue;
            };
            store.insert(NewArticle {
                title,
                status,
                author: SEED_AUTHOR.to_string(),
                created_at: Some(created_at.clone()),
            });
        }
        store
    }

    /// Creates a store from existing records, keeping their ids and order.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::InvalidInput`] if two records share an id, or if an id is
    /// `u64::MAX` so no further id could be assigned.
    pub fn from_articles(articles: Vec<Article>) -> ArticleResult<Self> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !seen.insert(article.id) {
                return Err(ArticleError::InvalidInput(format!(
                    "duplicate article id {}",
                    article.id
                )));
            }
        }

        let next_id = articles
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| {
                ArticleError::InvalidInput(format!("article id {} leaves no free id", u64::MAX))
            })?;
        Ok(Self {
            inner: RwLock::new(StoreInner { articles, next_id }),
        })
    }

    // A panic while holding the lock cannot leave a half-applied change behind: every mutation
    // is a single push, assignment or retain.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of all articles in insertion order.
    pub fn list(&self) -> Vec<Article> {
        self.read().articles.clone()
    }

    pub fn len(&self) -> usize {
        self.read().articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().articles.is_empty()
    }

    /// Appends a new article under the next free id and returns it.
    pub fn insert(&self, new: NewArticle) -> Article {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let article = Article {
            id,
            title: new.title,
            status: new.status,
            author: new.author,
            created_at: new.created_at.unwrap_or_else(timestamp_now),
        };
        inner.articles.push(article.clone());
        article
    }

    pub fn find_by_id(&self, id: ArticleId) -> Option<Article> {
        self.read().articles.iter().find(|a| a.id == id).cloned()
    }

    /// Merges `changes` onto the article with `id` and returns the result, or `None` if no such
    /// article exists.
    pub fn update(&self, id: ArticleId, changes: &ArticleChanges) -> Option<Article> {
        let mut inner = self.write();
        let article = inner.articles.iter_mut().find(|a| a.id == id)?;
        changes.apply_to(article);
        Some(article.clone())
    }

    /// Removes the article with `id`. Returns whether anything was removed.
    pub fn remove(&self, id: ArticleId) -> bool {
        let mut inner = self.write();
        let before = inner.articles.len();
        inner.articles.retain(|a| a.id != id);
        inner.articles.len() != before
    }
}

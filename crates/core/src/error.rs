use crate::constants::{ARTICLE_NOT_FOUND_MESSAGE, MISSING_FIELDS_MESSAGE};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArticleError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{}", ARTICLE_NOT_FOUND_MESSAGE)]
    NotFound,
}

impl ArticleError {
    /// Returns `true` for errors caused by the caller's input rather than a missing record.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ArticleError::MissingFields
                | ArticleError::InvalidStatus(_)
                | ArticleError::InvalidInput(_)
        )
    }
}

impl From<article_types::TextError> for ArticleError {
    fn from(err: article_types::TextError) -> Self {
        ArticleError::InvalidInput(err.to_string())
    }
}

pub type ArticleResult<T> = std::result::Result<T, ArticleError>;

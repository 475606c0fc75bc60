//! Mapping of core errors and body rejections onto HTTP responses.
//!
//! Every failure leaves the API as a JSON `{ "message": ... }` body.

use api_shared::MessageRes;
use articles_core::ArticleError;
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<MessageRes>);

/// Maps a core error to its status code and message.
pub fn error_response(err: ArticleError) -> ApiError {
    let status = match &err {
        ArticleError::NotFound => StatusCode::NOT_FOUND,
        ArticleError::MissingFields
        | ArticleError::InvalidStatus(_)
        | ArticleError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    };

    if err.is_validation() {
        tracing::warn!("Rejected article request: {}", err);
    } else {
        tracing::debug!("Article lookup failed: {}", err);
    }

    (status, Json(MessageRes::new(err.to_string())))
}

/// Reports a body that could not be read as JSON of the expected shape as a 400.
pub fn rejection_response(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Invalid request body: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(MessageRes::new(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, Json(body)) = error_response(ArticleError::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Article not found");
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let (status, Json(body)) = error_response(ArticleError::MissingFields);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing required fields");

        let (status, Json(body)) = error_response(ArticleError::InvalidStatus("archived".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Invalid status: archived");
    }
}

//! REST handlers for the article endpoints.

use crate::error::{error_response, rejection_response, ApiError};
use crate::AppState;
use api_shared::{
    ArticleRes, CreateArticleReq, DeleteArticleReq, HealthRes, HealthService, ListArticlesQuery,
    ListArticlesRes, MessageRes, UpdateArticleReq,
};
use articles_core::constants::{ARTICLE_REMOVED_MESSAGE, ROUTE_NOT_FOUND_MESSAGE};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ListArticlesQuery),
    responses(
        (status = 200, description = "Filtered page of articles", body = ListArticlesRes)
    )
)]
/// List articles
///
/// Filters by case-insensitive title search and exact status, then returns the requested page.
/// A page past the end is an empty list, and unusable `page`/`limit` values fall back to their
/// defaults.
#[axum::debug_handler]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesQuery>,
) -> Json<ListArticlesRes> {
    let query = state.service.query(
        params.search.as_deref(),
        params.status.as_deref(),
        params.page.as_deref(),
        params.limit.as_deref(),
    );
    let data = state
        .service
        .list(&query)
        .into_iter()
        .map(ArticleRes::from)
        .collect();
    Json(ListArticlesRes { data })
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleReq,
    responses(
        (status = 200, description = "Article created", body = ArticleRes),
        (status = 400, description = "Missing or invalid fields", body = MessageRes)
    )
)]
/// Create an article
///
/// Requires `title`, `status` and `author`. Returns the stored record with its assigned id.
#[axum::debug_handler]
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleReq>, JsonRejection>,
) -> Result<Json<ArticleRes>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    match state.service.create(req.into()) {
        Ok(article) => Ok(Json(article.into())),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/articles",
    request_body = DeleteArticleReq,
    responses(
        (status = 200, description = "Article removed (or was already absent)", body = MessageRes),
        (status = 400, description = "Missing id", body = MessageRes)
    )
)]
/// Delete an article
///
/// Deleting an id that does not exist still succeeds.
#[axum::debug_handler]
pub async fn delete_article(
    State(state): State<AppState>,
    payload: Result<Json<DeleteArticleReq>, JsonRejection>,
) -> Result<Json<MessageRes>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    state.service.delete(req.id).map_err(error_response)?;
    Ok(Json(MessageRes::new(ARTICLE_REMOVED_MESSAGE)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article found", body = ArticleRes),
        (status = 404, description = "Article not found", body = MessageRes)
    )
)]
/// Fetch a single article
///
/// A non-numeric id is looked up as `0` and therefore reports not found.
#[axum::debug_handler]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleRes>, ApiError> {
    let article = state.service.get(Some(id.as_str())).map_err(error_response)?;
    Ok(Json(article.into()))
}

/// `GET /articles/` with an empty id segment, looked up as id `0`.
#[axum::debug_handler]
pub async fn get_article_without_id(
    State(state): State<AppState>,
) -> Result<Json<ArticleRes>, ApiError> {
    let article = state.service.get(None).map_err(error_response)?;
    Ok(Json(article.into()))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticleReq,
    responses(
        (status = 200, description = "Article updated", body = ArticleRes),
        (status = 400, description = "Invalid field value", body = MessageRes),
        (status = 404, description = "Article not found", body = MessageRes)
    )
)]
/// Partially update an article
///
/// Supplied fields replace the stored ones; the id always stays the one in the path.
#[axum::debug_handler]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateArticleReq>, JsonRejection>,
) -> Result<Json<ArticleRes>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    let article = state
        .service
        .update(Some(id.as_str()), req.into())
        .map_err(error_response)?;
    Ok(Json(article.into()))
}

/// `PUT /articles/` with an empty id segment, applied to id `0`.
#[axum::debug_handler]
pub async fn update_article_without_id(
    State(state): State<AppState>,
    payload: Result<Json<UpdateArticleReq>, JsonRejection>,
) -> Result<Json<ArticleRes>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    let article = state.service.update(None, req.into()).map_err(error_response)?;
    Ok(Json(article.into()))
}

/// JSON 404 for any path without a route.
pub async fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(MessageRes::new(ROUTE_NOT_FOUND_MESSAGE)))
}

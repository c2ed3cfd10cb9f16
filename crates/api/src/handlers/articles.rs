//! Handlers for the `/api/articles` resource.
//!
//! Validation runs before any storage access, so a rejected payload never
//! touches the database. Undecodable bodies and ids are rejected as
//! `400 BAD_REQUEST` by the extractors in [`crate::extract`].

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::article::{validate_article_input, ArticleDto, ArticleInput, ARTICLE_ENTITY};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::{ArticleRepo, UpdateOutcome};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ARTICLE_ENTITY,
        id,
    })
}

/// GET /api/articles
///
/// List every article. Returns an empty array when there are none.
pub async fn list_articles(State(state): State<AppState>) -> AppResult<Json<Vec<ArticleDto>>> {
    let articles = ArticleRepo::list(&state.pool).await?;

    Ok(Json(articles.into_iter().map(ArticleDto::from).collect()))
}

/// GET /api/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    AppPath(article_id): AppPath<DbId>,
) -> AppResult<Json<ArticleDto>> {
    let article = ArticleRepo::find_by_id(&state.pool, article_id)
        .await?
        .ok_or_else(|| not_found(article_id))?;

    Ok(Json(article.into()))
}

/// POST /api/articles
///
/// Create an article from trimmed input. Responds 201 with the new record
/// and a `Location` header pointing at it.
pub async fn create_article(
    State(state): State<AppState>,
    AppJson(input): AppJson<ArticleInput>,
) -> AppResult<impl IntoResponse> {
    let fields = validate_article_input(&input)?;

    let article = ArticleRepo::create(&state.pool, &fields).await?;

    tracing::info!(article_id = article.id, title = %article.title, "Article created");

    let location = format!("/api/articles/{}", article.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ArticleDto::from(article)),
    ))
}

/// PUT /api/articles/{id}
///
/// Replace title and content. Responds 204 with no body.
pub async fn update_article(
    State(state): State<AppState>,
    AppPath(article_id): AppPath<DbId>,
    AppJson(input): AppJson<ArticleInput>,
) -> AppResult<StatusCode> {
    let fields = validate_article_input(&input)?;

    match ArticleRepo::update(&state.pool, article_id, &fields).await {
        UpdateOutcome::Updated(_) => {
            tracing::info!(article_id, "Article updated");
            Ok(StatusCode::NO_CONTENT)
        }
        UpdateOutcome::NotFound => Err(not_found(article_id)),
        UpdateOutcome::Fault(err) => Err(AppError::Database(err)),
    }
}

/// DELETE /api/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    AppPath(article_id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ArticleRepo::delete(&state.pool, article_id).await?;

    if !deleted {
        return Err(not_found(article_id));
    }

    tracing::info!(article_id, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}

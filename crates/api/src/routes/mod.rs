pub mod articles;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                                        list, create
/// /articles/{id}                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/articles", articles::router())
}

pub mod health;
pub mod optimize;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts/generate                 generate a prompt (POST)
/// /prompts/suggestions/{category}   example prompts (GET, ?taskType=)
/// /prompts                          list, create (GET, POST)
/// /prompts/{id}                     get, update, delete
/// /prompts/{id}/use                 increment usage count (POST)
///
/// /optimize                         optimize a free-text prompt (POST)
/// /optimize/tips                    static tips catalogue (GET)
/// ```
///
/// Every route requires a Bearer token; `/health` sits outside this
/// tree at the root.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/prompts", prompts::router())
        .nest("/optimize", optimize::router())
}

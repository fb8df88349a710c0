//! Route definitions for prompt optimization.
//!
//! Mounted at `/optimize` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::optimize;
use crate::state::AppState;

/// Optimization routes.
///
/// ```text
/// POST /        -> optimize_prompt
/// GET  /tips    -> get_tips
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(optimize::optimize_prompt))
        .route("/tips", get(optimize::get_tips))
}

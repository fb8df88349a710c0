//! Route definitions for prompt generation and the saved-prompt library.
//!
//! Mounted at `/prompts` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{generate, prompts};
use crate::state::AppState;

/// Prompt routes.
///
/// ```text
/// POST   /generate                  -> generate_prompt
/// GET    /suggestions/{category}    -> get_suggestions
/// GET    /                          -> list_prompts
/// POST   /                          -> create_prompt
/// GET    /{id}                      -> get_prompt
/// PUT    /{id}                      -> update_prompt
/// DELETE /{id}                      -> delete_prompt
/// POST   /{id}/use                  -> record_usage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate::generate_prompt))
        .route("/suggestions/{category}", get(generate::get_suggestions))
        .route(
            "/",
            get(prompts::list_prompts).post(prompts::create_prompt),
        )
        .route(
            "/{id}",
            get(prompts::get_prompt)
                .put(prompts::update_prompt)
                .delete(prompts::delete_prompt),
        )
        .route("/{id}/use", post(prompts::record_usage))
}

use std::sync::Arc;

use promptly_gemini::GeminiService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptly_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Gemini adapter; degrades to the built-in composer when no API key
    /// is configured.
    pub gemini: Arc<GeminiService>,
}

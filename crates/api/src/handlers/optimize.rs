//! Handlers for prompt optimization and the tips catalogue.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use promptly_core::optimizer::{self, OptimizedPrompt};
use promptly_core::prompt;
use promptly_core::tips::{TipGroup, OPTIMIZATION_TIPS};
use promptly_gemini::GeminiQualityScore;

use crate::error::{AppError, AppResult, FieldError};
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /optimize
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub prompt: String,
}

/// Payload for an AI-optimized prompt.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiOptimizePayload {
    original_prompt: String,
    optimized_prompt: String,
    improvements: Vec<String>,
    quality_score: GeminiQualityScore,
    reasoning: String,
    ai_powered: bool,
    source: &'static str,
}

/// Payload for a locally optimized prompt. The full rule-engine result
/// (analysis, suggestions, metrics) is flattened into the envelope.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FallbackOptimizePayload {
    #[serde(flatten)]
    result: OptimizedPrompt,
    ai_powered: bool,
    source: &'static str,
}

/// Optimize a free-text prompt. Tries Gemini first; any adapter error,
/// including unparseable model output, routes to the built-in rule engine.
pub async fn optimize_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<OptimizeRequest>,
) -> AppResult<impl IntoResponse> {
    let text = input.prompt.trim().to_string();
    if let Err(e) = prompt::validate_prompt_text(&text) {
        return Err(AppError::ValidationFailed(vec![FieldError::new(
            "prompt",
            e.to_string(),
        )]));
    }

    if state.gemini.is_available() {
        match state.gemini.optimize_prompt(&text).await {
            Ok(optimized) => {
                tracing::info!(user_id = auth.user_id, source = "gemini", "Prompt optimized");
                return Ok(Json(SuccessResponse::new(GeminiOptimizePayload {
                    original_prompt: text,
                    optimized_prompt: optimized.optimized_prompt,
                    improvements: optimized.improvements,
                    quality_score: optimized.quality_score,
                    reasoning: optimized.reasoning,
                    ai_powered: true,
                    source: "gemini",
                }))
                .into_response());
            }
            Err(error) => {
                tracing::warn!(%error, "Gemini optimization failed, using fallback");
            }
        }
    }

    let result = optimizer::optimize(&text);
    tracing::info!(user_id = auth.user_id, source = "fallback", "Prompt optimized");

    Ok(Json(SuccessResponse::new(FallbackOptimizePayload {
        result,
        ai_powered: false,
        source: "fallback",
    }))
    .into_response())
}

// ---------------------------------------------------------------------------
// GET /optimize/tips
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TipsPayload {
    tips: &'static [TipGroup],
}

/// Serve the static optimization-tips catalogue.
pub async fn get_tips(_auth: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(SuccessResponse::new(TipsPayload {
        tips: OPTIMIZATION_TIPS,
    })))
}

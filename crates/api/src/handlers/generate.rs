//! Handlers for prompt generation and suggestions.
//!
//! Generation tries the Gemini adapter first when credentials are
//! configured; any adapter failure falls back to the built-in composer.
//! The response reports which engine produced the result.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use promptly_core::composer::{self, ComposedPrompt};
use promptly_core::prompt::{self, Category, OutputFormat, TaskData, Tone};
use promptly_gemini::{GeneratedPrompt, PromptSuggestion, SOURCE_GEMINI};

use crate::error::{AppError, AppResult, FieldError};
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /prompts/generate
// ---------------------------------------------------------------------------

/// Request body for prompt generation. Enum fields arrive as wire
/// strings and default when omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub task: String,
    pub role: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    pub category: Option<String>,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
}

/// The generated result, whichever engine produced it. Serialized
/// untagged so both shapes appear directly under `generatedPrompt`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GenerationOutcome {
    Gemini(GeneratedPrompt),
    Fallback(ComposedPrompt),
}

impl GenerationOutcome {
    fn source(&self) -> &'static str {
        match self {
            GenerationOutcome::Gemini(g) => g.source,
            GenerationOutcome::Fallback(f) => f.source,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratePayload {
    generated_prompt: GenerationOutcome,
    ai_powered: bool,
    message: &'static str,
}

/// Generate an optimized prompt from structured task data.
pub async fn generate_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let task = parse_task_data(input)?;

    let outcome = if state.gemini.is_available() {
        match state.gemini.generate_prompt(&task).await {
            Ok(generated) => GenerationOutcome::Gemini(generated),
            Err(error) => {
                tracing::warn!(%error, "Gemini generation failed, using fallback");
                GenerationOutcome::Fallback(composer::compose(&task))
            }
        }
    } else {
        GenerationOutcome::Fallback(composer::compose(&task))
    };

    // Only a cleanly parsed Gemini response counts as AI-powered; the
    // degraded raw-text wrap does not.
    let ai_powered = outcome.source() == SOURCE_GEMINI;
    let message = if ai_powered {
        "Generated using Google Gemini AI"
    } else {
        "Generated using built-in optimization engine"
    };

    tracing::info!(
        user_id = auth.user_id,
        source = outcome.source(),
        "Prompt generated",
    );

    Ok(Json(SuccessResponse::new(GeneratePayload {
        generated_prompt: outcome,
        ai_powered,
        message,
    })))
}

/// Validate the request and assemble a [`TaskData`], collecting every
/// field failure instead of stopping at the first.
fn parse_task_data(input: GenerateRequest) -> Result<TaskData, AppError> {
    let mut errors = Vec::new();

    let task = input.task.trim().to_string();
    if let Err(e) = prompt::validate_task(&task) {
        errors.push(FieldError::new("task", e.to_string()));
    }

    let role = normalize_optional(input.role);
    if let Some(ref r) = role {
        if let Err(e) = prompt::validate_role(r) {
            errors.push(FieldError::new("role", e.to_string()));
        }
    }

    let additional_context = normalize_optional(input.additional_context);
    if let Some(ref c) = additional_context {
        if let Err(e) = prompt::validate_additional_context(c) {
            errors.push(FieldError::new("additionalContext", e.to_string()));
        }
    }

    let tone = parse_enum_field(input.tone.as_deref(), Tone::parse, "tone", &mut errors);
    let format = parse_enum_field(
        input.format.as_deref(),
        OutputFormat::parse,
        "format",
        &mut errors,
    );
    let category = parse_enum_field(
        input.category.as_deref(),
        Category::parse,
        "category",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    Ok(TaskData {
        task,
        role,
        tone,
        format,
        category,
        date_context: normalize_optional(input.date_context),
        additional_context,
    })
}

/// Parse an optional wire string into its enum, recording a field error
/// on unknown values and falling back to the default.
fn parse_enum_field<T: Default>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<T, promptly_core::error::CoreError>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> T {
    match value {
        None => T::default(),
        Some(raw) => match parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                errors.push(FieldError::new(field, e.to_string()));
                T::default()
            }
        },
    }
}

/// Trim an optional field, treating blank strings as absent.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// GET /prompts/suggestions/:category
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionParams {
    pub task_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionsPayload {
    suggestions: Vec<PromptSuggestion>,
    category: &'static str,
    ai_powered: bool,
}

/// Produce example prompts for a category. Adapter failures never
/// surface here; the built-in catalogue covers them.
pub async fn get_suggestions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<SuggestionParams>,
) -> AppResult<impl IntoResponse> {
    let category = Category::parse(&category)?;
    let task_type = params.task_type.as_deref().unwrap_or("general");

    let suggestions = state.gemini.suggestions(category, task_type).await;

    Ok(Json(SuccessResponse::new(SuggestionsPayload {
        suggestions,
        category: category.as_str(),
        ai_powered: state.gemini.is_available(),
    })))
}

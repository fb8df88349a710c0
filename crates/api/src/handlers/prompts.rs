//! Handlers for the saved-prompt library.
//!
//! All operations are scoped to the authenticated owner. A prompt that
//! exists but belongs to someone else produces the same 404 as one that
//! does not exist at all.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use promptly_core::error::CoreError;
use promptly_core::pagination::{clamp_limit, clamp_page, PageInfo};
use promptly_core::prompt::{self, Category, OutputFormat, Tone};
use promptly_core::types::DbId;
use promptly_db::models::prompt::{CreatePrompt, PromptListParams, PromptRecord, UpdatePrompt};
use promptly_db::repositories::PromptRepo;

use crate::error::{AppError, AppResult, FieldError};
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn prompt_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Prompt",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /prompts
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListPayload {
    prompts: Vec<PromptRecord>,
    pagination: PageInfo,
}

/// List the caller's prompts, newest first, with optional category and
/// search filters.
pub async fn list_prompts(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PromptListParams>,
) -> AppResult<impl IntoResponse> {
    let mut errors = Vec::new();

    if let Some(ref category) = params.category {
        if let Err(e) = Category::parse(category) {
            errors.push(FieldError::new("category", e.to_string()));
        }
    }
    if let Some(ref search) = params.search {
        if let Err(e) = prompt::validate_search_term(search) {
            errors.push(FieldError::new("search", e.to_string()));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let offset = (page - 1) * limit;

    let category = params.category.as_deref();
    let search = params.search.as_deref();

    let prompts =
        PromptRepo::list(&state.pool, auth.user_id, category, search, limit, offset).await?;
    let total = PromptRepo::count(&state.pool, auth.user_id, category, search).await?;

    Ok(Json(SuccessResponse::new(ListPayload {
        prompts,
        pagination: PageInfo::compute(page, limit, total),
    })))
}

// ---------------------------------------------------------------------------
// POST /prompts
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    pub title: String,
    pub task: String,
    pub role: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    pub category: Option<String>,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
    pub generated_prompt: String,
}

#[derive(Serialize)]
struct PromptPayload {
    message: &'static str,
    prompt: PromptRecord,
}

/// Save a generated prompt to the caller's library.
pub async fn create_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePromptRequest>,
) -> AppResult<impl IntoResponse> {
    let input = validate_create(input)?;

    let record = PromptRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(prompt_id = record.id, user_id = auth.user_id, "Prompt created");

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(PromptPayload {
            message: "Prompt created successfully",
            prompt: record,
        })),
    ))
}

fn validate_create(input: CreatePromptRequest) -> Result<CreatePrompt, AppError> {
    let mut errors = Vec::new();

    let title = input.title.trim().to_string();
    if let Err(e) = prompt::validate_title(&title) {
        errors.push(FieldError::new("title", e.to_string()));
    }

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

    let generated_prompt = input.generated_prompt.trim().to_string();
    if let Err(e) = prompt::validate_prompt_text(&generated_prompt) {
        errors.push(FieldError::new("generatedPrompt", e.to_string()));
    }

    let tone = parse_wire_enum(input.tone.as_deref(), Tone::parse, "tone", &mut errors)
        .unwrap_or_default()
        .as_str()
        .to_string();
    let format = parse_wire_enum(
        input.format.as_deref(),
        OutputFormat::parse,
        "format",
        &mut errors,
    )
    .unwrap_or_default()
    .as_str()
    .to_string();
    let category = parse_wire_enum(
        input.category.as_deref(),
        Category::parse,
        "category",
        &mut errors,
    )
    .unwrap_or_default()
    .as_str()
    .to_string();

    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    Ok(CreatePrompt {
        title,
        task,
        role,
        tone,
        format,
        date_context: normalize_optional(input.date_context),
        additional_context,
        generated_prompt,
        category,
    })
}

// ---------------------------------------------------------------------------
// GET /prompts/:id
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GetPayload {
    prompt: PromptRecord,
}

/// Get a single prompt by id, owner scoped.
pub async fn get_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = PromptRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| prompt_not_found(id))?;

    Ok(Json(SuccessResponse::new(GetPayload { prompt: record })))
}

// ---------------------------------------------------------------------------
// PUT /prompts/:id
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptRequest {
    pub title: Option<String>,
    pub task: Option<String>,
    pub role: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    pub category: Option<String>,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
    pub generated_prompt: Option<String>,
    pub is_public: Option<bool>,
}

/// Partially update a prompt, owner scoped. Omitted fields are left
/// untouched.
pub async fn update_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePromptRequest>,
) -> AppResult<impl IntoResponse> {
    let patch = validate_update(input)?;

    let record = PromptRepo::update(&state.pool, id, auth.user_id, &patch)
        .await?
        .ok_or_else(|| prompt_not_found(id))?;

    tracing::info!(prompt_id = id, user_id = auth.user_id, "Prompt updated");

    Ok(Json(SuccessResponse::new(PromptPayload {
        message: "Prompt updated successfully",
        prompt: record,
    })))
}

fn validate_update(input: UpdatePromptRequest) -> Result<UpdatePrompt, AppError> {
    let mut errors = Vec::new();

    let title = input.title.map(|t| t.trim().to_string());
    if let Some(ref t) = title {
        if let Err(e) = prompt::validate_title(t) {
            errors.push(FieldError::new("title", e.to_string()));
        }
    }

    let task = input.task.map(|t| t.trim().to_string());
    if let Some(ref t) = task {
        if let Err(e) = prompt::validate_task(t) {
            errors.push(FieldError::new("task", e.to_string()));
        }
    }

    let role = input.role.map(|r| r.trim().to_string());
    if let Some(ref r) = role {
        if let Err(e) = prompt::validate_role(r) {
            errors.push(FieldError::new("role", e.to_string()));
        }
    }

    let additional_context = input.additional_context.map(|c| c.trim().to_string());
    if let Some(ref c) = additional_context {
        if let Err(e) = prompt::validate_additional_context(c) {
            errors.push(FieldError::new("additionalContext", e.to_string()));
        }
    }

    let generated_prompt = input.generated_prompt.map(|p| p.trim().to_string());
    if let Some(ref p) = generated_prompt {
        if let Err(e) = prompt::validate_prompt_text(p) {
            errors.push(FieldError::new("generatedPrompt", e.to_string()));
        }
    }

    let tone = parse_wire_enum(input.tone.as_deref(), Tone::parse, "tone", &mut errors)
        .map(|t| t.as_str().to_string());
    let format = parse_wire_enum(
        input.format.as_deref(),
        OutputFormat::parse,
        "format",
        &mut errors,
    )
    .map(|f| f.as_str().to_string());
    let category = parse_wire_enum(
        input.category.as_deref(),
        Category::parse,
        "category",
        &mut errors,
    )
    .map(|c| c.as_str().to_string());

    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    Ok(UpdatePrompt {
        title,
        task,
        role,
        tone,
        format,
        date_context: input.date_context.map(|d| d.trim().to_string()),
        additional_context,
        generated_prompt,
        category,
        is_public: input.is_public,
    })
}

// ---------------------------------------------------------------------------
// DELETE /prompts/:id
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MessagePayload {
    message: &'static str,
}

/// Delete a prompt, owner scoped.
pub async fn delete_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PromptRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(prompt_not_found(id));
    }

    tracing::info!(prompt_id = id, user_id = auth.user_id, "Prompt deleted");

    Ok(Json(SuccessResponse::new(MessagePayload {
        message: "Prompt deleted successfully",
    })))
}

// ---------------------------------------------------------------------------
// POST /prompts/:id/use
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsagePayload {
    message: &'static str,
    usage_count: i32,
}

/// Record one use of a prompt, owner scoped.
pub async fn record_usage(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let usage_count = PromptRepo::increment_usage(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| prompt_not_found(id))?;

    Ok(Json(SuccessResponse::new(UsagePayload {
        message: "Usage count updated",
        usage_count,
    })))
}

// ---------------------------------------------------------------------------
// Shared validation helpers
// ---------------------------------------------------------------------------

/// Parse an optional wire string into its enum, recording a field error
/// on unknown values.
fn parse_wire_enum<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<T, CoreError>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match value {
        None => None,
        Some(raw) => match parse(raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                errors.push(FieldError::new(field, e.to_string()));
                None
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

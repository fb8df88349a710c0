//! Prompt entity model and DTOs.
//!
//! Tone, format, and category are stored as their wire strings; the API
//! layer validates them against the `promptly_core::prompt` enums before
//! any write, and CHECK constraints in the schema back that up.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use promptly_core::types::{DbId, Timestamp};

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub task: String,
    pub role: Option<String>,
    pub tone: String,
    pub format: String,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
    pub generated_prompt: String,
    pub category: String,
    pub is_public: bool,
    pub likes: i32,
    pub usage_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for creating a prompt. Built by the API layer after
/// enum/length validation; tone, format, and category carry their wire
/// strings.
#[derive(Debug, Clone)]
pub struct CreatePrompt {
    pub title: String,
    pub task: String,
    pub role: Option<String>,
    pub tone: String,
    pub format: String,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
    pub generated_prompt: String,
    pub category: String,
}

/// Partial update. `None` fields are left untouched; `updated_at` is
/// always bumped. The owner is immutable and never part of an update.
#[derive(Debug, Clone, Default)]
pub struct UpdatePrompt {
    pub title: Option<String>,
    pub task: Option<String>,
    pub role: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
    pub generated_prompt: Option<String>,
    pub category: Option<String>,
    pub is_public: Option<bool>,
}

/// Query parameters for listing prompts (wire form).
#[derive(Debug, Deserialize)]
pub struct PromptListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
}

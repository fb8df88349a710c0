//! Prompt record enums, field limits, and validation.
//!
//! The tone/format/category vocabularies and the length limits are part of
//! the external API contract and are enforced both here (before any write)
//! and as CHECK constraints in the database schema.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field length limits
// ---------------------------------------------------------------------------

/// Maximum length for a saved prompt title.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for the task description.
pub const MAX_TASK_LENGTH: usize = 1_000;

/// Maximum length for the user-supplied role.
pub const MAX_ROLE_LENGTH: usize = 50;

/// Maximum length for additional context.
pub const MAX_ADDITIONAL_CONTEXT_LENGTH: usize = 500;

/// Maximum length for a generated or to-be-optimized prompt.
pub const MAX_PROMPT_LENGTH: usize = 2_000;

/// Maximum length for a list-endpoint search term.
pub const MAX_SEARCH_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Desired tone of the generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Casual,
    Formal,
    Enthusiastic,
    Technical,
    Creative,
    Analytical,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Formal => "formal",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Technical => "technical",
            Tone::Creative => "creative",
            Tone::Analytical => "analytical",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "casual" => Ok(Tone::Casual),
            "formal" => Ok(Tone::Formal),
            "enthusiastic" => Ok(Tone::Enthusiastic),
            "technical" => Ok(Tone::Technical),
            "creative" => Ok(Tone::Creative),
            "analytical" => Ok(Tone::Analytical),
            other => Err(CoreError::Validation(format!(
                "Invalid tone '{other}'. Must be one of: professional, friendly, casual, \
                 formal, enthusiastic, technical, creative, analytical"
            ))),
        }
    }
}

/// Desired output format. Wire values are the human-readable strings
/// ("bullet points", "step-by-step guide", ...), not identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Paragraph,
    BulletPoints,
    Table,
    StepByStepGuide,
    CodeSnippet,
    Essay,
    List,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Paragraph => "paragraph",
            OutputFormat::BulletPoints => "bullet points",
            OutputFormat::Table => "table",
            OutputFormat::StepByStepGuide => "step-by-step guide",
            OutputFormat::CodeSnippet => "code snippet",
            OutputFormat::Essay => "essay",
            OutputFormat::List => "list",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "paragraph" => Ok(OutputFormat::Paragraph),
            "bullet points" => Ok(OutputFormat::BulletPoints),
            "table" => Ok(OutputFormat::Table),
            "step-by-step guide" => Ok(OutputFormat::StepByStepGuide),
            "code snippet" => Ok(OutputFormat::CodeSnippet),
            "essay" => Ok(OutputFormat::Essay),
            "list" => Ok(OutputFormat::List),
            other => Err(CoreError::Validation(format!(
                "Invalid format '{other}'. Must be one of: paragraph, bullet points, table, \
                 step-by-step guide, code snippet, essay, list"
            ))),
        }
    }
}

/// Prompt category. Also doubles as the inferred task type in
/// [`crate::analysis::TaskAnalysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    General,
    Coding,
    Writing,
    Analysis,
    Creative,
    Business,
    Education,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Coding => "coding",
            Category::Writing => "writing",
            Category::Analysis => "analysis",
            Category::Creative => "creative",
            Category::Business => "business",
            Category::Education => "education",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "general" => Ok(Category::General),
            "coding" => Ok(Category::Coding),
            "writing" => Ok(Category::Writing),
            "analysis" => Ok(Category::Analysis),
            "creative" => Ok(Category::Creative),
            "business" => Ok(Category::Business),
            "education" => Ok(Category::Education),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be one of: general, coding, writing, \
                 analysis, creative, business, education"
            ))),
        }
    }
}

/// Inferred task complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Requirement extracted from the task text. Variant order is the canonical
/// enumeration order used when rendering requirement bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    SequentialProcess,
    ExamplesNeeded,
    DetailedOutput,
    ConciseOutput,
    BeginnerFriendly,
    AdvancedLevel,
}

impl Requirement {
    pub fn as_str(self) -> &'static str {
        match self {
            Requirement::SequentialProcess => "sequential_process",
            Requirement::ExamplesNeeded => "examples_needed",
            Requirement::DetailedOutput => "detailed_output",
            Requirement::ConciseOutput => "concise_output",
            Requirement::BeginnerFriendly => "beginner_friendly",
            Requirement::AdvancedLevel => "advanced_level",
        }
    }
}

// ---------------------------------------------------------------------------
// TaskData
// ---------------------------------------------------------------------------

/// Validated input describing the prompt the user wants generated.
///
/// Constructed by the API layer after enum parsing and length validation;
/// consumed by the composer and the Gemini adapter.
#[derive(Debug, Clone)]
pub struct TaskData {
    pub task: String,
    pub role: Option<String>,
    pub tone: Tone,
    pub format: OutputFormat,
    pub category: Category,
    pub date_context: Option<String>,
    pub additional_context: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a prompt title: non-empty, <= 100 chars.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters (got {})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a task description: non-empty, <= 1000 chars.
pub fn validate_task(task: &str) -> Result<(), CoreError> {
    if task.trim().is_empty() {
        return Err(CoreError::Validation("Task is required".to_string()));
    }
    if task.len() > MAX_TASK_LENGTH {
        return Err(CoreError::Validation(format!(
            "Task cannot exceed {MAX_TASK_LENGTH} characters (got {})",
            task.len()
        )));
    }
    Ok(())
}

/// Validate an optional role: <= 50 chars.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if role.len() > MAX_ROLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Role cannot exceed {MAX_ROLE_LENGTH} characters (got {})",
            role.len()
        )));
    }
    Ok(())
}

/// Validate additional context: <= 500 chars.
pub fn validate_additional_context(context: &str) -> Result<(), CoreError> {
    if context.len() > MAX_ADDITIONAL_CONTEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Additional context cannot exceed {MAX_ADDITIONAL_CONTEXT_LENGTH} characters (got {})",
            context.len()
        )));
    }
    Ok(())
}

/// Validate a generated (or to-be-optimized) prompt: non-empty, <= 2000 chars.
pub fn validate_prompt_text(prompt: &str) -> Result<(), CoreError> {
    if prompt.trim().is_empty() {
        return Err(CoreError::Validation("Prompt must not be empty".to_string()));
    }
    if prompt.len() > MAX_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt cannot exceed {MAX_PROMPT_LENGTH} characters (got {})",
            prompt.len()
        )));
    }
    Ok(())
}

/// Validate a list-endpoint search term: <= 100 chars.
pub fn validate_search_term(search: &str) -> Result<(), CoreError> {
    if search.len() > MAX_SEARCH_LENGTH {
        return Err(CoreError::Validation("Search term too long".to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! High-level Gemini service used by the HTTP handlers.
//!
//! Wraps the raw client with the prompt templates, response parsing,
//! and the degraded paths: generation falls back to wrapping the raw
//! model text, and suggestions fall back to a built-in catalogue.

use serde::{Deserialize, Serialize};

use promptly_core::prompt::{Category, TaskData};

use crate::client::{GeminiClient, GeminiError};
use crate::config::GeminiConfig;
use crate::extract::{extract_json_array, extract_json_object};

/// Provenance tag for a cleanly parsed Gemini generation.
pub const SOURCE_GEMINI: &str = "gemini";

/// Provenance tag for a Gemini generation whose JSON could not be
/// parsed, where the raw model text is served as the prompt.
pub const SOURCE_GEMINI_FALLBACK: &str = "gemini-fallback";

// ---- output types ----

/// Analysis section of an AI-generated prompt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAnalysis {
    pub task_type: String,
    pub complexity: String,
    pub key_requirements: Vec<String>,
    pub suggested_improvements: Vec<String>,
    pub word_count: usize,
    pub has_specific_domain: bool,
}

/// A fully generated prompt with its analysis and provenance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
    pub prompt: String,
    pub analysis: GeneratedAnalysis,
    pub optimizations: Vec<String>,
    pub confidence: u32,
    pub reasoning: String,
    pub source: &'static str,
}

/// Result of asking Gemini to optimize an existing prompt.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiOptimized {
    pub optimized_prompt: String,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub quality_score: GeminiQualityScore,
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiQualityScore {
    pub original: u32,
    pub optimized: u32,
}

/// One example prompt in a suggestions listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSuggestion {
    pub title: String,
    pub prompt: String,
    pub use_case: String,
}

// ---- parse-side types ----

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedGeneration {
    #[serde(default)]
    optimized_prompt: String,
    analysis: Option<ParsedAnalysis>,
    #[serde(default)]
    optimizations: Vec<String>,
    confidence: Option<u32>,
    reasoning: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedAnalysis {
    task_type: Option<String>,
    complexity: Option<String>,
    #[serde(default)]
    key_requirements: Vec<String>,
    #[serde(default)]
    suggested_improvements: Vec<String>,
}

/// Service facade over the Gemini API.
///
/// Constructed once at startup and shared through application state.
/// When no API key is configured, `client` is `None` and callers route
/// to the built-in composer instead.
pub struct GeminiService {
    client: Option<GeminiClient>,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        let client = match GeminiClient::from_config(&config) {
            Some(Ok(client)) => {
                tracing::info!(model = %config.model, "Gemini service initialized");
                Some(client)
            }
            Some(Err(error)) => {
                tracing::error!(%error, "failed to build Gemini HTTP client; AI generation disabled");
                None
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not provided; AI-powered generation disabled");
                None
            }
        };
        Self { client }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    /// Generate an optimized prompt from structured task data.
    ///
    /// A malformed model response is not an error: the raw text is
    /// wrapped with default analysis fields and tagged
    /// [`SOURCE_GEMINI_FALLBACK`].
    pub async fn generate_prompt(&self, task: &TaskData) -> Result<GeneratedPrompt, GeminiError> {
        let client = self.client.as_ref().ok_or(GeminiError::NotConfigured)?;

        let system = Self::system_prompt();
        let user = Self::user_prompt(task);
        let text = client.generate_content(&[system, &user]).await?;

        Ok(Self::parse_generation(text, task))
    }

    fn parse_generation(text: String, task: &TaskData) -> GeneratedPrompt {
        let parsed = extract_json_object(&text)
            .and_then(|json| serde_json::from_str::<ParsedGeneration>(json).ok())
            .filter(|p| !p.optimized_prompt.is_empty() && p.analysis.is_some());

        match parsed {
            Some(parsed) => {
                let word_count = parsed.optimized_prompt.split_whitespace().count();
                let analysis = parsed.analysis.unwrap_or(ParsedAnalysis {
                    task_type: None,
                    complexity: None,
                    key_requirements: Vec::new(),
                    suggested_improvements: Vec::new(),
                });
                GeneratedPrompt {
                    prompt: parsed.optimized_prompt,
                    analysis: GeneratedAnalysis {
                        task_type: analysis.task_type.unwrap_or_else(|| "general".to_string()),
                        complexity: analysis.complexity.unwrap_or_else(|| "medium".to_string()),
                        key_requirements: analysis.key_requirements,
                        suggested_improvements: analysis.suggested_improvements,
                        word_count,
                        has_specific_domain: task.category != Category::General,
                    },
                    optimizations: parsed.optimizations,
                    confidence: parsed.confidence.unwrap_or(75),
                    reasoning: parsed
                        .reasoning
                        .unwrap_or_else(|| "AI-optimized prompt generation".to_string()),
                    source: SOURCE_GEMINI,
                }
            }
            None => {
                tracing::warn!("Gemini response was not valid JSON, serving raw text");
                let word_count = text.split_whitespace().count();
                GeneratedPrompt {
                    prompt: text,
                    analysis: GeneratedAnalysis {
                        task_type: task.category.as_str().to_string(),
                        complexity: "medium".to_string(),
                        key_requirements: vec!["AI-generated optimization".to_string()],
                        suggested_improvements: Vec::new(),
                        word_count,
                        has_specific_domain: task.category != Category::General,
                    },
                    optimizations: vec!["AI-powered prompt optimization".to_string()],
                    confidence: 70,
                    reasoning: "Generated using Gemini AI with fallback parsing".to_string(),
                    source: SOURCE_GEMINI_FALLBACK,
                }
            }
        }
    }

    /// Optimize a free-text prompt. Unlike generation there is no raw-text
    /// fallback: a response without parseable JSON is an error.
    pub async fn optimize_prompt(&self, prompt: &str) -> Result<GeminiOptimized, GeminiError> {
        let client = self.client.as_ref().ok_or(GeminiError::NotConfigured)?;

        let request = Self::optimization_prompt(prompt);
        let text = client.generate_content(&[&request]).await?;

        let json = extract_json_object(&text)
            .ok_or_else(|| GeminiError::Parse("no JSON object in response".to_string()))?;
        serde_json::from_str(json).map_err(|e| GeminiError::Parse(e.to_string()))
    }

    /// Produce example prompts for a category. Failures are absorbed:
    /// the built-in catalogue is returned whenever the API is missing,
    /// unreachable, or returns unparseable output.
    pub async fn suggestions(&self, category: Category, task_type: &str) -> Vec<PromptSuggestion> {
        let Some(client) = self.client.as_ref() else {
            return fallback_suggestions(category);
        };

        let request = Self::suggestion_prompt(category, task_type);
        match client.generate_content(&[&request]).await {
            Ok(text) => extract_json_array(&text)
                .and_then(|json| serde_json::from_str(json).ok())
                .unwrap_or_else(|| fallback_suggestions(category)),
            Err(error) => {
                tracing::warn!(%error, "Gemini suggestions request failed, using built-ins");
                fallback_suggestions(category)
            }
        }
    }

    // ---- prompt templates ----

    fn system_prompt() -> &'static str {
        r#"You are an expert AI prompt engineer with deep knowledge of how to create highly effective prompts for AI systems. Your expertise includes:

1. **Prompt Architecture**: Understanding the optimal structure for different types of AI tasks
2. **Context Engineering**: Knowing how to provide the right amount and type of context
3. **Role Definition**: Creating precise role definitions that enhance AI performance
4. **Output Specification**: Defining clear output formats and quality standards
5. **Constraint Design**: Adding appropriate constraints and validation requirements

Your task is to analyze user input and generate a highly optimized, professional-grade prompt that will produce superior results from any AI system.

**Response Format**: You must respond with a JSON object containing:
{
  "optimizedPrompt": "The complete optimized prompt",
  "analysis": {
    "taskType": "coding|writing|analysis|creative|business|education|general",
    "complexity": "low|medium|high",
    "keyRequirements": ["requirement1", "requirement2"],
    "suggestedImprovements": ["improvement1", "improvement2"]
  },
  "optimizations": [
    "List of specific optimizations applied"
  ],
  "confidence": 85,
  "reasoning": "Explanation of the optimization approach"
}

**Quality Standards**:
- Create prompts that are clear, specific, and actionable
- Include appropriate role definitions and context
- Specify output formats and quality requirements
- Add validation and self-checking instructions
- Optimize for the specific task type and complexity level
- Ensure the prompt will work well across different AI models"#
    }

    fn user_prompt(task: &TaskData) -> String {
        format!(
            r#"Please analyze and optimize the following prompt request:

**Original Task**: {task}
**Intended Role**: {role}
**Desired Tone**: {tone}
**Output Format**: {format}
**Category**: {category}
**Date Context**: {date_context}
**Additional Context**: {additional_context}

Create a highly optimized, professional-grade prompt that will produce superior results. Focus on:

1. **Clear Role Definition**: Enhance or create an appropriate expert role
2. **Structured Task Description**: Break down the task into clear, actionable components
3. **Context Integration**: Incorporate all relevant context effectively
4. **Output Specification**: Define precise output requirements and format
5. **Quality Standards**: Add appropriate quality constraints and validation
6. **Domain Expertise**: Apply best practices specific to the task category

The optimized prompt should be significantly more effective than a basic prompt and suitable for professional use."#,
            task = task.task,
            role = task.role.as_deref().unwrap_or("Not specified"),
            tone = task.tone.as_str(),
            format = task.format.as_str(),
            category = task.category.as_str(),
            date_context = task.date_context.as_deref().unwrap_or("Not specified"),
            additional_context = task.additional_context.as_deref().unwrap_or("None"),
        )
    }

    fn optimization_prompt(prompt: &str) -> String {
        format!(
            r#"You are an expert prompt engineer. Analyze and optimize the following prompt:

**Original Prompt**: {prompt}

Please provide an optimized version that:
1. Improves clarity and specificity
2. Adds appropriate structure and formatting
3. Includes quality standards and constraints
4. Enhances the likelihood of getting better AI responses

Respond with a JSON object:
{{
  "optimizedPrompt": "The improved prompt",
  "improvements": ["list of specific improvements made"],
  "qualityScore": {{
    "original": 65,
    "optimized": 85
  }},
  "reasoning": "Explanation of optimization approach"
}}"#
        )
    }

    fn suggestion_prompt(category: Category, task_type: &str) -> String {
        format!(
            r#"Generate 5 high-quality prompt examples for the category "{category}" and task type "{task_type}".

Each prompt should be professional-grade and demonstrate best practices for that specific domain.

Respond with a JSON array:
[
  {{
    "title": "Prompt title",
    "prompt": "Complete optimized prompt",
    "useCase": "When to use this prompt"
  }}
]"#,
            category = category.as_str(),
        )
    }
}

/// Built-in example prompts served when the API cannot provide any.
/// Categories without a dedicated set reuse the coding examples.
pub fn fallback_suggestions(category: Category) -> Vec<PromptSuggestion> {
    let (title, prompt, use_case) = match category {
        Category::Writing => (
            "Content Strategy Expert",
            "You are a professional content strategist with expertise in audience engagement and SEO. Create compelling, well-structured content that resonates with the target audience while maintaining brand voice and achieving specific objectives.",
            "When creating marketing content or articles",
        ),
        Category::Business => (
            "Strategic Business Consultant",
            "You are a senior business consultant with extensive experience in strategy development and market analysis. Provide data-driven insights and actionable recommendations that consider market dynamics, competitive landscape, and business objectives.",
            "When developing business strategies or analyzing market opportunities",
        ),
        _ => (
            "Code Review Assistant",
            "You are a senior software engineer conducting a code review. Analyze the following code for best practices, potential bugs, security issues, and performance optimizations. Provide specific, actionable feedback with examples.",
            "When you need thorough code analysis and improvement suggestions",
        ),
    };

    vec![PromptSuggestion {
        title: title.to_string(),
        prompt: prompt.to_string(),
        use_case: use_case.to_string(),
    }]
}

//! Fallback prompt composer.
//!
//! Assembles a structured multi-section prompt from a [`TaskData`] record
//! using static lookup tables keyed by category, tone, format, and
//! complexity. This is the non-AI generation path: it must always succeed.

use serde::Serialize;

use crate::analysis::{analyze_task, confidence, TaskAnalysis};
use crate::prompt::{Category, Complexity, OutputFormat, Requirement, TaskData, Tone};

/// Provenance tag for locally composed prompts.
pub const SOURCE_FALLBACK: &str = "fallback";

/// Result of composing a prompt locally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPrompt {
    pub prompt: String,
    pub analysis: TaskAnalysis,
    pub optimizations: Vec<&'static str>,
    pub confidence: u32,
    pub source: &'static str,
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Expertise phrase for a user-supplied role, keyed by category and
/// complexity. General category falls through to the default.
fn role_expertise(category: Category, complexity: Complexity) -> &'static str {
    use Category::*;
    use Complexity::*;
    match (category, complexity) {
        (Coding, Low) => "experienced software developer",
        (Coding, Medium) => "senior software engineer with expertise in best practices",
        (Coding, High) => "principal software architect with deep technical knowledge",
        (Writing, Low) => "skilled content writer",
        (Writing, Medium) => "professional copywriter with editorial experience",
        (Writing, High) => "expert content strategist and published author",
        (Business, Low) => "business professional",
        (Business, Medium) => "senior business consultant with industry experience",
        (Business, High) => "executive business strategist with proven track record",
        (Analysis, Low) => "data analyst",
        (Analysis, Medium) => "senior research analyst with domain expertise",
        (Analysis, High) => "principal data scientist and research expert",
        (Creative, Low) => "creative professional",
        (Creative, Medium) => "senior creative director with diverse portfolio",
        (Creative, High) => "award-winning creative strategist and innovator",
        (Education, Low) => "knowledgeable instructor",
        (Education, Medium) => "experienced educator with curriculum expertise",
        (Education, High) => "master educator and learning specialist",
        (General, _) => "knowledgeable professional",
    }
}

/// Default role sentence when the user supplies none, keyed by category.
fn suggested_role(category: Category) -> &'static str {
    match category {
        Category::Coding => {
            "You are a senior software engineer with expertise in clean code, best practices, \
             and modern development methodologies."
        }
        Category::Writing => {
            "You are a professional content strategist and skilled writer with expertise in \
             creating engaging, well-structured content."
        }
        Category::Business => {
            "You are a senior business consultant with extensive experience in strategy, \
             operations, and market analysis."
        }
        Category::Analysis => {
            "You are a senior research analyst with expertise in data interpretation, critical \
             thinking, and comprehensive analysis."
        }
        Category::Creative => {
            "You are a creative director with a proven track record in innovative thinking, \
             design, and creative problem-solving."
        }
        Category::Education => {
            "You are an expert educator with deep knowledge in pedagogy, curriculum design, \
             and effective learning strategies."
        }
        Category::General => {
            "You are a knowledgeable professional with broad expertise and strong analytical \
             and communication skills."
        }
    }
}

/// Bullet sentence for an extracted requirement.
fn requirement_bullet(requirement: Requirement) -> &'static str {
    match requirement {
        Requirement::SequentialProcess => "- Provide a clear, step-by-step process",
        Requirement::ExamplesNeeded => "- Include relevant examples to illustrate points",
        Requirement::DetailedOutput => "- Provide comprehensive, detailed information",
        Requirement::ConciseOutput => "- Keep response concise and to the point",
        Requirement::BeginnerFriendly => "- Explain concepts in beginner-friendly terms",
        Requirement::AdvancedLevel => "- Provide advanced, expert-level insights",
    }
}

/// Output-format instruction sentence.
fn format_instruction(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Paragraph => {
            "Structure your response in well-organized paragraphs with clear topic sentences \
             and logical flow."
        }
        OutputFormat::BulletPoints => {
            "Present information using clear, concise bullet points with consistent formatting \
             and logical grouping."
        }
        OutputFormat::Table => {
            "Organize information in a well-structured table with appropriate headers and \
             clear categorization."
        }
        OutputFormat::StepByStepGuide => {
            "Create a numbered, sequential guide with clear action items and expected outcomes \
             for each step."
        }
        OutputFormat::CodeSnippet => {
            "Provide clean, well-commented code with explanations of key concepts and best \
             practices."
        }
        OutputFormat::Essay => {
            "Write a structured essay with introduction, body paragraphs with supporting \
             evidence, and conclusion."
        }
        OutputFormat::List => {
            "Create an organized list with clear hierarchy and consistent formatting throughout."
        }
    }
}

/// Category-conditional sentence appended to the format section.
fn format_addendum(category: Category, format: OutputFormat) -> Option<&'static str> {
    match category {
        Category::Coding if format != OutputFormat::CodeSnippet => Some(
            "Include code examples where relevant, with proper syntax highlighting and comments.",
        ),
        Category::Business => {
            Some("Include actionable insights and consider business impact in your formatting.")
        }
        Category::Education => Some(
            "Structure content for optimal learning with clear progression and knowledge checks.",
        ),
        _ => None,
    }
}

/// Tone constraint sentence for the quality-standards section.
fn tone_constraint(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "Maintain a professional, authoritative tone with industry-standard terminology."
        }
        Tone::Friendly => {
            "Use a warm, approachable tone while maintaining expertise and credibility."
        }
        Tone::Casual => "Adopt a conversational, relaxed tone that remains informative and helpful.",
        Tone::Formal => "Use formal language with precise terminology and structured presentation.",
        Tone::Enthusiastic => {
            "Convey enthusiasm and energy while maintaining accuracy and professionalism."
        }
        Tone::Technical => {
            "Use precise technical language with detailed explanations of complex concepts."
        }
        Tone::Creative => {
            "Employ creative language and innovative approaches while staying focused on objectives."
        }
        Tone::Analytical => {
            "Use logical, data-driven language with clear reasoning and evidence-based conclusions."
        }
    }
}

/// Complexity-tier bullet lines for the quality-standards section.
fn complexity_constraints(complexity: Complexity) -> &'static [&'static str] {
    match complexity {
        Complexity::High => &[
            "- Provide comprehensive coverage with advanced insights and nuanced understanding",
            "- Include multiple perspectives and consider edge cases",
        ],
        Complexity::Medium => {
            &["- Balance depth with accessibility, providing solid coverage without overwhelming detail"]
        }
        Complexity::Low => &["- Focus on clarity and simplicity while ensuring completeness"],
    }
}

/// Category-keyed bullet lines for the quality-standards section.
/// Empty for general.
fn category_constraints(category: Category) -> &'static [&'static str] {
    match category {
        Category::Coding => &[
            "- Follow coding best practices and include error handling considerations",
            "- Explain the reasoning behind technical decisions",
        ],
        Category::Writing => &[
            "- Ensure proper grammar, style, and readability",
            "- Maintain consistent voice and messaging",
        ],
        Category::Business => &[
            "- Consider practical implementation and business impact",
            "- Include relevant metrics or KPIs where applicable",
        ],
        Category::Analysis => &[
            "- Support conclusions with evidence and logical reasoning",
            "- Acknowledge limitations and assumptions",
        ],
        Category::Creative => &[
            "- Balance creativity with practicality and feasibility",
            "- Provide multiple creative options when appropriate",
        ],
        Category::Education => &[
            "- Structure content for progressive learning",
            "- Include knowledge checks or reflection points",
        ],
        Category::General => &[],
    }
}

/// Example-guidance sentence for the examples section.
fn example_guidance(category: Category) -> &'static str {
    match category {
        Category::Coding => {
            "Include practical code examples with explanations of how they work and why \
             they're effective."
        }
        Category::Writing => {
            "Provide sample text or content pieces that demonstrate the concepts being discussed."
        }
        Category::Business => {
            "Include real-world business scenarios or case studies that illustrate key points."
        }
        Category::Analysis => {
            "Provide data examples or analytical frameworks that demonstrate the methodology."
        }
        Category::Creative => {
            "Include creative examples or inspiration that showcase different approaches."
        }
        Category::Education => {
            "Provide learning examples or exercises that reinforce the concepts being taught."
        }
        Category::General => "Include relevant examples that clarify and support your main points.",
    }
}

/// Category-keyed bullet lines for the validation section. Empty for general.
fn category_validation(category: Category) -> &'static [&'static str] {
    match category {
        Category::Coding => &[
            "- Ensured code is syntactically correct and follows best practices",
            "- Included proper error handling and edge case considerations",
        ],
        Category::Writing => &[
            "- Checked for grammar, style, and readability",
            "- Ensured consistent tone and messaging throughout",
        ],
        Category::Business => &[
            "- Verified practical applicability and business relevance",
            "- Considered implementation challenges and solutions",
        ],
        Category::Analysis => &[
            "- Supported all conclusions with evidence",
            "- Acknowledged any limitations or assumptions made",
        ],
        Category::Creative => &[
            "- Balanced creativity with feasibility",
            "- Provided actionable and implementable ideas",
        ],
        Category::Education => &[
            "- Structured content for optimal learning progression",
            "- Included clear explanations of complex concepts",
        ],
        Category::General => &[],
    }
}

// ---------------------------------------------------------------------------
// Section builders
// ---------------------------------------------------------------------------

fn role_section(data: &TaskData, analysis: &TaskAnalysis) -> (String, &'static str) {
    match &data.role {
        Some(role) if !role.trim().is_empty() => {
            let expertise = role_expertise(data.category, analysis.complexity);
            (
                format!("You are a {expertise} acting as a {role}."),
                "Enhanced role definition with domain expertise",
            )
        }
        _ => (
            suggested_role(data.category).to_string(),
            "Auto-suggested optimal role based on task analysis",
        ),
    }
}

fn task_section(task: &str, analysis: &TaskAnalysis) -> String {
    let mut section = format!("**Primary Objective:**\n{task}");
    if !analysis.requirements.is_empty() {
        section.push_str("\n\n**Key Requirements:**");
        for requirement in &analysis.requirements {
            section.push('\n');
            section.push_str(requirement_bullet(*requirement));
        }
    }
    section
}

fn format_section(data: &TaskData) -> String {
    let mut section = format!("**Output Format:**\n{}", format_instruction(data.format));
    if let Some(addendum) = format_addendum(data.category, data.format) {
        section.push('\n');
        section.push_str(addendum);
    }
    section
}

fn quality_section(data: &TaskData, analysis: &TaskAnalysis) -> String {
    let mut section = format!("**Quality Standards:**\n- {}", tone_constraint(data.tone));
    for line in complexity_constraints(analysis.complexity) {
        section.push('\n');
        section.push_str(line);
    }
    for line in category_constraints(data.category) {
        section.push('\n');
        section.push_str(line);
    }
    section
}

fn validation_section(category: Category) -> String {
    let mut section = String::from(
        "**Validation and Quality Check:**\n\
         Before finalizing your response, verify that you have:\n\
         - Addressed all aspects of the primary objective\n\
         - Followed the specified format and quality standards\n\
         - Provided accurate and up-to-date information",
    );
    for line in category_validation(category) {
        section.push('\n');
        section.push_str(line);
    }
    section
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose an optimized prompt from the task data without any AI call.
///
/// Sections appear in a fixed order, separated by blank lines. Optional
/// sections (examples, additional context, date context) are included only
/// when their trigger condition holds.
pub fn compose(data: &TaskData) -> ComposedPrompt {
    let analysis = analyze_task(&data.task, data.category);
    let mut sections: Vec<String> = Vec::new();
    let mut optimizations: Vec<&'static str> = Vec::new();

    let (role, role_label) = role_section(data, &analysis);
    sections.push(role);
    optimizations.push(role_label);

    sections.push(task_section(&data.task, &analysis));
    optimizations.push("Decomposed task into clear, actionable components");

    sections.push(format_section(data));
    optimizations.push("Added specific output format guidelines");

    sections.push(quality_section(data, &analysis));
    optimizations.push("Included quality standards and constraints");

    if analysis.needs_examples {
        sections.push(format!(
            "**Examples and Illustrations:**\n{}",
            example_guidance(data.category)
        ));
        optimizations.push("Added example requirements for clarity");
    }

    if let Some(context) = data
        .additional_context
        .as_deref()
        .filter(|c| !c.trim().is_empty())
    {
        sections.push(format!(
            "**Additional Context Considerations:**\n{context}\n\n\
             Ensure your response addresses these specific context requirements while \
             maintaining focus on the primary objective."
        ));
        optimizations.push("Integrated additional context strategically");
    }

    if let Some(date) = data.date_context.as_deref().filter(|d| !d.trim().is_empty()) {
        sections.push(format!(
            "Consider information and best practices available up to {date}."
        ));
        optimizations.push("Added temporal context for accuracy");
    }

    sections.push(validation_section(data.category));
    optimizations.push("Added self-validation requirements");

    let confidence = confidence(&analysis, optimizations.len());

    ComposedPrompt {
        prompt: sections.join("\n\n"),
        analysis,
        optimizations,
        confidence,
        source: SOURCE_FALLBACK,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn task_data(task: &str) -> TaskData {
        TaskData {
            task: task.to_string(),
            role: None,
            tone: Tone::default(),
            format: OutputFormat::default(),
            category: Category::default(),
            date_context: None,
            additional_context: None,
        }
    }

    #[test]
    fn output_has_exactly_one_objective_and_one_validation_section() {
        let composed = compose(&task_data("Summarize the attached meeting notes"));
        assert_eq!(composed.prompt.matches("**Primary Objective:**").count(), 1);
        assert_eq!(
            composed
                .prompt
                .matches("**Validation and Quality Check:**")
                .count(),
            1
        );
    }

    #[test]
    fn additional_context_section_appears_iff_present() {
        let mut data = task_data("Summarize this");
        let without = compose(&data);
        assert!(!without.prompt.contains("**Additional Context Considerations:**"));

        data.additional_context = Some("Audience is executives".to_string());
        let with = compose(&data);
        assert!(with.prompt.contains("**Additional Context Considerations:**"));
        assert!(with.prompt.contains("Audience is executives"));
    }

    #[test]
    fn date_context_section_appears_iff_present() {
        let mut data = task_data("Summarize this");
        assert!(!compose(&data).prompt.contains("best practices available up to"));

        data.date_context = Some("March 2024".to_string());
        let composed = compose(&data);
        assert!(composed
            .prompt
            .contains("best practices available up to March 2024."));
    }

    #[test]
    fn blank_additional_context_is_treated_as_absent() {
        let mut data = task_data("Summarize this");
        data.additional_context = Some("   ".to_string());
        assert!(!compose(&data)
            .prompt
            .contains("**Additional Context Considerations:**"));
    }

    #[test]
    fn supplied_role_is_enhanced_with_expertise() {
        let mut data = task_data("Refactor this function for readability");
        data.category = Category::Coding;
        data.role = Some("code reviewer".to_string());
        let composed = compose(&data);
        assert!(composed.prompt.contains("acting as a code reviewer."));
        assert!(composed
            .optimizations
            .contains(&"Enhanced role definition with domain expertise"));
    }

    #[test]
    fn missing_role_uses_category_suggestion() {
        let mut data = task_data("Draft a blog post about rust");
        data.category = Category::Writing;
        let composed = compose(&data);
        assert!(composed
            .prompt
            .starts_with("You are a professional content strategist"));
        assert!(composed
            .optimizations
            .contains(&"Auto-suggested optimal role based on task analysis"));
    }

    #[test]
    fn requirements_render_as_bullets() {
        let composed = compose(&task_data("Explain this step by step with examples"));
        assert!(composed.prompt.contains("**Key Requirements:**"));
        assert!(composed
            .prompt
            .contains("- Provide a clear, step-by-step process"));
        assert!(composed
            .prompt
            .contains("- Include relevant examples to illustrate points"));
    }

    #[test]
    fn examples_section_for_coding_tasks() {
        let composed = compose(&task_data("fix this function"));
        // Coding task type forces needs_examples.
        assert!(composed.prompt.contains("**Examples and Illustrations:**"));
    }

    #[test]
    fn coding_format_addendum_skipped_for_code_snippets() {
        let mut data = task_data("write code for a parser");
        data.category = Category::Coding;
        data.format = OutputFormat::CodeSnippet;
        assert!(!compose(&data)
            .prompt
            .contains("proper syntax highlighting"));

        data.format = OutputFormat::Paragraph;
        assert!(compose(&data).prompt.contains("proper syntax highlighting"));
    }

    #[test]
    fn sections_are_blank_line_separated() {
        let composed = compose(&task_data("Summarize this"));
        assert!(composed.prompt.contains("\n\n**Output Format:**"));
        assert!(!composed.prompt.starts_with('\n'));
        assert!(!composed.prompt.ends_with('\n'));
    }

    #[test]
    fn confidence_reflects_applied_optimizations() {
        let composed = compose(&task_data("Summarize this"));
        // Base 70 plus 2 per optimization, no domain/requirement/complexity bonuses.
        assert_eq!(
            composed.confidence,
            70 + 2 * composed.optimizations.len() as u32
        );
        assert!(composed.confidence <= 95);
    }
}

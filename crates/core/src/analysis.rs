//! Task analysis for the fallback composer.
//!
//! Derives a transient [`TaskAnalysis`] from the raw task text: inferred
//! task type, complexity tier, requirement set, and whether worked examples
//! should be requested. Keyword precedence matters -- coding keywords are
//! checked before writing keywords, so "write code" classifies as coding.

use serde::Serialize;

use crate::prompt::{Category, Complexity, Requirement};

/// Words that push a task into the "high" complexity tier.
const COMPLEXITY_INDICATORS: &[&str] = &[
    "complex",
    "advanced",
    "detailed",
    "comprehensive",
    "in-depth",
    "thorough",
];

/// Task length (characters) above which an otherwise simple task is
/// considered medium complexity.
const MEDIUM_COMPLEXITY_LENGTH: usize = 100;

/// Maximum reported confidence for locally composed prompts.
pub const MAX_CONFIDENCE: u32 = 95;

/// Transient analysis of a task description. Never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysis {
    #[serde(serialize_with = "serialize_category")]
    pub task_type: Category,
    #[serde(serialize_with = "serialize_complexity")]
    pub complexity: Complexity,
    pub needs_examples: bool,
    #[serde(serialize_with = "serialize_requirements")]
    pub requirements: Vec<Requirement>,
    pub word_count: usize,
    pub has_specific_domain: bool,
}

fn serialize_category<S: serde::Serializer>(c: &Category, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(c.as_str())
}

fn serialize_complexity<S: serde::Serializer>(c: &Complexity, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(c.as_str())
}

fn serialize_requirements<S: serde::Serializer>(
    reqs: &[Requirement],
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_seq(reqs.iter().map(|r| r.as_str()))
}

/// Infer the task type from keyword precedence. First match wins:
/// coding, writing, analysis, creative, business, education, general.
fn infer_task_type(task_lower: &str) -> Category {
    let groups: [(&[&str], Category); 6] = [
        (&["code", "program", "function"], Category::Coding),
        (&["write", "article", "content"], Category::Writing),
        (&["analyze", "research", "study"], Category::Analysis),
        (&["create", "design", "brainstorm"], Category::Creative),
        (&["plan", "strategy", "business"], Category::Business),
        (&["explain", "teach", "learn"], Category::Education),
    ];
    for (keywords, category) in groups {
        if keywords.iter().any(|k| task_lower.contains(k)) {
            return category;
        }
    }
    Category::General
}

/// Extract requirements via six independent keyword checks. Non-exclusive;
/// output preserves the canonical requirement order.
pub fn extract_requirements(task: &str) -> Vec<Requirement> {
    let task_lower = task.to_lowercase();
    let mut requirements = Vec::new();

    if task_lower.contains("step by step") || task_lower.contains("steps") {
        requirements.push(Requirement::SequentialProcess);
    }
    if task_lower.contains("example") || task_lower.contains("sample") {
        requirements.push(Requirement::ExamplesNeeded);
    }
    if task_lower.contains("detailed") || task_lower.contains("comprehensive") {
        requirements.push(Requirement::DetailedOutput);
    }
    if task_lower.contains("quick") || task_lower.contains("brief") || task_lower.contains("summary")
    {
        requirements.push(Requirement::ConciseOutput);
    }
    if task_lower.contains("beginner") || task_lower.contains("simple") {
        requirements.push(Requirement::BeginnerFriendly);
    }
    if task_lower.contains("advanced") || task_lower.contains("expert") {
        requirements.push(Requirement::AdvancedLevel);
    }

    requirements
}

/// Analyze a task description in the context of its declared category.
pub fn analyze_task(task: &str, category: Category) -> TaskAnalysis {
    let task_lower = task.to_lowercase();

    let task_type = infer_task_type(&task_lower);

    let complexity = if COMPLEXITY_INDICATORS.iter().any(|k| task_lower.contains(k)) {
        Complexity::High
    } else if task.len() > MEDIUM_COMPLEXITY_LENGTH {
        Complexity::Medium
    } else {
        Complexity::Low
    };

    let needs_examples = task_lower.contains("example")
        || task_lower.contains("sample")
        || task_type == Category::Coding
        || complexity == Complexity::High;

    TaskAnalysis {
        task_type,
        complexity,
        needs_examples,
        requirements: extract_requirements(task),
        word_count: task.split_whitespace().count(),
        has_specific_domain: category != Category::General,
    }
}

/// Confidence score for a locally composed prompt.
///
/// Base 70; +10 for a specific domain; +10 when more than two requirements
/// were extracted; +5 for high complexity; +2 per applied optimization
/// (capped at +20). Clamped to 95.
pub fn confidence(analysis: &TaskAnalysis, optimization_count: usize) -> u32 {
    let mut confidence: u32 = 70;
    if analysis.has_specific_domain {
        confidence += 10;
    }
    if analysis.requirements.len() > 2 {
        confidence += 10;
    }
    if analysis.complexity == Complexity::High {
        confidence += 5;
    }
    confidence += (optimization_count as u32 * 2).min(20);
    confidence.min(MAX_CONFIDENCE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coding_keywords_win_over_writing_keywords() {
        let analysis = analyze_task("write code to program a function", Category::General);
        assert_eq!(analysis.task_type, Category::Coding);
    }

    #[test]
    fn writing_detected_without_coding_keywords() {
        let analysis = analyze_task("write an article about bees", Category::General);
        assert_eq!(analysis.task_type, Category::Writing);
    }

    #[test]
    fn unmatched_task_is_general() {
        let analysis = analyze_task("summarize this meeting", Category::General);
        assert_eq!(analysis.task_type, Category::General);
    }

    #[test]
    fn complexity_tiers() {
        assert_eq!(
            analyze_task("quick task", Category::General).complexity,
            Complexity::Low
        );
        let long_task = "describe the quarterly revenue trends across all regions and \
                         note anything unusual about the seasonal patterns we saw";
        assert_eq!(
            analyze_task(long_task, Category::General).complexity,
            Complexity::Medium
        );
        assert_eq!(
            analyze_task("a comprehensive review", Category::General).complexity,
            Complexity::High
        );
    }

    #[test]
    fn coding_tasks_always_need_examples() {
        let analysis = analyze_task("fix this function", Category::General);
        assert!(analysis.needs_examples);
    }

    #[test]
    fn high_complexity_needs_examples() {
        let analysis = analyze_task("an in-depth tour of the topic", Category::General);
        assert!(analysis.needs_examples);
    }

    #[test]
    fn requirement_extraction_superset() {
        let reqs =
            extract_requirements("Explain this step by step with examples for beginners");
        assert!(reqs.contains(&Requirement::SequentialProcess));
        assert!(reqs.contains(&Requirement::ExamplesNeeded));
        assert!(reqs.contains(&Requirement::BeginnerFriendly));
    }

    #[test]
    fn requirements_preserve_canonical_order() {
        let reqs = extract_requirements("advanced detailed steps");
        assert_eq!(
            reqs,
            vec![
                Requirement::SequentialProcess,
                Requirement::DetailedOutput,
                Requirement::AdvancedLevel,
            ]
        );
    }

    #[test]
    fn specific_domain_follows_category_not_task() {
        assert!(analyze_task("whatever", Category::Coding).has_specific_domain);
        assert!(!analyze_task("whatever", Category::General).has_specific_domain);
    }

    #[test]
    fn confidence_is_clamped_at_95() {
        let analysis = analyze_task(
            "a comprehensive advanced detailed step by step sample for beginners",
            Category::Coding,
        );
        assert_eq!(confidence(&analysis, 50), MAX_CONFIDENCE);
    }

    #[test]
    fn confidence_base_case() {
        let analysis = analyze_task("short", Category::General);
        assert_eq!(confidence(&analysis, 0), 70);
    }
}

//! Fallback prompt optimizer.
//!
//! Scores an existing prompt, derives an ordered list of rewrite rules from
//! the structural flags, applies the rule fragments, and reports before/after
//! metrics. Two "optimized quality" figures are reported: the capped-bonus
//! figure (`quality_score.optimized = min(original + 15, 95)`) and the truly
//! recomputed one inside `metrics`. Both are part of the response contract
//! and are intentionally not unified.

use serde::Serialize;

use crate::scoring::{self, PromptStructure};

/// Fixed quality bonus reported for the built-in optimization path.
const QUALITY_BONUS: u32 = 15;

/// Ceiling for the reported optimized quality.
const QUALITY_CEILING: u32 = 95;

/// Word count below which a prompt is flagged as too short.
const MIN_WORD_COUNT: usize = 10;

/// Word count above which a prompt is flagged as too long.
const MAX_WORD_COUNT: usize = 150;

/// Clarity score below which the clarity rule fires.
const LOW_CLARITY_THRESHOLD: u32 = 70;

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Full structural and score analysis of a prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalysis {
    pub length: usize,
    pub word_count: usize,
    pub sentences: usize,
    pub has_role: bool,
    pub has_context: bool,
    pub has_format: bool,
    pub has_examples: bool,
    pub has_constraints: bool,
    pub clarity: u32,
    pub specificity: u32,
    pub completeness: u32,
    #[serde(rename = "type")]
    pub prompt_type: &'static str,
    pub quality_score: u32,
}

/// Infer a coarse prompt type for optimization decisions.
///
/// This uses its own keyword order (creative before business, and
/// "educational" rather than "education") -- it is a separate vocabulary
/// from the composer's task-type inference and is kept that way because
/// the value is surfaced in the analysis payload.
fn prompt_type(prompt_lower: &str) -> &'static str {
    if prompt_lower.contains("code") || prompt_lower.contains("program") {
        "coding"
    } else if prompt_lower.contains("write") || prompt_lower.contains("article") {
        "writing"
    } else if prompt_lower.contains("analyze") || prompt_lower.contains("research") {
        "analysis"
    } else if prompt_lower.contains("create") || prompt_lower.contains("design") {
        "creative"
    } else if prompt_lower.contains("explain") || prompt_lower.contains("teach") {
        "educational"
    } else if prompt_lower.contains("plan") || prompt_lower.contains("strategy") {
        "business"
    } else {
        "general"
    }
}

/// Analyze a prompt's structure, scores, and type.
pub fn analyze_structure(prompt: &str) -> PromptAnalysis {
    let structure: PromptStructure = scoring::structure(prompt);

    let clarity = scoring::clarity(prompt);
    let specificity = scoring::specificity(prompt);
    let completeness = scoring::completeness(prompt);
    let quality_score = scoring::quality(clarity, specificity, completeness, &structure);

    PromptAnalysis {
        length: structure.length,
        word_count: structure.word_count,
        sentences: structure.sentences,
        has_role: structure.has_role,
        has_context: structure.has_context,
        has_format: structure.has_format,
        has_examples: structure.has_examples,
        has_constraints: structure.has_constraints,
        clarity,
        specificity,
        completeness,
        prompt_type: prompt_type(&prompt.to_lowercase()),
        quality_score,
    }
}

// ---------------------------------------------------------------------------
// Optimization rules
// ---------------------------------------------------------------------------

/// A single optimization rule that fired, with its applied label, the
/// user-facing suggestion, and the rewrite fragment (if any).
struct Rule {
    label: &'static str,
    suggestion: &'static str,
    rewrite: Rewrite,
}

enum Rewrite {
    Prepend(&'static str),
    Append(&'static str),
    /// Advisory only: the rule reports a label and suggestion but does not
    /// rewrite the text (length rules).
    None,
}

/// Derive the ordered rule list from the analysis. The ordering is fixed:
/// role, context, format, clarity, constraints, then exactly one of the
/// two mutually exclusive length rules.
fn derive_rules(analysis: &PromptAnalysis) -> Vec<Rule> {
    let mut rules = Vec::new();

    if !analysis.has_role {
        rules.push(Rule {
            label: "Add role definition for better context",
            suggestion: "Consider adding 'Act as a [specific role]' to establish expertise context",
            rewrite: Rewrite::Prepend("You are an expert assistant with specialized knowledge. "),
        });
    }
    if !analysis.has_context && analysis.prompt_type != "general" {
        rules.push(Rule {
            label: "Enhance context specification",
            suggestion: "Provide more background context to improve response relevance",
            rewrite: Rewrite::Append(
                " Consider relevant context and provide practical, applicable information.",
            ),
        });
    }
    if !analysis.has_format {
        rules.push(Rule {
            label: "Add output format specification",
            suggestion: "Specify desired output format (list, paragraph, table, etc.)",
            rewrite: Rewrite::Append(" Please structure your response clearly and logically."),
        });
    }
    if analysis.clarity < LOW_CLARITY_THRESHOLD {
        rules.push(Rule {
            label: "Improve clarity and specificity",
            suggestion: "Use more specific language and clear instructions",
            rewrite: Rewrite::None,
        });
    }
    if !analysis.has_constraints {
        rules.push(Rule {
            label: "Add quality constraints",
            suggestion: "Include specific requirements or constraints for better results",
            rewrite: Rewrite::Append(" Ensure your response is accurate, comprehensive, and actionable."),
        });
    }
    if analysis.word_count < MIN_WORD_COUNT {
        rules.push(Rule {
            label: "Expand prompt detail",
            suggestion: "Provide more detailed instructions for better AI understanding",
            rewrite: Rewrite::None,
        });
    } else if analysis.word_count > MAX_WORD_COUNT {
        rules.push(Rule {
            label: "Optimize prompt length",
            suggestion: "Consider breaking down into more focused, specific requests",
            rewrite: Rewrite::None,
        });
    }

    rules
}

fn apply_rules(prompt: &str, rules: &[Rule]) -> String {
    let mut optimized = prompt.to_string();
    for rule in rules {
        match rule.rewrite {
            Rewrite::Prepend(fragment) => optimized.insert_str(0, fragment),
            Rewrite::Append(fragment) => optimized.push_str(fragment),
            Rewrite::None => {}
        }
    }
    optimized
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Before/after quality pair. `optimized` is the capped-bonus figure, not
/// the recomputed score (see module docs).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    pub original: u32,
    pub optimized: u32,
}

/// Recomputed before/after metrics. Deltas can be negative.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementMetrics {
    pub original_length: usize,
    pub optimized_length: usize,
    pub original_quality: u32,
    pub optimized_quality: u32,
    pub improvement_score: i64,
    pub clarity_improvement: i64,
    pub specificity_improvement: i64,
    pub completeness_improvement: i64,
}

/// Result of the built-in optimization path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedPrompt {
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub analysis: PromptAnalysis,
    pub improvements: Vec<&'static str>,
    pub suggestions: Vec<&'static str>,
    pub quality_score: QualityScore,
    pub metrics: ImprovementMetrics,
    pub reasoning: &'static str,
}

// ---------------------------------------------------------------------------
// Optimization
// ---------------------------------------------------------------------------

/// Optimize an existing prompt using the built-in rules.
pub fn optimize(prompt: &str) -> OptimizedPrompt {
    let analysis = analyze_structure(prompt);
    let rules = derive_rules(&analysis);
    let optimized_prompt = apply_rules(prompt, &rules);
    let optimized_analysis = analyze_structure(&optimized_prompt);

    let metrics = ImprovementMetrics {
        original_length: prompt.len(),
        optimized_length: optimized_prompt.len(),
        original_quality: analysis.quality_score,
        optimized_quality: optimized_analysis.quality_score,
        improvement_score: i64::from(optimized_analysis.quality_score)
            - i64::from(analysis.quality_score),
        clarity_improvement: i64::from(optimized_analysis.clarity) - i64::from(analysis.clarity),
        specificity_improvement: i64::from(optimized_analysis.specificity)
            - i64::from(analysis.specificity),
        completeness_improvement: i64::from(optimized_analysis.completeness)
            - i64::from(analysis.completeness),
    };

    let quality_score = QualityScore {
        original: analysis.quality_score,
        optimized: (analysis.quality_score + QUALITY_BONUS).min(QUALITY_CEILING),
    };

    OptimizedPrompt {
        original_prompt: prompt.to_string(),
        optimized_prompt,
        improvements: rules.iter().map(|r| r.label).collect(),
        suggestions: rules.iter().map(|r| r.suggestion).collect(),
        analysis,
        quality_score,
        metrics,
        reasoning: "Applied built-in optimization rules and best practices",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_quality_is_exactly_capped_bonus() {
        for prompt in [
            "short",
            "Act as a teacher. Explain exactly how recursion works, step by step, \
             given this context. You must format it as a list with examples.",
            "Summarize the attached quarterly report",
        ] {
            let result = optimize(prompt);
            assert_eq!(
                result.quality_score.optimized,
                (result.quality_score.original + 15).min(95),
                "capped-bonus equation violated for {prompt:?}"
            );
        }
    }

    #[test]
    fn role_fragment_is_prepended() {
        let result = optimize("Summarize the meeting notes");
        assert!(result
            .optimized_prompt
            .starts_with("You are an expert assistant with specialized knowledge. "));
        assert!(result
            .improvements
            .contains(&"Add role definition for better context"));
    }

    #[test]
    fn role_rule_skipped_when_role_present() {
        let result = optimize("You are a lawyer. Review this contract");
        assert!(!result
            .improvements
            .contains(&"Add role definition for better context"));
        assert!(result.optimized_prompt.starts_with("You are a lawyer."));
    }

    #[test]
    fn context_rule_only_fires_for_non_general_types() {
        // General type, no context: rule must not fire.
        let general = optimize("Summarize the meeting notes");
        assert_eq!(general.analysis.prompt_type, "general");
        assert!(!general
            .improvements
            .contains(&"Enhance context specification"));

        // Coding type, no context: rule fires.
        let coding = optimize("Fix the code in this module");
        assert_eq!(coding.analysis.prompt_type, "coding");
        assert!(coding
            .improvements
            .contains(&"Enhance context specification"));
    }

    #[test]
    fn length_rules_are_mutually_exclusive() {
        let short = optimize("hi");
        assert!(short.improvements.contains(&"Expand prompt detail"));
        assert!(!short.improvements.contains(&"Optimize prompt length"));

        let long_prompt = "word ".repeat(200);
        let long = optimize(&long_prompt);
        assert!(long.improvements.contains(&"Optimize prompt length"));
        assert!(!long.improvements.contains(&"Expand prompt detail"));
    }

    #[test]
    fn advisory_rules_do_not_rewrite_text() {
        // Short prompt with role, context, format, and constraints present:
        // only the advisory clarity and length rules fire, so the text
        // must come back unchanged.
        let prompt = "You are a guide: given context, must format it";
        let result = optimize(prompt);
        assert_eq!(
            result.improvements,
            vec!["Improve clarity and specificity", "Expand prompt detail"]
        );
        assert_eq!(result.optimized_prompt, prompt);
    }

    #[test]
    fn prompt_type_uses_optimizer_vocabulary() {
        assert_eq!(optimize("teach me fractions").analysis.prompt_type, "educational");
        // Optimizer checks creative keywords before business keywords.
        assert_eq!(
            optimize("create a plan for the launch").analysis.prompt_type,
            "creative"
        );
    }

    #[test]
    fn metrics_reflect_recomputation_not_bonus() {
        let result = optimize("Summarize the meeting notes");
        assert_eq!(
            result.metrics.improvement_score,
            i64::from(result.metrics.optimized_quality) - i64::from(result.metrics.original_quality)
        );
        assert_eq!(result.metrics.original_length, result.original_prompt.len());
        assert_eq!(
            result.metrics.optimized_length,
            result.optimized_prompt.len()
        );
    }

    #[test]
    fn suggestions_track_improvements_one_to_one() {
        let result = optimize("hi");
        assert_eq!(result.improvements.len(), result.suggestions.len());
    }
}

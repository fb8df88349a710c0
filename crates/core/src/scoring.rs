//! Heuristic prompt scoring.
//!
//! Pure functions computing clarity / specificity / completeness / quality
//! scores in `[0, 100]` from a text string via fixed, case-insensitive
//! regex checks and linear weighting. No tokenizer state is carried between
//! calls: scoring the same string twice yields identical results.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Keyword patterns
// ---------------------------------------------------------------------------
// Word-boundary patterns match whole words; the structural indicator
// patterns are deliberately plain substring matches ("as a" inside
// "as always" counts).

static CLARITY_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(clearly|specifically|exactly|precisely)\b").expect("valid regex"));

static QUESTION_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(what|how|why|when|where)\b").expect("valid regex"));

static HEDGE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(maybe|perhaps|possibly|might)\b").expect("valid regex"));

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\b").expect("valid regex"));

static SPECIFIC_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(exactly|precisely|specifically|detailed)\b").expect("valid regex"));

static INCLUSION_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(include|contain|cover|address)\b").expect("valid regex"));

static ROLE_INDICATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(act as|you are|as a)").expect("valid regex"));

static CONTEXT_INDICATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(context|background|given|considering)").expect("valid regex"));

static FORMAT_INDICATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(format|structure|organize|present)").expect("valid regex"));

static EXAMPLE_INDICATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(example|sample|instance|such as)").expect("valid regex"));

static CONSTRAINT_INDICATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(must|should|ensure|avoid|don't)").expect("valid regex"));

// The completeness component checks use slightly narrower indicator sets
// than the structural flags above. The divergence is externally
// observable through the scores, so it stays.

static COMPLETENESS_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(context|background|given)").expect("valid regex"));

static COMPLETENESS_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(format|structure|list|table)").expect("valid regex"));

static COMPLETENESS_CONSTRAINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(must|should|ensure|avoid)").expect("valid regex"));

static COMPLETENESS_EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(example|sample|like)").expect("valid regex"));

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

/// Structural properties of a prompt derived from single regex tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStructure {
    /// Length in characters (bytes, matching the validation limits).
    pub length: usize,
    /// Whitespace-separated word count.
    pub word_count: usize,
    /// Number of sentence-like fragments (split on `.`, `!`, `?`).
    pub sentences: usize,
    pub has_role: bool,
    pub has_context: bool,
    pub has_format: bool,
    pub has_examples: bool,
    pub has_constraints: bool,
}

/// Analyze the structural flags and counts of a prompt.
pub fn structure(text: &str) -> PromptStructure {
    PromptStructure {
        length: text.len(),
        word_count: text.split_whitespace().count(),
        sentences: sentence_count(text),
        has_role: ROLE_INDICATOR.is_match(text),
        has_context: CONTEXT_INDICATOR.is_match(text),
        has_format: FORMAT_INDICATOR.is_match(text),
        has_examples: EXAMPLE_INDICATOR.is_match(text),
        has_constraints: CONSTRAINT_INDICATOR.is_match(text),
    }
}

fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn has_sentence_terminator(text: &str) -> bool {
    text.contains(['.', '!', '?'])
}

fn clamp_score(score: i32) -> u32 {
    score.clamp(0, 100) as u32
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Clarity score in `[0, 100]`.
///
/// Base 50; +15 for explicit clarity words; +10 for step-by-step phrasing;
/// +10 for interrogative words; -10 for hedging words; -15 when a text
/// longer than 100 characters has no sentence punctuation at all.
pub fn clarity(text: &str) -> u32 {
    let mut score: i32 = 50;
    if CLARITY_WORDS.is_match(text) {
        score += 15;
    }
    if text.contains("step by step") || text.contains("step-by-step") {
        score += 10;
    }
    if QUESTION_WORDS.is_match(text) {
        score += 10;
    }
    if HEDGE_WORDS.is_match(text) {
        score -= 10;
    }
    if !has_sentence_terminator(text) && text.len() > 100 {
        score -= 15;
    }
    clamp_score(score)
}

/// Specificity score in `[0, 100]`.
///
/// Base 30; +5 per distinct standalone numeric token (capped at +20);
/// +15 for precision words; +10 for inclusion verbs; +10 when the text is
/// longer than 50 characters.
pub fn specificity(text: &str) -> u32 {
    let mut score: i32 = 30;

    let distinct_numbers: HashSet<&str> =
        NUMERIC_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    score += (distinct_numbers.len() as i32 * 5).min(20);

    if SPECIFIC_WORDS.is_match(text) {
        score += 15;
    }
    if INCLUSION_WORDS.is_match(text) {
        score += 10;
    }
    if text.len() > 50 {
        score += 10;
    }
    clamp_score(score)
}

/// Completeness score in `[0, 100]`.
///
/// Base 20, +13 for each of six independent component checks.
pub fn completeness(text: &str) -> u32 {
    let components = [
        ROLE_INDICATOR.is_match(text),
        text.len() > 20,
        COMPLETENESS_CONTEXT.is_match(text),
        COMPLETENESS_FORMAT.is_match(text),
        COMPLETENESS_CONSTRAINT.is_match(text),
        COMPLETENESS_EXAMPLE.is_match(text),
    ];
    let present = components.iter().filter(|&&c| c).count() as i32;
    clamp_score(20 + present * 13)
}

/// Overall quality score: weighted sum of the three component scores plus
/// a structure score (25 points per structural flag, examples excluded),
/// rounded to the nearest integer.
pub fn quality(clarity: u32, specificity: u32, completeness: u32, s: &PromptStructure) -> u32 {
    let structure_score = [s.has_role, s.has_context, s.has_format, s.has_constraints]
        .iter()
        .filter(|&&f| f)
        .count() as f64
        * 25.0;

    (f64::from(clarity) * 0.30
        + f64::from(specificity) * 0.25
        + f64::from(completeness) * 0.25
        + structure_score * 0.20)
        .round() as u32
}

/// All four scores for a text, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub clarity: u32,
    pub specificity: u32,
    pub completeness: u32,
    pub quality: u32,
}

/// Score a text on all four axes.
pub fn score(text: &str) -> Scores {
    let s = structure(text);
    let clarity = clarity(text);
    let specificity = specificity(text);
    let completeness = completeness(text);
    let quality = quality(clarity, specificity, completeness, &s);
    Scores {
        clarity,
        specificity,
        completeness,
        quality,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scores_stay_in_range() {
        let samples = [
            "",
            "hi",
            "Act as a teacher. Explain exactly how recursion works, step by step, \
             with 3 examples. You must include context and format the output as a list.",
            &"maybe perhaps possibly might ".repeat(20),
            &"x".repeat(500),
        ];
        for text in samples {
            let s = score(text);
            assert!(s.clarity <= 100, "clarity out of range for {text:?}");
            assert!(s.specificity <= 100, "specificity out of range for {text:?}");
            assert!(s.completeness <= 100, "completeness out of range for {text:?}");
            assert!(s.quality <= 100, "quality out of range for {text:?}");
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "You are a senior engineer. Explain exactly how to refactor this, step by step.";
        assert_eq!(score(text), score(text));
    }

    #[test]
    fn clarity_rewards_explicit_words() {
        assert!(clarity("Explain exactly what happens.") > clarity("Explain it."));
    }

    #[test]
    fn clarity_penalizes_hedging() {
        assert!(clarity("Maybe summarize this?") < clarity("Summarize this."));
    }

    #[test]
    fn clarity_penalizes_long_unpunctuated_text() {
        let run_on = "a".repeat(150);
        let punctuated = format!("{}.", "a".repeat(150));
        assert_eq!(clarity(&run_on) + 15, clarity(&punctuated));
    }

    #[test]
    fn specificity_counts_distinct_numbers_only() {
        // "3 3 3" is one distinct token; "1 2 3" is three.
        assert!(specificity("1 2 3") > specificity("3 3 3"));
    }

    #[test]
    fn specificity_number_bonus_caps_at_twenty() {
        // Five or more distinct numbers earn the same bonus as four.
        assert_eq!(specificity("1 2 3 4"), specificity("1 2 3 4 5 6 7"));
    }

    #[test]
    fn completeness_counts_components() {
        // Short text with no indicators: base only.
        assert_eq!(completeness("hi"), 20);
        // Length check alone.
        assert_eq!(completeness("explain this topic plainly"), 33);
    }

    #[test]
    fn quality_weights_structure() {
        let bare = "Summarize the attached report for me now please today";
        let structured =
            "You are an analyst. Given this context, you must format the summary as a table.";
        assert!(score(structured).quality > score(bare).quality);
    }

    #[test]
    fn empty_text_scores() {
        let s = score("");
        assert_eq!(s.clarity, 50);
        assert_eq!(s.specificity, 30);
        assert_eq!(s.completeness, 20);
    }
}

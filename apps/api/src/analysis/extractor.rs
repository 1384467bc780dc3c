//! Skill extractor: whole-word keyword scan of normalized text against the ontology.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::ontology::all_skills;
use crate::analysis::skills::SkillScores;

/// One compiled matcher per ontology keyword, in ontology order.
static MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    all_skills()
        .map(|skill| {
            let matcher = Regex::new(&keyword_pattern(skill)).expect("keyword pattern is valid");
            (skill, matcher)
        })
        .collect()
});

/// Builds a boundary-aware pattern for a keyword.
///
/// A word-character edge gets `\b`. A punctuation edge (the `+` in `c++`) gets `\B`, which
/// requires the neighbouring character to be a non-word character or the text edge.
///
/// This departs from a plain `\b{keyword}\b` scan: that form never counts `c++` before a
/// space or at the end of text, yet counts it inside `c++x`. Here the opposite holds, and
/// the extra `c++` hit can shift the rescale bounds for every other skill.
fn keyword_pattern(skill: &str) -> String {
    let edge = |c: Option<char>| match c {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => r"\B",
    };
    format!(
        "{}{}{}",
        edge(skill.chars().next()),
        regex::escape(skill),
        edge(skill.chars().last())
    )
}

/// Counts non-overlapping whole-word occurrences of every ontology keyword in `text`.
///
/// `text` should already be normalized. Skills with zero hits are omitted and the result
/// follows ontology order.
pub fn extract_skills(text: &str) -> SkillScores {
    let mut scores = SkillScores::new();
    for (skill, matcher) in MATCHERS.iter() {
        let hits = matcher.find_iter(text).count();
        if hits > 0 {
            scores.add(skill, hits as f64);
        }
    }
    scores
}

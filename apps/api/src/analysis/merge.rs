//! Source merger: one raw skill-count mapping from every candidate source.

use crate::analysis::extractor::extract_skills;
use crate::analysis::github::GithubSignal;
use crate::analysis::skills::SkillScores;

/// Each repository whose primary language is a skill counts this many mentions.
pub const GITHUB_LANGUAGE_WEIGHT: f64 = 2.0;

/// Merges resume text, LinkedIn text and the GitHub signal into raw skill counts.
///
/// The three texts are concatenated and scanned once, so a skill mentioned in two
/// sources accumulates a combined count. GitHub languages are then added on top at
/// `GITHUB_LANGUAGE_WEIGHT` per repository, including languages outside the ontology.
pub fn merge_skill_sources(resume: &str, linkedin: &str, github: &GithubSignal) -> SkillScores {
    let profile = github.profile();
    let github_text = profile.map(|p| p.descriptions.as_str()).unwrap_or_default();

    let combined = format!("{resume} {linkedin} {github_text}");
    let mut skills = extract_skills(&combined);

    for (language, repos) in profile.map(|p| p.languages.as_slice()).unwrap_or_default() {
        skills.add(language, f64::from(*repos) * GITHUB_LANGUAGE_WEIGHT);
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::github::GithubProfile;

    fn github(languages: &[(&str, u32)], descriptions: &str) -> GithubSignal {
        GithubSignal::Present(GithubProfile {
            languages: languages
                .iter()
                .map(|(l, c)| (l.to_string(), *c))
                .collect(),
            descriptions: descriptions.to_string(),
        })
    }

    #[test]
    fn test_text_sources_accumulate_combined_counts() {
        let skills = merge_skill_sources(
            "python developer",
            "python and sql",
            &GithubSignal::unavailable("offline"),
        );
        assert_eq!(skills.get("python"), Some(2.0));
    }

    #[test]
    fn test_github_languages_are_added_twice_per_repo() {
        let skills = merge_skill_sources("python", "", &github(&[("python", 2)], ""));
        assert_eq!(skills.get("python"), Some(1.0 + 4.0));
    }

    #[test]
    fn test_github_descriptions_are_scanned() {
        let skills = merge_skill_sources("", "", &github(&[], " kubernetes operator"));
        assert_eq!(skills.get("kubernetes"), Some(1.0));
    }

    #[test]
    fn test_languages_outside_ontology_are_kept() {
        let skills = merge_skill_sources("java", "", &github(&[("rust", 3)], ""));
        let order: Vec<&str> = skills.skills().collect();
        assert_eq!(order, vec!["java", "rust"]);
        assert_eq!(skills.get("rust"), Some(6.0));
    }

    #[test]
    fn test_sources_are_not_glued_together() {
        // "java" at the end of one source and "script" at the start of the next
        // must not read as "javascript".
        let skills = merge_skill_sources("java", "script", &GithubSignal::unavailable("x"));
        assert_eq!(skills.get("java"), Some(1.0));
        assert_eq!(skills.get("javascript"), None);
    }

    #[test]
    fn test_unavailable_signal_contributes_nothing() {
        let skills = merge_skill_sources("", "", &GithubSignal::unavailable("rate limited"));
        assert!(skills.is_empty());
    }
}

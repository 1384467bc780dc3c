//! Skill ontology: the static category → keyword catalog used for skill detection.

/// Every keyword is lowercase and matches the output of `text::normalize_text`.
pub const SKILL_ONTOLOGY: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python",
            "java",
            "c",
            "c++",
            "javascript",
            "typescript",
            "go",
            "ruby",
            "php",
            "scala",
            "kotlin",
            "swift",
            "r",
        ],
    ),
    (
        "web_development",
        &[
            "html", "css", "scss", "react", "angular", "vue", "node", "express", "nextjs",
            "django", "flask", "spring",
        ],
    ),
    (
        "databases",
        &[
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "sqlite",
            "oracle",
            "cassandra",
        ],
    ),
    (
        "data_science_ml",
        &[
            "numpy",
            "pandas",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "keras",
            "nlp",
            "computer vision",
            "statistics",
            "machine learning",
            "deep learning",
        ],
    ),
    (
        "devops_cloud",
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "gcp",
            "jenkins",
            "terraform",
            "ci/cd",
        ],
    ),
    (
        "tools_platforms",
        &["git", "github", "gitlab", "jupyter", "linux", "bash", "postman"],
    ),
    (
        "soft_skills",
        &[
            "problem solving",
            "communication",
            "teamwork",
            "leadership",
            "critical thinking",
        ],
    ),
];

/// All keywords across categories, in declaration order.
pub fn all_skills() -> impl Iterator<Item = &'static str> {
    SKILL_ONTOLOGY
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ontology_has_seven_categories() {
        assert_eq!(SKILL_ONTOLOGY.len(), 7);
    }

    #[test]
    fn test_all_skills_flattens_in_order() {
        let skills: Vec<_> = all_skills().collect();
        assert_eq!(skills.len(), 63);
        assert_eq!(skills.first(), Some(&"python"));
        assert_eq!(skills.last(), Some(&"critical thinking"));
    }

    #[test]
    fn test_keywords_are_unique_and_lowercase() {
        let skills: Vec<_> = all_skills().collect();
        for (i, skill) in skills.iter().enumerate() {
            assert_eq!(*skill, skill.to_lowercase());
            assert!(!skills[..i].contains(skill), "duplicate keyword {skill}");
        }
    }
}

//! Job compatibility scorer: normalized skills vs a role's weighted requirements.
//!
//! Each required skill lands in exactly one bucket:
//! - sufficient (score ≥ 5.0): full weight
//! - weak (0.1 ≤ score < 5.0): weight × score / 10
//! - missing (score < 0.1): nothing

use serde::Serialize;

use crate::analysis::rescale::{round2, SCALE_MAX};
use crate::analysis::roles::RoleProfile;
use crate::analysis::skills::SkillScores;

/// Below this normalized score a skill counts as absent.
pub const SKILL_PRESENT_THRESHOLD: f64 = 0.1;
/// At or above this normalized score a skill earns its full weight.
pub const SKILL_SUFFICIENT_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    /// 0 – 100, two decimals.
    pub score_percent: f64,
    pub missing: Vec<String>,
    pub weak: Vec<String>,
}

/// Scores `skills` against `role`. Lists follow the role's declared skill order.
pub fn job_compatibility(skills: &SkillScores, role: &RoleProfile) -> CompatibilityResult {
    let mut score = 0.0;
    let mut missing = Vec::new();
    let mut weak = Vec::new();

    for &(skill, weight) in role.skills {
        let value = skills.get(skill).unwrap_or(0.0);

        if value >= SKILL_SUFFICIENT_THRESHOLD {
            score += weight;
        } else if value >= SKILL_PRESENT_THRESHOLD {
            score += value / SCALE_MAX * weight;
            weak.push(skill.to_string());
        } else {
            missing.push(skill.to_string());
        }
    }

    CompatibilityResult {
        score_percent: round2(score * 100.0),
        missing,
        weak,
    }
}

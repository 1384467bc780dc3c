//! Analysis pipeline: normalize → extract/merge → rescale → score → advise.

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::advisory::advisory_sentences;
use crate::analysis::compatibility::job_compatibility;
use crate::analysis::github::GithubSignal;
use crate::analysis::merge::merge_skill_sources;
use crate::analysis::rescale::normalize_skills;
use crate::analysis::roles::find_role;
use crate::analysis::skills::SkillScores;
use crate::analysis::text::normalize_text;
use crate::errors::AppError;

/// Raw text pulled out of the candidate's uploaded documents.
#[derive(Debug, Clone, Default)]
pub struct CandidateInput {
    pub resume_text: String,
    pub linkedin_text: String,
}

/// Full analysis payload returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub key_skills: SkillScores,
    pub job_role: String,
    pub compatibility_score_percent: f64,
    pub missing_skills: Vec<String>,
    pub weak_skills: Vec<String>,
    pub advisory: Vec<String>,
}

/// Runs the scoring pipeline for one candidate against `target_role`.
///
/// The role is resolved before any work is done, so an unknown role yields an error
/// and never a partial report.
pub fn analyze_candidate(
    input: &CandidateInput,
    github: &GithubSignal,
    target_role: &str,
) -> Result<AnalysisReport, AppError> {
    let role = find_role(target_role)?;

    let resume = normalize_text(&input.resume_text);
    let linkedin = normalize_text(&input.linkedin_text);

    let raw = merge_skill_sources(&resume, &linkedin, github);
    if raw.is_empty() {
        debug!("No skills detected in any source");
    } else {
        debug!("Raw skills: {:?}", raw.skills().collect::<Vec<_>>());
    }
    let key_skills = normalize_skills(&raw);
    let compatibility = job_compatibility(&key_skills, role);
    let advisory = advisory_sentences(&compatibility.missing, &compatibility.weak, role.name);

    info!(
        role = role.name,
        raw_skills = raw.len(),
        key_skills = key_skills.len(),
        score = compatibility.score_percent,
        "Candidate analysis complete"
    );

    Ok(AnalysisReport {
        key_skills,
        job_role: role.name.to_string(),
        compatibility_score_percent: compatibility.score_percent,
        missing_skills: compatibility.missing,
        weak_skills: compatibility.weak,
        advisory,
    })
}

//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::github::GithubSignal;
use crate::analysis::pdf::extract_pdf_text;
use crate::analysis::pipeline::{analyze_candidate, AnalysisReport, CandidateInput};
use crate::analysis::roles::{find_role, RoleSummary, JOB_ROLES};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Success envelope: `{"status": "success", "data": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Fields collected from the multipart upload.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<Bytes>,
    linkedin: Option<Bytes>,
    github_url: Option<String>,
    target_role: Option<String>,
}

async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => form.resume = Some(field.bytes().await?),
            "linkedin" => form.linkedin = Some(field.bytes().await?),
            "github_url" => form.github_url = Some(field.text().await?),
            "target_role" => form.target_role = Some(field.text().await?),
            other => debug!("Ignoring unexpected multipart field '{other}'"),
        }
    }

    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart upload: `resume` (PDF, required), `linkedin` (PDF, optional),
/// `github_url` (optional), `target_role` (required). Returns the full analysis report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id);
    let report = run_analysis(&state, multipart).instrument(span).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// Every event emitted while this runs carries the caller's `analyze` span.
async fn run_analysis(state: &AppState, multipart: Multipart) -> Result<AnalysisReport, AppError> {
    let form = read_analyze_form(multipart).await?;

    let target_role = form
        .target_role
        .filter(|role| !role.trim().is_empty())
        .ok_or_else(|| AppError::Validation("target_role is required".to_string()))?;
    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    // Fail fast before any PDF parsing or network traffic.
    find_role(&target_role)?;

    info!(target_role = %target_role.trim(), "Analysis request received");

    let resume_text = extract_pdf_text(resume, "resume").await?;
    let linkedin_text = match form.linkedin {
        Some(bytes) if !bytes.is_empty() => extract_pdf_text(bytes, "linkedin").await?,
        _ => String::new(),
    };

    let github = match form.github_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => state.github.collect(url).await,
        _ => GithubSignal::unavailable("no GitHub profile supplied"),
    };
    if let GithubSignal::Unavailable { reason } = &github {
        info!("Continuing without GitHub signal: {reason}");
    }

    let input = CandidateInput {
        resume_text,
        linkedin_text,
    };
    let report = analyze_candidate(&input, &github, &target_role)?;

    info!(
        score = report.compatibility_score_percent,
        "Analysis request complete"
    );

    Ok(report)
}

/// GET /api/v1/roles
///
/// Lists every supported target role with its weighted skill requirements.
pub async fn handle_list_roles() -> Json<ApiResponse<Vec<RoleSummary>>> {
    Json(ApiResponse::success(
        JOB_ROLES.iter().map(|role| role.summary()).collect(),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Axum route handlers for the Resume, Skills and Jobs APIs.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::screening::catalog::JobCatalog;
use crate::screening::matching::{match_jobs, missing_skills_with_resources, MatchResult, MissingSkill};
use crate::screening::report::{build_gap_report, GapReport};
use crate::screening::skills::{extract_skills, SkillSet};
use crate::screening::stats::{compute_statistics, preview, ResumeStatistics};
use crate::state::AppState;
use crate::store::resumes::{find_resume_by_email, upsert_resume};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub email: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub status: &'static str,
    pub statistics: ResumeStatistics,
    pub preview: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub email: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct MissingRequest {
    pub skills: Vec<String>,
    /// Defaults to the catalog's target role.
    pub target_role_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct MissingResponse {
    pub missing: Vec<MissingSkill>,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub email: String,
}

fn require_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Resume handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Stores already-extracted text as the account's résumé, replacing any previous one.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    require_email(&request.email)?;
    upsert_resume(&state.db, &request.email, &request.text).await?;

    Ok(Json(SaveResumeResponse {
        status: "ok",
        statistics: compute_statistics(&request.text),
        preview: preview(&request.text),
    }))
}

/// POST /api/v1/resumes/upload
///
/// Multipart form with `email` and `file` (PDF). Extracts the text, saves it,
/// and returns statistics plus a preview.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let mut email = String::new();
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "email" => {
                email = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable email field: {e}")))?;
            }
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;
                file = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    require_email(&email)?;
    let bytes = file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    let extractor = state.document_extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    upsert_resume(&state.db, &email, &text).await?;

    Ok(Json(SaveResumeResponse {
        status: "ok",
        statistics: compute_statistics(&text),
        preview: preview(&text),
    }))
}

/// GET /api/v1/resumes?email=
///
/// `text` is null when nothing has been saved for the account.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<ResumeResponse>, AppError> {
    require_email(&params.email)?;
    let resume = find_resume_by_email(&state.db, &params.email).await?;

    Ok(Json(ResumeResponse {
        email: params.email,
        text: resume.map(|r| r.text),
    }))
}

/// POST /api/v1/resumes/statistics
pub async fn handle_statistics(Json(request): Json<TextRequest>) -> Json<ResumeStatistics> {
    Json(compute_statistics(&request.text))
}

// ────────────────────────────────────────────────────────────────────────────
// Skill handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/normalize
///
/// Parses a raw extractor reply into display-cased, de-duplicated skills.
pub async fn handle_normalize_skills(Json(request): Json<NormalizeRequest>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: extract_skills(&request.raw),
    })
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let raw = state.skill_extractor.extract(&request.text).await?;
    Ok(Json(SkillsResponse {
        skills: extract_skills(&raw),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Job handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/jobs/match
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    let candidate = SkillSet::normalize(&request.skills);
    Json(MatchResponse {
        matches: match_jobs(&candidate, &state.catalog.jobs),
    })
}

/// POST /api/v1/jobs/missing
pub async fn handle_missing_skills(
    State(state): State<AppState>,
    Json(request): Json<MissingRequest>,
) -> Json<MissingResponse> {
    let candidate = SkillSet::normalize(&request.skills);
    let target = request
        .target_role_skills
        .as_deref()
        .unwrap_or(&state.catalog.target_role_skills);
    Json(MissingResponse {
        missing: missing_skills_with_resources(&candidate, target),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Full gap report for the account's saved résumé. Extraction failures come
/// back as warnings; the statistics are always present.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<GapReport>, AppError> {
    require_email(&request.email)?;
    let resume = find_resume_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume saved for {}", request.email)))?;

    let report =
        build_gap_report(&resume.text, state.skill_extractor.as_ref(), &state.catalog).await;
    Ok(Json(report))
}


//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::jobs::filters::JobFilters;
use crate::jobs::queries::{get_job, list_jobs};
use crate::matching::{rank_jobs, recommend_jobs, MatchScore};
use crate::models::job::Job;
use crate::preferences::queries::get_preferences;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub user_id: Uuid,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchScore>,
    /// False when the user has no preferences and every score is neutral.
    pub preferences_found: bool,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(filters): AppQuery<JobFilters>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = list_jobs(&state.db, &filters, state.config.max_job_query_limit).await?;
    Ok(Json(JobListResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(job_id): AppPath<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}

/// GET /api/v1/jobs/ranked
///
/// Filtered catalogue ordered by match against the user's stored preferences.
pub async fn handle_ranked_jobs(
    State(state): State<AppState>,
    AppQuery(user): AppQuery<UserIdQuery>,
    AppQuery(filters): AppQuery<JobFilters>,
) -> Result<Json<MatchListResponse>, AppError> {
    let jobs = list_jobs(&state.db, &filters, state.config.max_job_query_limit).await?;
    let preferences = get_preferences(&state.db, user.user_id).await?;

    let matches = rank_jobs(state.scorer.as_ref(), &jobs, preferences.as_ref());
    debug!(
        "Ranked {} jobs for user {} (preferences: {})",
        matches.len(),
        user.user_id,
        preferences.is_some()
    );

    Ok(Json(MatchListResponse {
        matches,
        preferences_found: preferences.is_some(),
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

/// GET /api/v1/jobs/recommended
///
/// Recommendations drawn from the newest jobs in the catalogue.
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RecommendQuery>,
) -> Result<Json<MatchListResponse>, AppError> {
    let limit = query.limit.unwrap_or(state.config.recommendation_limit);

    let jobs = list_jobs(
        &state.db,
        &JobFilters::default(),
        state.config.max_job_query_limit,
    )
    .await?;
    let preferences = get_preferences(&state.db, query.user_id).await?;

    let matches = recommend_jobs(state.scorer.as_ref(), &jobs, preferences.as_ref(), limit);
    debug!(
        "Recommended {} of {} jobs for user {}",
        matches.len(),
        jobs.len(),
        query.user_id
    );

    Ok(Json(MatchListResponse {
        matches,
        preferences_found: preferences.is_some(),
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

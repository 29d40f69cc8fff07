//! Stateless matching endpoints: jobs and preferences arrive in the request body.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::extract::AppJson;
use crate::matching::{rank_jobs, recommend_jobs, MatchScore};
use crate::models::job::Job;
use crate::models::preferences::UserPreferences;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: Job,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: MatchScore,
    /// Percentage to show on a badge; absent for neutral scores.
    pub badge_percent: Option<u32>,
}

impl From<MatchScore> for ScoreResponse {
    fn from(result: MatchScore) -> Self {
        Self {
            badge_percent: result.badge_percent(),
            result,
        }
    }
}

/// POST /api/v1/match/score
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScoreRequest>,
) -> Json<ScoreResponse> {
    let result = state
        .scorer
        .score(&request.job, request.preferences.as_ref());
    Json(result.into())
}

/// POST /api/v1/match/rank
pub async fn handle_rank(
    State(state): State<AppState>,
    AppJson(request): AppJson<RankRequest>,
) -> Json<Vec<ScoreResponse>> {
    let ranked = rank_jobs(
        state.scorer.as_ref(),
        &request.jobs,
        request.preferences.as_ref(),
    );
    Json(ranked.into_iter().map(ScoreResponse::from).collect())
}

/// POST /api/v1/match/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    AppJson(request): AppJson<RecommendRequest>,
) -> Json<Vec<ScoreResponse>> {
    let limit = request
        .limit
        .unwrap_or(state.config.recommendation_limit);
    let recommended = recommend_jobs(
        state.scorer.as_ref(),
        &request.jobs,
        request.preferences.as_ref(),
        limit,
    );
    Json(recommended.into_iter().map(ScoreResponse::from).collect())
}

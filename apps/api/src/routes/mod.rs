pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job catalogue
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/ranked", get(jobs::handle_ranked_jobs))
        .route("/api/v1/jobs/recommended", get(jobs::handle_recommended_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Preferences
        .route(
            "/api/v1/preferences",
            get(preferences::handle_get_preferences).put(preferences::handle_upsert_preferences),
        )
        // Stateless matching
        .route("/api/v1/match/score", post(matching::handle_score))
        .route("/api/v1/match/rank", post(matching::handle_rank))
        .route("/api/v1/match/recommend", post(matching::handle_recommend))
        .with_state(state)
}

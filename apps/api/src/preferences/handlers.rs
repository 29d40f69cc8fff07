use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::jobs::handlers::UserIdQuery;
use crate::models::preferences::UserPreferences;
use crate::preferences::queries::{get_preferences, upsert_preferences};
use crate::preferences::validation::{validate_preferences, PreferencesInput};
use crate::state::AppState;

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserIdQuery>,
) -> Result<Json<UserPreferences>, AppError> {
    let prefs = get_preferences(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No preferences for user {}", params.user_id))
        })?;
    Ok(Json(prefs))
}

/// PUT /api/v1/preferences
pub async fn handle_upsert_preferences(
    State(state): State<AppState>,
    AppJson(input): AppJson<PreferencesInput>,
) -> Result<Json<UserPreferences>, AppError> {
    let prefs = validate_preferences(input)?;
    let stored = upsert_preferences(&state.db, &prefs).await?;
    Ok(Json(stored))
}

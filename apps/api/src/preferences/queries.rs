use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::preferences::{UserPreferences, UserPreferencesRow};

const PREFERENCE_COLUMNS: &str = "user_id, job_titles, city, country, remote_work, minimum_pay, \
     pay_period, onboarding_completed, created_at, updated_at";

pub async fn get_preferences(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserPreferences>, AppError> {
    let row = sqlx::query_as::<_, UserPreferencesRow>(&format!(
        "SELECT {PREFERENCE_COLUMNS} FROM user_preferences WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(UserPreferences::from))
}

/// Inserts or replaces the single preferences record for `prefs.user_id`.
/// `created_at` is kept from the first insert.
pub async fn upsert_preferences(
    pool: &PgPool,
    prefs: &UserPreferences,
) -> Result<UserPreferences, AppError> {
    let row = sqlx::query_as::<_, UserPreferencesRow>(&format!(
        r#"
        INSERT INTO user_preferences
            (user_id, job_titles, city, country, remote_work, minimum_pay,
             pay_period, onboarding_completed)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            job_titles = EXCLUDED.job_titles,
            city = EXCLUDED.city,
            country = EXCLUDED.country,
            remote_work = EXCLUDED.remote_work,
            minimum_pay = EXCLUDED.minimum_pay,
            pay_period = EXCLUDED.pay_period,
            onboarding_completed = EXCLUDED.onboarding_completed,
            updated_at = NOW()
        RETURNING {PREFERENCE_COLUMNS}
        "#
    ))
    .bind(prefs.user_id)
    .bind(&prefs.job_titles)
    .bind(&prefs.city)
    .bind(&prefs.country)
    .bind(prefs.remote_work)
    .bind(prefs.minimum_pay)
    .bind(prefs.pay_period.map(|p| p.as_str()))
    .bind(prefs.onboarding_completed)
    .fetch_one(pool)
    .await?;

    info!(
        "Upserted preferences for user {} ({} titles, onboarding_completed={})",
        row.user_id,
        row.job_titles.len(),
        row.onboarding_completed
    );
    Ok(UserPreferences::from(row))
}

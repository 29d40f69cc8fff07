use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::matching::salary::PayPeriod;

/// One record per user, created and updated by upsert during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub user_id: Uuid,
    /// Ordered by the user's priority.
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(default)]
    pub minimum_pay: Option<f64>,
    #[serde(default)]
    pub pay_period: Option<PayPeriod>,
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPreferencesRow {
    pub user_id: Uuid,
    pub job_titles: Vec<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub remote_work: bool,
    pub minimum_pay: Option<f64>,
    pub pay_period: Option<String>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserPreferencesRow> for UserPreferences {
    fn from(row: UserPreferencesRow) -> Self {
        let pay_period = row.pay_period.as_deref().and_then(|raw| {
            raw.parse::<PayPeriod>()
                .map_err(|e| warn!("Preferences for user {}: {e}", row.user_id))
                .ok()
        });

        UserPreferences {
            user_id: row.user_id,
            job_titles: row.job_titles,
            city: row.city,
            country: row.country,
            remote_work: row.remote_work,
            minimum_pay: row.minimum_pay,
            pay_period,
            onboarding_completed: row.onboarding_completed,
            updated_at: Some(row.updated_at),
        }
    }
}

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::salary::PayPeriod;
use crate::models::preferences::UserPreferences;

pub const MAX_JOB_TITLES: usize = 10;

/// Body of `PUT /api/v1/preferences`, as submitted by the onboarding flow.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesInput {
    pub user_id: Uuid,
    #[serde(default)]
    pub job_titles: Vec<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub remote_work: bool,
    pub minimum_pay: Option<f64>,
    pub pay_period: Option<String>,
    #[serde(default)]
    pub onboarding_completed: bool,
}

/// Normalizes and validates input before it is written.
///
/// Titles are trimmed; blanks and case-insensitive duplicates are dropped
/// with the first occurrence kept.
pub fn validate_preferences(input: PreferencesInput) -> Result<UserPreferences, AppError> {
    let mut job_titles: Vec<String> = Vec::new();
    for title in input.job_titles {
        let title = title.trim();
        if title.is_empty() {
            continue;
        }
        if job_titles.iter().any(|t| t.to_lowercase() == title.to_lowercase()) {
            continue;
        }
        job_titles.push(title.to_string());
    }

    if job_titles.len() > MAX_JOB_TITLES {
        return Err(AppError::Validation(format!(
            "At most {MAX_JOB_TITLES} job titles are allowed, got {}",
            job_titles.len()
        )));
    }

    if let Some(pay) = input.minimum_pay {
        if !pay.is_finite() || pay < 0.0 {
            return Err(AppError::Validation(
                "minimum_pay must be a non-negative number".to_string(),
            ));
        }
    }

    let pay_period = input
        .pay_period
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<PayPeriod>())
        .transpose()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(UserPreferences {
        user_id: input.user_id,
        job_titles,
        city: trimmed(input.city),
        country: trimmed(input.country),
        remote_work: input.remote_work,
        minimum_pay: input.minimum_pay,
        pay_period,
        onboarding_completed: input.onboarding_completed,
        updated_at: None,
    })
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Filter composition for the job catalogue.
//!
//! Each non-blank filter adds one AND predicate to the base query. Values are
//! always bound, never interpolated.

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};

use crate::errors::AppError;

pub const JOB_COLUMNS: &str = "id, title, company_name, location, salary_min, salary_max, \
     salary_period, salary_currency, job_types, is_remote, description, requirements, \
     benefits, posted_at";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilters {
    /// Free text matched against title, company name and description.
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub remote: Option<bool>,
    /// Raw salary figure; compared against the upper bound (or lower when absent).
    pub min_salary: Option<f64>,
    pub posted_within_days: Option<i32>,
    pub limit: Option<i64>,
}

impl JobFilters {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(min) = self.min_salary {
            if !min.is_finite() || min < 0.0 {
                return Err(AppError::Validation(
                    "min_salary must be a non-negative number".to_string(),
                ));
            }
        }
        if let Some(days) = self.posted_within_days {
            if days < 1 {
                return Err(AppError::Validation(
                    "posted_within_days must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Requested limit clamped to `[1, max_limit]`; `max_limit` when unset.
    pub fn effective_limit(&self, max_limit: i64) -> i64 {
        let max_limit = max_limit.max(1);
        self.limit.unwrap_or(max_limit).clamp(1, max_limit)
    }
}

/// Builds the catalogue query for `filters`, newest first.
pub fn build_job_query(filters: &JobFilters, max_limit: i64) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE is_active = TRUE"));

    if let Some(search) = non_blank(filters.search.as_deref()) {
        let pattern = contains_pattern(search);
        builder.push(" AND (title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR company_name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(location) = non_blank(filters.location.as_deref()) {
        builder.push(" AND location ILIKE ");
        builder.push_bind(contains_pattern(location));
    }
    if let Some(job_type) = non_blank(filters.job_type.as_deref()) {
        builder.push(" AND ");
        builder.push_bind(job_type.to_lowercase());
        builder.push(" = ANY(job_types)");
    }
    if let Some(remote) = filters.remote {
        builder.push(" AND is_remote = ");
        builder.push_bind(remote);
    }
    if let Some(min_salary) = filters.min_salary {
        builder.push(" AND COALESCE(salary_max, salary_min) >= ");
        builder.push_bind(min_salary);
    }
    if let Some(days) = filters.posted_within_days {
        builder.push(" AND posted_at >= NOW() - make_interval(days => ");
        builder.push_bind(days);
        builder.push(")");
    }

    builder.push(" ORDER BY posted_at DESC LIMIT ");
    builder.push_bind(filters.effective_limit(max_limit));
    builder
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `%value%` with LIKE metacharacters in `value` escaped.
fn contains_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

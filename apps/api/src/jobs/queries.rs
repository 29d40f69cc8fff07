use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::filters::{build_job_query, JobFilters, JOB_COLUMNS};
use crate::models::job::{Job, JobRow};

/// Fetches active jobs matching `filters`, newest first, at most `max_limit` rows.
pub async fn list_jobs(
    pool: &PgPool,
    filters: &JobFilters,
    max_limit: i64,
) -> Result<Vec<Job>, AppError> {
    filters.validate()?;

    let mut builder = build_job_query(filters, max_limit);
    let rows = builder.build_query_as::<JobRow>().fetch_all(pool).await?;

    debug!("Job query returned {} rows", rows.len());
    Ok(rows.into_iter().map(Job::from).collect())
}

pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<Job>, AppError> {
    let row = sqlx::query_as::<_, JobRow>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND is_active = TRUE"
    ))
    .bind(job_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Job::from))
}

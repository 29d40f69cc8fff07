use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::matching::salary::{PayPeriod, SalaryRange};

/// A job posting as seen by the matcher. Snapshot of one row; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub job_types: Vec<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_period: Option<String>,
    pub salary_currency: Option<String>,
    pub job_types: Vec<String>,
    pub is_remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        let salary = salary_from_columns(
            row.id,
            row.salary_min,
            row.salary_max,
            row.salary_period.as_deref(),
            row.salary_currency,
        );

        Job {
            id: row.id,
            title: row.title,
            company_name: row.company_name,
            location: row.location,
            salary,
            job_types: row.job_types,
            is_remote: row.is_remote,
            description: row.description,
            requirements: row.requirements,
            benefits: row.benefits,
            posted_at: row.posted_at,
        }
    }
}

/// Missing period means monthly. An unrecognised period drops the salary
/// entirely rather than guessing a conversion.
fn salary_from_columns(
    job_id: Uuid,
    min: Option<f64>,
    max: Option<f64>,
    period: Option<&str>,
    currency: Option<String>,
) -> Option<SalaryRange> {
    if min.is_none() && max.is_none() {
        return None;
    }

    let period = match period {
        None => PayPeriod::Month,
        Some(raw) => match raw.parse::<PayPeriod>() {
            Ok(p) => p,
            Err(e) => {
                warn!("Job {job_id}: {e}; ignoring salary");
                return None;
            }
        },
    };

    Some(SalaryRange {
        min,
        max,
        period,
        currency,
    })
}

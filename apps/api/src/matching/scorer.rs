//! Match Scoring — pluggable scorer measuring how well a job fits a user's preferences.
//!
//! Default: `WeightedMatchScorer`, an additive point model out of 100:
//! title 40, location 25, remote 15 (office alignment 10), salary 20 (near miss 10).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so ranking and recommendation code
//! never depends on a concrete backend.

use serde::{Deserialize, Serialize};

use crate::matching::salary::to_monthly;
use crate::models::job::Job;
use crate::models::preferences::UserPreferences;

/// Score reported for every job when the user has no preferences on file.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Points are divided by this to land in [0, 1].
const POINT_SCALE: f64 = 100.0;

/// Fraction of the user's minimum that still earns partial salary credit.
const SALARY_NEAR_MISS_RATIO: f64 = 0.8;

pub const REASON_TITLE: &str = "Job title matches your preferences";
pub const REASON_LOCATION: &str = "Location matches your preferences";
pub const REASON_REMOTE: &str = "Remote work available";
pub const REASON_OFFICE: &str = "Office-based role matches your preference";
pub const REASON_SALARY: &str = "Salary meets your minimum";
pub const REASON_SALARY_NEAR: &str = "Salary is close to your minimum";

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Ephemeral score for one job. Recomputed on every ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub job: Job,
    pub score: f64, // 0.0 – 1.0
    pub reasons: Vec<String>,
    /// True when no preferences were available and `score` is the neutral constant.
    pub neutral: bool,
}

impl MatchScore {
    /// Whole-number percentage for a match badge, or `None` when there is
    /// nothing meaningful to show.
    pub fn badge_percent(&self) -> Option<u32> {
        if self.neutral {
            return None;
        }
        Some((self.score * 100.0).round() as u32)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub title: u32,
    pub location: u32,
    pub remote: u32,
    pub office: u32,
    pub salary: u32,
    pub salary_near: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            title: 40,
            location: 25,
            remote: 15,
            office: 10,
            salary: 20,
            salary_near: 10,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching ranking or handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, job: &Job, preferences: Option<&UserPreferences>) -> MatchScore;

    /// Label reported alongside results, e.g. "weighted".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, job: &Job, preferences: Option<&UserPreferences>) -> MatchScore {
        compute_weighted_match(job, preferences, &self.weights)
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_weighted_match(
    job: &Job,
    preferences: Option<&UserPreferences>,
    weights: &MatchWeights,
) -> MatchScore {
    let Some(prefs) = preferences else {
        return MatchScore {
            job: job.clone(),
            score: NEUTRAL_SCORE,
            reasons: vec![],
            neutral: true,
        };
    };

    let mut points = 0_u32;
    let mut reasons = Vec::new();

    if title_matches(&job.title, &prefs.job_titles) {
        points = points.saturating_add(weights.title);
        reasons.push(REASON_TITLE.to_string());
    }

    if location_matches(&job.location, prefs.city.as_deref(), prefs.country.as_deref()) {
        points = points.saturating_add(weights.location);
        reasons.push(REASON_LOCATION.to_string());
    }

    match (prefs.remote_work, job.is_remote) {
        (true, true) => {
            points = points.saturating_add(weights.remote);
            reasons.push(REASON_REMOTE.to_string());
        }
        (false, false) => {
            points = points.saturating_add(weights.office);
            reasons.push(REASON_OFFICE.to_string());
        }
        _ => {}
    }

    match salary_fit(job, prefs) {
        SalaryFit::Meets => {
            points = points.saturating_add(weights.salary);
            reasons.push(REASON_SALARY.to_string());
        }
        SalaryFit::Near => {
            points = points.saturating_add(weights.salary_near);
            reasons.push(REASON_SALARY_NEAR.to_string());
        }
        SalaryFit::Below | SalaryFit::NotApplicable => {}
    }

    MatchScore {
        job: job.clone(),
        score: (points as f64 / POINT_SCALE).clamp(0.0, 1.0),
        reasons,
        neutral: false,
    }
}

/// Case-insensitive substring match in either direction against any non-blank preferred title.
fn title_matches(job_title: &str, preferred: &[String]) -> bool {
    let job_title = job_title.trim().to_lowercase();
    if job_title.is_empty() {
        return false;
    }

    preferred
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .any(|t| job_title.contains(&t) || t.contains(&job_title))
}

fn location_matches(job_location: &str, city: Option<&str>, country: Option<&str>) -> bool {
    let location = job_location.to_lowercase();

    [city, country]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .any(|v| location.contains(&v))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SalaryFit {
    Meets,
    Near,
    Below,
    NotApplicable,
}

fn salary_fit(job: &Job, prefs: &UserPreferences) -> SalaryFit {
    let Some(minimum) = prefs.minimum_pay.filter(|m| m.is_finite() && *m > 0.0) else {
        return SalaryFit::NotApplicable;
    };
    let Some(job_monthly) = job.salary.as_ref().and_then(|s| s.monthly_floor()) else {
        return SalaryFit::NotApplicable;
    };

    let wanted_monthly = to_monthly(minimum, prefs.pay_period.unwrap_or_default());

    if job_monthly >= wanted_monthly {
        SalaryFit::Meets
    } else if job_monthly >= wanted_monthly * SALARY_NEAR_MISS_RATIO {
        SalaryFit::Near
    } else {
        SalaryFit::Below
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

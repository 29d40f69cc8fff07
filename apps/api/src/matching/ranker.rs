//! Ranking and recommendation over scored jobs.
//!
//! Both operations are pure: no I/O, no shared state. An empty job list
//! (e.g. after an upstream fetch failure) flows through as an empty result.

use std::cmp::Ordering;

use crate::matching::scorer::{MatchScore, MatchScorer};
use crate::models::job::Job;
use crate::models::preferences::UserPreferences;

/// Only matches scoring strictly above this are recommended.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.3;

/// Scores every job and orders by score descending, then posted date descending.
/// `sort_by` is stable, so fully tied jobs keep their input order.
pub fn rank_jobs(
    scorer: &dyn MatchScorer,
    jobs: &[Job],
    preferences: Option<&UserPreferences>,
) -> Vec<MatchScore> {
    let mut scored: Vec<MatchScore> = jobs
        .iter()
        .map(|job| scorer.score(job, preferences))
        .collect();

    scored.sort_by(compare_matches);
    scored
}

/// Ranks, keeps matches above `RECOMMENDATION_THRESHOLD`, and truncates to `limit`.
pub fn recommend_jobs(
    scorer: &dyn MatchScorer,
    jobs: &[Job],
    preferences: Option<&UserPreferences>,
    limit: usize,
) -> Vec<MatchScore> {
    rank_jobs(scorer, jobs, preferences)
        .into_iter()
        .filter(|m| m.score > RECOMMENDATION_THRESHOLD)
        .take(limit)
        .collect()
}

fn compare_matches(a: &MatchScore, b: &MatchScore) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.job.posted_at.cmp(&a.job.posted_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::salary::{PayPeriod, SalaryRange};
    use crate::matching::scorer::{MatchWeights, WeightedMatchScorer};
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn rank_jobs_by_match(jobs: &[Job], prefs: Option<&UserPreferences>) -> Vec<MatchScore> {
        rank_jobs(&WeightedMatchScorer::default(), jobs, prefs)
    }

    fn get_recommended_jobs(
        jobs: &[Job],
        prefs: Option<&UserPreferences>,
        limit: usize,
    ) -> Vec<MatchScore> {
        recommend_jobs(&WeightedMatchScorer::default(), jobs, prefs, limit)
    }

    fn make_job(title: &str, location: &str, remote: bool, days_ago: i64) -> Job {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company_name: "Acme".to_string(),
            location: location.to_string(),
            salary: Some(SalaryRange {
                min: Some(5_000.0),
                max: Some(6_000.0),
                period: PayPeriod::Month,
                currency: None,
            }),
            job_types: vec![],
            is_remote: remote,
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            posted_at: base - Duration::days(days_ago),
        }
    }

    fn prefs() -> UserPreferences {
        UserPreferences {
            user_id: Uuid::new_v4(),
            job_titles: vec!["Software Engineer".to_string()],
            city: Some("Singapore".to_string()),
            country: None,
            remote_work: true,
            minimum_pay: Some(4_000.0),
            pay_period: Some(PayPeriod::Month),
            onboarding_completed: true,
            updated_at: None,
        }
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            make_job("Accountant", "London", false, 1),          // salary 20 = 0.2
            make_job("Software Engineer", "Singapore", true, 5), // 1.0
            make_job("Software Engineer", "London", true, 2),    // 0.75
            make_job("Software Engineer", "Singapore", true, 1), // 1.0, newer
            make_job("Barista", "Singapore", true, 3),           // 0.6
        ]
    }

    #[test]
    fn test_rank_orders_by_score_then_recency() {
        let ranked = rank_jobs_by_match(&sample_jobs(), Some(&prefs()));

        let scores: Vec<f64> = ranked.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![1.0, 1.0, 0.75, 0.6, 0.2]);
        assert!(ranked[0].job.posted_at > ranked[1].job.posted_at);

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].job.posted_at >= pair[1].job.posted_at);
            }
        }
    }

    #[test]
    fn test_rank_is_stable_for_full_ties() {
        let mut a = make_job("Software Engineer", "Singapore", true, 1);
        let mut b = a.clone();
        a.id = Uuid::new_v4();
        b.id = Uuid::new_v4();

        let ranked = rank_jobs_by_match(&[a.clone(), b.clone()], Some(&prefs()));
        assert_eq!(ranked[0].job.id, a.id);
        assert_eq!(ranked[1].job.id, b.id);
    }

    #[test]
    fn test_rank_without_preferences_sorts_by_recency() {
        let ranked = rank_jobs_by_match(&sample_jobs(), None);
        assert!(ranked.iter().all(|m| m.neutral && m.score == 0.5));
        for pair in ranked.windows(2) {
            assert!(pair[0].job.posted_at >= pair[1].job.posted_at);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(rank_jobs_by_match(&[], Some(&prefs())).is_empty());
        assert!(get_recommended_jobs(&[], None, 5).is_empty());
    }

    #[test]
    fn test_recommend_filters_threshold_and_limit() {
        let recs = get_recommended_jobs(&sample_jobs(), Some(&prefs()), 3);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|m| m.score > RECOMMENDATION_THRESHOLD));

        let all = get_recommended_jobs(&sample_jobs(), Some(&prefs()), 10);
        // The 0.2 accountant role is dropped.
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_recommend_excludes_exact_threshold() {
        // Title alone lands exactly on 0.3.
        let scorer = WeightedMatchScorer::new(MatchWeights {
            title: 30,
            location: 0,
            remote: 0,
            office: 0,
            salary: 0,
            salary_near: 0,
        });
        let jobs = vec![make_job("Software Engineer", "Paris", false, 1)];

        let recs = recommend_jobs(&scorer, &jobs, Some(&prefs()), 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_recommend_excludes_default_office_plus_salary() {
        // office 10 + salary 20 = 0.3 under the default weights
        let mut prefs = prefs();
        prefs.job_titles = vec!["Nurse".to_string()];
        prefs.remote_work = false;
        let jobs = vec![make_job("Software Engineer", "Paris", false, 1)];

        let ranked = rank_jobs_by_match(&jobs, Some(&prefs));
        assert!((ranked[0].score - RECOMMENDATION_THRESHOLD).abs() < f64::EPSILON);
        assert!(get_recommended_jobs(&jobs, Some(&prefs), 5).is_empty());
    }

    #[test]
    fn test_recommend_zero_limit() {
        assert!(get_recommended_jobs(&sample_jobs(), Some(&prefs()), 0).is_empty());
    }

    #[test]
    fn test_neutral_scores_pass_threshold() {
        let recs = get_recommended_jobs(&sample_jobs(), None, 2);
        assert_eq!(recs.len(), 2);
    }
}

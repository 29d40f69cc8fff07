// Job matching: salary normalization, per-job scoring, ranking and recommendation.
// The scoring and ranking functions are pure and synchronous; the handlers here
// take everything from the request body and never touch the database.

pub mod handlers;
pub mod ranker;
pub mod salary;
pub mod scorer;

pub use ranker::{rank_jobs, recommend_jobs};
pub use scorer::{MatchScore, MatchScorer, WeightedMatchScorer};

// User preferences: one record per user, written by upsert during onboarding
// and read by the matcher.

pub mod handlers;
pub mod queries;
pub mod validation;

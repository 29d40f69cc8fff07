use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or numeric ones don't parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Default `limit` for recommendation requests that don't pass one.
    pub recommendation_limit: usize,
    /// Upper bound on jobs fetched per catalogue query.
    pub max_job_query_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_limit: parse_env_or("RECOMMENDATION_LIMIT", 10)?,
            max_job_query_limit: parse_env_or("MAX_JOB_QUERY_LIMIT", 100)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_padded_numbers() {
        let port: u16 = parse_value("PORT", " 9090 ").unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_value_error_names_variable() {
        let err = parse_value::<usize>("RECOMMENDATION_LIMIT", "ten").unwrap_err();
        assert!(err.to_string().contains("RECOMMENDATION_LIMIT"));
    }

    #[test]
    fn test_missing_optional_uses_default() {
        let limit: i64 = parse_env_or("JOBBOARD_TEST_UNSET_LIMIT", 100).unwrap();
        assert_eq!(limit, 100);
    }
}

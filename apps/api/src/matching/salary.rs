//! Pay period handling and monthly salary normalization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: f64 = 8.0;
pub const WORKING_DAYS_PER_MONTH: f64 = 22.0;
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    #[serde(alias = "hourly")]
    Hour,
    #[serde(alias = "daily")]
    Day,
    #[serde(alias = "weekly")]
    Week,
    #[default]
    #[serde(alias = "monthly")]
    Month,
    #[serde(alias = "yearly", alias = "annual", alias = "annually")]
    Year,
}

impl PayPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Hour => "hour",
            PayPeriod::Day => "day",
            PayPeriod::Week => "week",
            PayPeriod::Month => "month",
            PayPeriod::Year => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pay period '{0}'")]
pub struct UnknownPayPeriod(pub String);

impl FromStr for PayPeriod {
    type Err = UnknownPayPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" | "hourly" => Ok(PayPeriod::Hour),
            "day" | "daily" => Ok(PayPeriod::Day),
            "week" | "weekly" => Ok(PayPeriod::Week),
            "month" | "monthly" => Ok(PayPeriod::Month),
            "year" | "yearly" | "annual" | "annually" => Ok(PayPeriod::Year),
            _ => Err(UnknownPayPeriod(s.to_string())),
        }
    }
}

/// Converts an amount paid per `period` into its monthly equivalent.
pub fn to_monthly(amount: f64, period: PayPeriod) -> f64 {
    match period {
        PayPeriod::Hour => amount * HOURS_PER_DAY * WORKING_DAYS_PER_MONTH,
        PayPeriod::Day => amount * WORKING_DAYS_PER_MONTH,
        PayPeriod::Week => amount * WEEKS_PER_MONTH,
        PayPeriod::Month => amount,
        PayPeriod::Year => amount / MONTHS_PER_YEAR,
    }
}

/// A posted salary range. Either bound may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(default)]
    pub period: PayPeriod,
    pub currency: Option<String>,
}

impl SalaryRange {
    /// Monthly figure used for matching: the lower bound, falling back to the upper one.
    pub fn monthly_floor(&self) -> Option<f64> {
        self.min
            .or(self.max)
            .filter(|v| v.is_finite())
            .map(|v| to_monthly(v, self.period))
    }
}

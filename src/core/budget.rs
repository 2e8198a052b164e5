use chrono::NaiveDate;

use crate::core::error::ReportError;

/// A fixed credit pool spread over the days until it expires. Built once per
/// run; the derived daily allowance is what the summary compares spend
/// against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetContext {
    pub expires_on: NaiveDate,
    pub as_of: NaiveDate,
    pub remaining: f64,
    pub daily_allowance: f64,
}

impl BudgetContext {
    pub fn new(
        expires_on: NaiveDate,
        as_of: NaiveDate,
        remaining: f64,
    ) -> Result<Self, ReportError> {
        let days_left = (expires_on - as_of).num_days();
        if days_left <= 0 {
            return Err(ReportError::EmptyBudgetWindow { days_left });
        }
        Ok(Self {
            expires_on,
            as_of,
            remaining,
            daily_allowance: remaining / days_left as f64,
        })
    }

    pub fn days_left(&self) -> i64 {
        (self.expires_on - self.as_of).num_days()
    }
}

/// How yesterday's spend sits against the daily allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Ok,
    Warning,
    Alert,
}

impl BudgetStatus {
    /// Classify a spend-to-allowance percentage: under 60% is fine, over
    /// 110% is an alert, anything between warns.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 60.0 {
            Self::Ok
        } else if percent > 110.0 {
            Self::Alert
        } else {
            Self::Warning
        }
    }

    /// Slack-style marker token prepended to the summary line.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Ok => ":white_check_mark:",
            Self::Warning => ":warning:",
            Self::Alert => ":rotating_light:",
        }
    }
}

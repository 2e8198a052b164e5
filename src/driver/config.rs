use chrono::NaiveDate;
use thiserror::Error;

use crate::core::budget::BudgetContext;
use crate::core::error::ReportError;
use crate::core::window::DEFAULT_WINDOW_DAYS;

pub const WINDOW_DAYS_VAR: &str = "REPORT_WINDOW_DAYS";
pub const TOP_ITEMS_VAR: &str = "NUMBER_OF_ITEMS";
pub const ACCOUNT_NAME_VAR: &str = "AWS_ACCOUNT_NAME";
pub const BUCKET_VAR: &str = "REPORT_BUCKET";
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const CREDITS_EXPIRE_VAR: &str = "CREDITS_EXPIRE_DATE";
pub const CREDITS_AS_OF_VAR: &str = "CREDITS_REMAINING_AS_OF";
pub const CREDITS_REMAINING_VAR: &str = "CREDITS_REMAINING";

const BUDGET_DATE_FORMAT: &str = "%m/%d/%Y";
const DEFAULT_TOP_ITEMS: usize = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} is not a whole number")]
    InvalidCount { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    ZeroCount { name: &'static str },
    #[error("invalid {name}: {value:?} is not a decimal number")]
    InvalidDecimal { name: &'static str, value: String },
    #[error("invalid {name}: {value:?} is not a MM/DD/YYYY date")]
    InvalidDate { name: &'static str, value: String },
}

/// Credit budget as configured; turned into a [`BudgetContext`] per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetConfig {
    pub expires_on: NaiveDate,
    pub as_of: NaiveDate,
    pub remaining: f64,
}

impl BudgetConfig {
    pub fn context(&self) -> Result<BudgetContext, ReportError> {
        BudgetContext::new(self.expires_on, self.as_of, self.remaining)
    }
}

/// Everything the handler needs from the environment, resolved once per
/// invocation. The core never reads the environment; it only sees values
/// carried in here.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub window_days: usize,
    pub top_items: usize,
    pub account_name: Option<String>,
    pub bucket: Option<String>,
    pub webhook_url: Option<String>,
    pub budget: Option<BudgetConfig>,
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name → value source. `from_env` wires in the process
    /// environment; tests pass closures over maps.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let window_days = match lookup(WINDOW_DAYS_VAR) {
            Some(raw) => parse_count(WINDOW_DAYS_VAR, &raw)?,
            None => DEFAULT_WINDOW_DAYS,
        };
        if window_days == 0 {
            return Err(ConfigError::ZeroCount {
                name: WINDOW_DAYS_VAR,
            });
        }
        let top_items = match lookup(TOP_ITEMS_VAR) {
            Some(raw) => parse_count(TOP_ITEMS_VAR, &raw)?,
            None => DEFAULT_TOP_ITEMS,
        };

        Ok(Self {
            window_days,
            top_items,
            account_name: lookup(ACCOUNT_NAME_VAR),
            bucket: lookup(BUCKET_VAR),
            webhook_url: lookup(WEBHOOK_URL_VAR),
            budget: budget_from_lookup(&lookup)?,
        })
    }
}

/// All three credit variables present → a budget; none → no budget; a
/// partial trio degrades to no budget with a warning rather than failing
/// the report.
fn budget_from_lookup(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<BudgetConfig>, ConfigError> {
    let expire = lookup(CREDITS_EXPIRE_VAR);
    let as_of = lookup(CREDITS_AS_OF_VAR);
    let remaining = lookup(CREDITS_REMAINING_VAR);

    let (expire, as_of, remaining) = match (expire, as_of, remaining) {
        (Some(expire), Some(as_of), Some(remaining)) => (expire, as_of, remaining),
        (None, None, None) => return Ok(None),
        _ => {
            tracing::warn!("partial credit budget configuration, reporting without a budget");
            return Ok(None);
        }
    };

    Ok(Some(BudgetConfig {
        expires_on: parse_budget_date(CREDITS_EXPIRE_VAR, &expire)?,
        as_of: parse_budget_date(CREDITS_AS_OF_VAR, &as_of)?,
        remaining: parse_decimal(CREDITS_REMAINING_VAR, &remaining)?,
    }))
}

fn parse_count(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidCount {
        name,
        value: raw.to_string(),
    })
}

fn parse_decimal(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidDecimal {
        name,
        value: raw.to_string(),
    })
}

fn parse_budget_date(name: &'static str, raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), BUDGET_DATE_FORMAT).map_err(|_| {
        ConfigError::InvalidDate {
            name,
            value: raw.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<RunConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.window_days, 7);
        assert_eq!(cfg.top_items, 1);
        assert!(cfg.account_name.is_none());
        assert!(cfg.bucket.is_none());
        assert!(cfg.webhook_url.is_none());
        assert!(cfg.budget.is_none());
    }

    #[test]
    fn reads_all_plain_values() {
        let cfg = config_from(&[
            (WINDOW_DAYS_VAR, "14"),
            (TOP_ITEMS_VAR, "5"),
            (ACCOUNT_NAME_VAR, "prod"),
            (BUCKET_VAR, "reports-bucket"),
            (WEBHOOK_URL_VAR, "https://hooks.example.com/abc"),
        ])
        .unwrap();
        assert_eq!(cfg.window_days, 14);
        assert_eq!(cfg.top_items, 5);
        assert_eq!(cfg.account_name.as_deref(), Some("prod"));
        assert_eq!(cfg.bucket.as_deref(), Some("reports-bucket"));
        assert_eq!(cfg.webhook_url.as_deref(), Some("https://hooks.example.com/abc"));
    }

    #[test]
    fn full_budget_trio_is_parsed() {
        let cfg = config_from(&[
            (CREDITS_EXPIRE_VAR, "02/01/2024"),
            (CREDITS_AS_OF_VAR, "01/01/2024"),
            (CREDITS_REMAINING_VAR, "3100"),
        ])
        .unwrap();
        let budget = cfg.budget.unwrap();
        assert_eq!(budget.remaining, 3100.0);
        let ctx = budget.context().unwrap();
        assert_eq!(ctx.daily_allowance, 100.0);
    }

    #[test]
    fn partial_budget_trio_degrades_to_none() {
        let cfg = config_from(&[(CREDITS_EXPIRE_VAR, "02/01/2024")]).unwrap();
        assert!(cfg.budget.is_none());
    }

    #[test]
    fn malformed_budget_date_is_an_error() {
        let err = config_from(&[
            (CREDITS_EXPIRE_VAR, "2024-02-01"),
            (CREDITS_AS_OF_VAR, "01/01/2024"),
            (CREDITS_REMAINING_VAR, "3100"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
        assert!(err.to_string().contains("MM/DD/YYYY"));
    }

    #[test]
    fn malformed_remaining_is_an_error() {
        let err = config_from(&[
            (CREDITS_EXPIRE_VAR, "02/01/2024"),
            (CREDITS_AS_OF_VAR, "01/01/2024"),
            (CREDITS_REMAINING_VAR, "lots"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDecimal { .. }));
    }

    #[test]
    fn malformed_count_is_an_error() {
        let err = config_from(&[(TOP_ITEMS_VAR, "three")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCount { .. }));
    }

    #[test]
    fn zero_window_is_rejected() {
        let err = config_from(&[(WINDOW_DAYS_VAR, "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCount { .. }));
    }

    #[test]
    fn expired_budget_surfaces_when_context_is_built() {
        let cfg = config_from(&[
            (CREDITS_EXPIRE_VAR, "01/01/2024"),
            (CREDITS_AS_OF_VAR, "02/01/2024"),
            (CREDITS_REMAINING_VAR, "100"),
        ])
        .unwrap();
        assert!(cfg.budget.unwrap().context().is_err());
    }
}

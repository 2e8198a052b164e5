use thiserror::Error;

/// Errors produced while turning billing data into a report. Any of these
/// fails the whole run; the report is never partially rendered.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("invalid cost amount {amount:?} for {service} on {date}")]
    InvalidAmount {
        service: String,
        date: String,
        amount: String,
    },

    #[error("missing UnblendedCost metric for {service} on {date}")]
    MissingAmount { service: String, date: String },

    /// The credit expiration date is on or before the as-of date, so no
    /// daily allowance can be derived.
    #[error("credit budget window has {days_left} days left; expiration must be after the as-of date")]
    EmptyBudgetWindow { days_left: i64 },
}

use chrono::{Duration, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// The canonical run of consecutive calendar days a report covers, in
/// chronological order. Every dense cost vector is aligned to this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    dates: Vec<NaiveDate>,
}

impl DateWindow {
    /// Window of `days` consecutive dates ending at `last_day` inclusive.
    pub fn ending_at(last_day: NaiveDate, days: usize) -> Self {
        let dates = (0..days)
            .map(|offset| last_day - Duration::days((days - 1 - offset) as i64))
            .collect();
        Self { dates }
    }

    /// Window ending the day before `today`.
    pub fn ending_yesterday(today: NaiveDate, days: usize) -> Self {
        Self::ending_at(today - Duration::days(1), days)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Day after the window, for query APIs with an exclusive end date.
    pub fn end_exclusive(&self) -> Option<NaiveDate> {
        self.last().map(|d| d + Duration::days(1))
    }

    /// The window as `YYYY-MM-DD` keys, the form billing data is keyed by.
    pub fn keys(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }
}

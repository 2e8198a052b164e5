use std::collections::HashMap;

use crate::core::error::ReportError;
use crate::core::models::billing::{CostAndUsageResponse, UNBLENDED_COST};
use crate::core::models::series::ServiceSeries;
use crate::core::window::DateWindow;

/// Reshape sparse grouped billing results into one dense, window-aligned
/// cost vector per service.
///
/// Two phases: collect a service → (date → amount) map while recording the
/// order services were first seen, then materialize a vector per service by
/// looking up every window date with a 0.0 default. Dates outside the window
/// land in the sparse map but are never read back. The encounter order is
/// what ranking later uses to break ties.
pub fn densify(
    response: &CostAndUsageResponse,
    window: &DateWindow,
) -> Result<Vec<ServiceSeries>, ReportError> {
    let mut order: Vec<String> = Vec::new();
    let mut sparse: HashMap<String, HashMap<String, f64>> = HashMap::new();

    for day in &response.results_by_time {
        let date = &day.time_period.start;
        for group in &day.groups {
            let Some(service) = group.keys.first() else {
                continue;
            };
            let metric =
                group
                    .metrics
                    .get(UNBLENDED_COST)
                    .ok_or_else(|| ReportError::MissingAmount {
                        service: service.clone(),
                        date: date.clone(),
                    })?;
            let amount: f64 =
                metric
                    .amount
                    .trim()
                    .parse()
                    .map_err(|_| ReportError::InvalidAmount {
                        service: service.clone(),
                        date: date.clone(),
                        amount: metric.amount.clone(),
                    })?;
            if !sparse.contains_key(service) {
                order.push(service.clone());
            }
            sparse.entry(service.clone()).or_default().insert(date.clone(), amount);
        }
    }

    let keys = window.keys();
    Ok(order
        .into_iter()
        .map(|name| {
            let per_date = &sparse[&name];
            let costs = keys
                .iter()
                .map(|key| per_date.get(key).copied().unwrap_or(0.0))
                .collect();
            ServiceSeries { name, costs }
        })
        .collect())
}

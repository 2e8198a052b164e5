use crate::core::models::series::ServiceSeries;

/// Sum a set of series per day index over a `days`-long window. Used for
/// both the "Other" bucket (remainder only) and the "Total" row (all
/// services). A series shorter than the window contributes 0.0 at the
/// missing indices rather than failing.
pub fn sum_by_day<'a, I>(entries: I, days: usize) -> Vec<f64>
where
    I: IntoIterator<Item = &'a ServiceSeries>,
{
    let mut totals = vec![0.0; days];
    for entry in entries {
        for (day, total) in totals.iter_mut().enumerate() {
            *total += entry.costs.get(day).copied().unwrap_or(0.0);
        }
    }
    totals
}

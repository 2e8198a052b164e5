use crate::core::aggregate::sum_by_day;
use crate::core::budget::BudgetContext;
use crate::core::densify::densify;
use crate::core::error::ReportError;
use crate::core::models::billing::CostAndUsageResponse;
use crate::core::models::series::Report;
use crate::core::rank::{rank, split};
use crate::core::render::{render_summary, render_table};
use crate::core::window::DateWindow;

/// Run the whole engine over one billing response: densify, rank, bucket,
/// aggregate, render. Pure; everything the driver needs to ship the report
/// comes back in the `Report`.
pub fn build_report(
    response: &CostAndUsageResponse,
    window: &DateWindow,
    top_n: usize,
    account_name: &str,
    budget: Option<&BudgetContext>,
) -> Result<Report, ReportError> {
    let series = densify(response, window)?;
    let ranked = rank(series);
    let (top, remainder) = split(ranked, top_n);

    let other = sum_by_day(&remainder, window.len());
    let total = sum_by_day(top.iter().chain(&remainder), window.len());

    let table = render_table(&top, &other, &total);
    let total_last_day = total.last().copied().unwrap_or(0.0);
    let summary = render_summary(total_last_day, account_name, budget);

    let mut costs_by_service = top;
    costs_by_service.extend(remainder);

    Ok(Report {
        summary,
        table,
        costs_by_service,
        total,
    })
}

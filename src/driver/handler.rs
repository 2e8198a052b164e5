use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::core::models::series::Report;
use crate::core::report::build_report;
use crate::core::window::DateWindow;
use crate::driver::account;
use crate::driver::billing;
use crate::driver::config::RunConfig;
use crate::driver::storage;
use crate::driver::webhook;

/// Invocation payload. Every field optionally overrides the environment
/// configuration; an empty object is a normal scheduled run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Override for how many services get their own table row.
    pub number_of_items: Option<usize>,
    /// Override for the delivery webhook.
    pub webhook_url: Option<String>,
    /// `YYYY-MM-DD` override of the report's most recent day, for replaying
    /// past windows.
    pub report_date: Option<String>,
}

/// One report invocation: fetch billing data, run the core engine, route
/// the output to the sinks. `dry_run` skips both sinks.
pub async fn run(event: Event, cfg: &RunConfig, dry_run: bool) -> Result<Report> {
    let today = Local::now().date_naive();
    let window = match &event.report_date {
        Some(raw) => {
            let last_day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid report_date {raw:?}"))?;
            DateWindow::ending_at(last_day, cfg.window_days)
        }
        None => DateWindow::ending_yesterday(today, cfg.window_days),
    };
    let top_n = event.number_of_items.unwrap_or(cfg.top_items);
    let budget = cfg.budget.as_ref().map(|b| b.context()).transpose()?;

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let account_name = account::resolve_account_name(cfg.account_name.as_deref(), &aws).await;
    tracing::info!(
        account = %account_name,
        days = window.len(),
        top_n,
        "building daily cost report"
    );

    let ce = aws_sdk_costexplorer::Client::new(&aws);
    let response = billing::fetch_daily_costs(&ce, &window).await?;

    let report = build_report(&response, &window, top_n, &account_name, budget.as_ref())?;
    tracing::info!(services = report.costs_by_service.len(), "report built");

    if dry_run {
        return Ok(report);
    }

    // Webhook first and non-fatal: a delivery failure must not cost us the
    // stored report, and a storage failure fails the run regardless.
    if let Some(url) = event.webhook_url.as_deref().or(cfg.webhook_url.as_deref()) {
        match webhook::post_report(url, &report.summary, &report.table).await {
            Ok(()) => tracing::info!("report delivered to webhook"),
            Err(err) => tracing::warn!("webhook delivery failed: {err:#}"),
        }
    }

    match &cfg.bucket {
        Some(bucket) => {
            let s3 = aws_sdk_s3::Client::new(&aws);
            let body = format!("{}\n\n{}", report.summary, report.table);
            let key = storage::upload_report(&s3, bucket, &body, today).await?;
            tracing::info!(bucket = %bucket, key = %key, "report stored");
        }
        None => tracing::warn!("no report bucket configured, skipping upload"),
    }

    Ok(report)
}

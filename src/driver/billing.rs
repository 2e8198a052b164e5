use anyhow::{Context, Result};
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;

use crate::core::models::billing::{
    CostAndUsageResponse, CostGroup, MetricValue, ResultByTime, TimePeriod,
};
use crate::core::window::DateWindow;

/// Record types excluded from the spend query; credits and one-off charges
/// would swamp the daily service trend.
const EXCLUDED_RECORD_TYPES: [&str; 4] = ["Credit", "Refund", "Upfront", "Support"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query Cost Explorer for daily per-service unblended cost over the
/// window, and hand back the plain wire model the core operates on.
pub async fn fetch_daily_costs(
    client: &Client,
    window: &DateWindow,
) -> Result<CostAndUsageResponse> {
    let (Some(start), Some(end)) = (window.first(), window.end_exclusive()) else {
        anyhow::bail!("cannot query billing data for an empty date window");
    };

    let mut record_types = ce::DimensionValues::builder().key(ce::Dimension::RecordType);
    for record_type in EXCLUDED_RECORD_TYPES {
        record_types = record_types.values(record_type);
    }
    let filter = ce::Expression::builder()
        .not(
            ce::Expression::builder()
                .dimensions(record_types.build())
                .build(),
        )
        .build();

    let period = ce::DateInterval::builder()
        .start(start.format(DATE_FORMAT).to_string())
        .end(end.format(DATE_FORMAT).to_string())
        .build()
        .context("failed to build billing query date interval")?;

    let output = client
        .get_cost_and_usage()
        .time_period(period)
        .granularity(ce::Granularity::Daily)
        .filter(filter)
        .metrics("UnblendedCost")
        .group_by(
            ce::GroupDefinition::builder()
                .r#type(ce::GroupDefinitionType::Dimension)
                .key("SERVICE")
                .build(),
        )
        .send()
        .await
        .context("cost and usage query failed")?;

    Ok(convert(output.results_by_time()))
}

/// Strip the SDK types down to the wire model. Metrics with no amount are
/// dropped here so densification reports them as missing.
fn convert(results: &[ce::ResultByTime]) -> CostAndUsageResponse {
    CostAndUsageResponse {
        results_by_time: results
            .iter()
            .map(|day| ResultByTime {
                time_period: TimePeriod {
                    start: day
                        .time_period()
                        .map(|tp| tp.start().to_string())
                        .unwrap_or_default(),
                    end: day.time_period().map(|tp| tp.end().to_string()),
                },
                groups: day
                    .groups()
                    .iter()
                    .map(|group| CostGroup {
                        keys: group.keys().to_vec(),
                        metrics: group
                            .metrics()
                            .map(|metrics| {
                                metrics
                                    .iter()
                                    .filter_map(|(name, value)| {
                                        value.amount().map(|amount| {
                                            (
                                                name.clone(),
                                                MetricValue {
                                                    amount: amount.to_string(),
                                                    unit: value.unit().map(str::to_string),
                                                },
                                            )
                                        })
                                    })
                                    .collect()
                            })
                            .unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

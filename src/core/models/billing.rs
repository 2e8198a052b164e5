use serde::Deserialize;
use std::collections::HashMap;

/// Metric the report reads from every group.
pub const UNBLENDED_COST: &str = "UnblendedCost";

/// Grouped daily cost data, mirroring the Cost Explorer `GetCostAndUsage`
/// JSON shape. Amounts stay strings until densification parses them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostAndUsageResponse {
    #[serde(rename = "ResultsByTime", default)]
    pub results_by_time: Vec<ResultByTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultByTime {
    #[serde(rename = "TimePeriod")]
    pub time_period: TimePeriod,
    #[serde(rename = "Groups", default)]
    pub groups: Vec<CostGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimePeriod {
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End", default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostGroup {
    #[serde(rename = "Keys", default)]
    pub keys: Vec<String>,
    #[serde(rename = "Metrics", default)]
    pub metrics: HashMap<String, MetricValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricValue {
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Unit", default)]
    pub unit: Option<String>,
}

#[cfg(test)]
impl CostAndUsageResponse {
    /// One day of (service, amount) pairs, for the test suites.
    pub fn day(start: &str, groups: &[(&str, &str)]) -> ResultByTime {
        ResultByTime {
            time_period: TimePeriod {
                start: start.to_string(),
                end: None,
            },
            groups: groups
                .iter()
                .map(|(service, amount)| CostGroup {
                    keys: vec![service.to_string()],
                    metrics: HashMap::from([(
                        UNBLENDED_COST.to_string(),
                        MetricValue {
                            amount: amount.to_string(),
                            unit: Some("USD".to_string()),
                        },
                    )]),
                })
                .collect(),
        }
    }
}

use serde::Serialize;

/// One service's dense daily costs, aligned 1:1 with the report's date
/// window. Built once by densification and treated as immutable after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSeries {
    pub name: String,
    pub costs: Vec<f64>,
}

impl ServiceSeries {
    pub fn new(name: impl Into<String>, costs: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            costs,
        }
    }

    /// Cost on the most recent day of the window.
    pub fn last_day(&self) -> f64 {
        self.costs.last().copied().unwrap_or(0.0)
    }
}

/// Finished report: the rendered text plus the dense series it was rendered
/// from, for programmatic reuse.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub summary: String,
    pub table: String,
    /// Every service in rank order (top entries first, remainder after).
    pub costs_by_service: Vec<ServiceSeries>,
    /// Per-day sum across all services.
    pub total: Vec<f64>,
}

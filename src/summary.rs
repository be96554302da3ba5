use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ranking::types::Report;

/// One analyze run flattened for the append-only CSV log.
///
/// Result runs fill the comparison fields; failed runs carry only
/// `error_type`/`error_message` alongside the timestamp.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,

    pub selected_id: Option<String>,
    pub metric: Option<String>,
    pub value: Option<f64>,
    pub average: f64,
    pub rank: Option<usize>,
    pub total: usize,
    pub percentile: Option<f64>,
    pub badge: Option<String>,
    pub tier: Option<String>,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl RunSummary {
    pub fn from_report(report: &Report, metric: &str) -> Self {
        RunSummary {
            timestamp: Utc::now(),
            selected_id: report.selected.as_ref().map(|r| r.id.clone()),
            metric: Some(metric.to_string()),
            value: report.selected.as_ref().map(|r| r.metric(metric)),
            average: report.average,
            rank: report.rank,
            total: report.total,
            percentile: report.percentile,
            badge: report.badge.clone(),
            tier: report.selected.as_ref().and_then(|r| r.tier.clone()),
            ..Default::default()
        }
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        RunSummary {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    /// Set the feed source (URL or file path) the run read from.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::engine::report;
    use crate::ranking::types::Row;
    use std::collections::HashMap;

    fn row(id: &str, conv: f64) -> Row {
        Row {
            id: id.to_string(),
            metrics: HashMap::from([("conv".to_string(), conv)]),
            tier: Some("Gold".to_string()),
        }
    }

    #[test]
    fn test_from_report_fills_comparison_fields() {
        let rows = vec![row("a", 10.0), row("b", 30.0)];
        let r = report(&rows, Some("b"), "conv");
        let summary = RunSummary::from_report(&r, "conv").with_source("feed.json");

        assert_eq!(summary.selected_id.as_deref(), Some("b"));
        assert_eq!(summary.value, Some(30.0));
        assert_eq!(summary.average, 20.0);
        assert_eq!(summary.rank, Some(1));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.tier.as_deref(), Some("Gold"));
        assert_eq!(summary.source.as_deref(), Some("feed.json"));
        assert!(summary.error_type.is_none());
    }

    #[test]
    fn test_from_report_without_selection() {
        let rows = vec![row("a", 10.0)];
        let r = report(&rows, None, "conv");
        let summary = RunSummary::from_report(&r, "conv");

        assert!(summary.selected_id.is_none());
        assert!(summary.value.is_none());
        assert!(summary.rank.is_none());
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn test_from_error() {
        let summary = RunSummary::from_error("fetch_error", "connection refused");
        assert_eq!(summary.error_type.as_deref(), Some("fetch_error"));
        assert_eq!(summary.error_message.as_deref(), Some("connection refused"));
        assert_eq!(summary.total, 0);
    }
}

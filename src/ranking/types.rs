//! Data types shared by the ranking pipeline.

use serde::Serialize;
use std::collections::HashMap;

/// One entity's normalized record from the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Unique entity identifier (e.g. an influencer id or UTM tag).
    /// Uniqueness is assumed but not enforced by the feed.
    pub id: String,
    /// Metric name to coerced numeric value, one entry per declared metric.
    pub metrics: HashMap<String, f64>,
    /// Display-only categorical label (Bronze..Diamond); never used in
    /// ranking math.
    pub tier: Option<String>,
}

impl Row {
    /// The row's value for `metric`; 0 when the metric was not declared.
    pub fn metric(&self, metric: &str) -> f64 {
        self.metrics.get(metric).copied().unwrap_or(0.0)
    }
}

/// An ordered feed snapshot, immutable after load and replaced wholesale on
/// reload.
pub type Dataset = Vec<Row>;

/// Derived comparison values for one (dataset, selection, metric) triple.
///
/// `rank`, `percentile`, and `badge` are `None` both when nothing is selected
/// and when the selected id is absent from the dataset; consumers render a
/// placeholder, never a zero.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub average: f64,
    pub ranked: Vec<Row>,
    pub selected: Option<Row>,
    pub rank: Option<usize>,
    pub total: usize,
    pub percentile: Option<f64>,
    pub badge: Option<String>,
}

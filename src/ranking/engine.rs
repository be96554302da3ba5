//! Core ranking computations: average, descending ranking, rank, percentile.
//!
//! Everything here is a pure function of (dataset, selection, metric); no I/O
//! and no mutation of the loaded dataset.

use crate::ranking::badge::badge;
use crate::ranking::types::{Report, Row};

/// Arithmetic mean of `metric` over the whole dataset. Returns 0.0 for an
/// empty dataset.
///
/// The denominator is always the full row count; search filtering never
/// narrows the average population.
pub fn average(rows: &[Row], metric: &str) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|r| r.metric(metric)).sum::<f64>() / rows.len() as f64
}

/// A copy of the dataset sorted by `metric` descending.
///
/// Equal metric values order by full-id lexicographic ascending, so the
/// ranking is deterministic regardless of feed order.
pub fn ranked(rows: &[Row], metric: &str) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.metric(metric)
            .total_cmp(&a.metric(metric))
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// The 1-based position of `id` in a ranked list, or `None` when absent.
/// Duplicate ids resolve to the first match.
pub fn rank_of(ranked: &[Row], id: &str) -> Option<usize> {
    ranked.iter().position(|r| r.id == id).map(|i| i + 1)
}

/// Relative standing of a 1-based `rank` among `total` rows, 0–100.
///
/// The denominator floor of 1 keeps a single-row dataset finite (rank 1 of 1
/// yields 0, not a division by zero).
pub fn percentile(rank: usize, total: usize) -> f64 {
    let denominator = (total.saturating_sub(1)).max(1) as f64;
    ((total - rank) as f64 / denominator) * 100.0
}

/// Computes the full consumer-facing [`Report`] for a dataset, an optional
/// selected id, and the active metric.
///
/// "Nothing selected" and "selected id not found" both produce a report with
/// `None` rank/percentile/badge; neither is an error.
pub fn report(rows: &[Row], selected_id: Option<&str>, metric: &str) -> Report {
    let average = average(rows, metric);
    let ranked = ranked(rows, metric);
    let total = ranked.len();

    let selected = selected_id
        .and_then(|id| rows.iter().find(|r| r.id == id))
        .cloned();

    let (rank, pct, standing) = match (&selected, selected_id) {
        (Some(_), Some(id)) => {
            // selected is drawn from rows, so the id is always present here
            let rank = rank_of(&ranked, id).unwrap_or(total);
            let pct = percentile(rank, total);
            (Some(rank), Some(pct), Some(badge(pct)))
        }
        _ => (None, None, None),
    };

    Report {
        average,
        ranked,
        selected,
        rank,
        total,
        percentile: pct,
        badge: standing,
    }
}

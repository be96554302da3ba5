//! Ordering and filtering for the searchable id selector.
//!
//! This ordering is presentation-side only; the ranking itself sorts by
//! metric in [`crate::ranking::engine`].

use crate::ranking::types::Row;

/// Extracts the trailing decimal suffix of an id for selector sorting:
/// `"influencer-2602-439"` → `Some(439)`. Trailing whitespace is ignored.
/// Returns `None` when the id does not end in digits (such ids sort last).
pub fn id_tail_number(id: &str) -> Option<u64> {
    let trimmed = id.trim_end();
    let digits: String = trimmed
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// A copy of the dataset in selector order: ascending trailing suffix, ids
/// without a suffix last, ties broken by full-id lexicographic comparison.
pub fn selector_order(rows: &[Row]) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ta = id_tail_number(&a.id).unwrap_or(u64::MAX);
        let tb = id_tail_number(&b.id).unwrap_or(u64::MAX);
        ta.cmp(&tb).then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// Rows whose id contains `query` case-insensitively, preserving row order.
/// An empty (or all-whitespace) query returns the full list unchanged.
pub fn search<'a>(rows: &'a [Row], query: &str) -> Vec<&'a Row> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|r| r.id.to_lowercase().contains(&q))
        .collect()
}

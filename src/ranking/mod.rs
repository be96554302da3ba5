//! Performance ranking and comparison.
//!
//! Pure functions over a loaded [`types::Dataset`]: global average for a
//! metric, descending ranking with rank/percentile for a selected entity,
//! badge classification, and the ordering/filtering used by the id selector.

pub mod badge;
pub mod engine;
pub mod selector;
pub mod types;

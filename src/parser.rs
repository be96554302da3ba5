//! JSON parser for performance feeds.

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::ranking::types::Dataset;
use crate::schema::FeedSchema;

/// Decodes a JSON feed body into a normalized [`Dataset`].
///
/// The body must be a top-level JSON array of objects; anything else is a
/// parse failure. Each record is normalized through `schema`. Row order
/// follows the feed; duplicate ids are kept as-is.
///
/// # Errors
///
/// Returns an error if the bytes are not a JSON array of record objects.
pub fn parse_feed(bytes: &[u8], schema: &FeedSchema) -> Result<Dataset> {
    let records: Vec<Map<String, Value>> =
        serde_json::from_slice(bytes).context("feed is not a JSON array of records")?;

    Ok(records
        .iter()
        .map(|record| schema.row_from_record(record))
        .collect())
}

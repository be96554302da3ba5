//! Per-deployment field mapping for the feed.
//!
//! Feeds arrive as loose JSON records whose field names vary per deployment
//! (`Influencer ID`/`1st_total`/`2nd_total`/`Tier`, `UTM`/`conversion`, ...).
//! A [`FeedSchema`] names which key is the entity id, which keys are numeric
//! metrics, and which key (if any) carries the display tier, so records are
//! validated and coerced at the boundary instead of trusted.

use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::ranking::types::Row;

/// Maps loose feed record keys onto [`Row`] fields.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "id_field": "UTM",
///   "metric_fields": ["conversion"],
///   "tier_field": null
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSchema {
    pub id_field: String,
    pub metric_fields: Vec<String>,
    #[serde(default)]
    pub tier_field: Option<String>,
}

impl Default for FeedSchema {
    /// The influencer-dashboard mapping, used when no schema file is given.
    fn default() -> Self {
        FeedSchema {
            id_field: "Influencer ID".to_string(),
            metric_fields: vec!["1st_total".to_string(), "2nd_total".to_string()],
            tier_field: Some("Tier".to_string()),
        }
    }
}

impl FeedSchema {
    /// Loads the schema from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let schema: FeedSchema = serde_json::from_str(&content)?;
        if schema.metric_fields.is_empty() {
            bail!("schema at {path} declares no metric fields");
        }
        Ok(schema)
    }

    /// The metric used when the caller does not name one.
    pub fn default_metric(&self) -> &str {
        &self.metric_fields[0]
    }

    /// Builds a [`Row`] from one loose feed record.
    ///
    /// The id is stringified (a missing id becomes the empty string), every
    /// declared metric is coerced to a finite number, and the tier value is
    /// carried over untouched when present. Undeclared fields are dropped.
    pub fn row_from_record(&self, record: &Map<String, Value>) -> Row {
        let id = match record.get(&self.id_field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let mut metrics = HashMap::with_capacity(self.metric_fields.len());
        for field in &self.metric_fields {
            let value = record.get(field).map_or(0.0, coerce_number);
            metrics.insert(field.clone(), value);
        }

        let tier = self.tier_field.as_ref().and_then(|field| {
            match record.get(field) {
                Some(Value::String(s)) => Some(s.clone()),
                _ => None,
            }
        });

        Row { id, metrics, tier }
    }
}

/// Coerces a loose JSON value to a finite number.
///
/// Numbers pass through, numeric strings parse (whitespace trimmed, empty
/// string is 0), booleans map to 0/1, and anything else — null, objects,
/// arrays, unparseable or non-finite values — collapses to 0.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    };

    if n.is_finite() { n } else { 0.0 }
}

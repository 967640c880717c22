//! Shape heuristic for fetched JSON payloads.
//!
//! Given an array-wrapped payload, decide whether it reads best as a chart,
//! a table, or a single card, and pick chart axis fields by position.
//! Field order matters here: "first field" means first key in the payload
//! object, which `serde_json`'s `preserve_order` feature keeps stable.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde_json::Value;

/// Presentation shape inferred from a fetched payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    Chart,
    Table,
    Card,
}

/// Wrap a payload for classification: arrays pass through element-wise,
/// everything else becomes a single-element list.
#[must_use]
pub fn wrap_payload(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Classify an array-wrapped payload.
///
/// Empty data reads as a card; three or more rows whose first row carries at
/// least one numeric field read as a chart; more than one row reads as a
/// table; a single row reads as a card.
#[must_use]
pub fn classify_payload(rows: &[Value]) -> ResponseShape {
    if rows.is_empty() {
        return ResponseShape::Card;
    }
    let first_has_number = rows[0]
        .as_object()
        .is_some_and(|obj| obj.values().any(Value::is_number));
    if rows.len() >= 3 && first_has_number {
        ResponseShape::Chart
    } else if rows.len() > 1 {
        ResponseShape::Table
    } else {
        ResponseShape::Card
    }
}

/// Axis fields selected for a bar chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartFields {
    /// Category axis: first non-numeric field, else the first field.
    pub key_field: String,
    /// Value axis: first numeric field, else the second field.
    pub value_field: String,
}

/// Pick chart axis fields from the first row.
///
/// Returns `None` when the row shape cannot satisfy both axes — no rows, a
/// non-object first row, or too few fields. Callers skip chart rendering in
/// that case.
#[must_use]
pub fn chart_fields(rows: &[Value]) -> Option<ChartFields> {
    let first = rows.first()?.as_object()?;
    let key_field = first
        .iter()
        .find(|(_, value)| !value.is_number())
        .map(|(key, _)| key.clone())
        .or_else(|| first.keys().next().cloned())?;
    let value_field = first
        .iter()
        .find(|(_, value)| value.is_number())
        .map(|(key, _)| key.clone())
        .or_else(|| first.keys().nth(1).cloned())?;
    Some(ChartFields { key_field, value_field })
}

/// Display value for an API table cell.
///
/// Looks up the lower-cased header key first, then the exact header; strings
/// render bare, any other JSON value renders as JSON text, and missing
/// fields render as an em dash.
#[must_use]
pub fn cell_value(item: &Value, header: &str) -> String {
    let found = item
        .get(header.to_ascii_lowercase())
        .or_else(|| item.get(header));
    match found {
        None => "—".to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

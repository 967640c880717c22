//! Tagged component schema consumed by the dynamic renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! A dynamic layout is an ordered list of [`ComponentItem`] descriptors.
//! The `type` tag selects the variant and `props` carries its payload, so
//! layouts serialize naturally as JSON. Unrecognized tags decode to
//! [`ComponentItem::Unknown`] — a single bad entry renders a placeholder
//! instead of sinking the whole layout.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`parse_layout`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The text is not a valid JSON layout list.
    #[error("failed to decode component layout: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a JSON layout list.
///
/// Unknown `type` tags decode as [`ComponentItem::Unknown`]; only malformed
/// JSON or mismatched props fail.
///
/// # Errors
///
/// Returns [`SchemaError::Decode`] when the text is not a valid layout list.
pub fn parse_layout(text: &str) -> Result<Vec<ComponentItem>, SchemaError> {
    Ok(serde_json::from_str(text)?)
}

/// One renderable descriptor in a dynamic layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum ComponentItem {
    Text(TextProps),
    Chart(ChartProps),
    Table(TableProps),
    Card(CardProps),
    /// Catch-all for tags this renderer does not know.
    #[serde(other)]
    Unknown,
}

/// Props for a text block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub variant: TextVariant,
    pub content: String,
    #[serde(default)]
    pub align: Align,
}

/// Text weight. Unrecognized variant names fall back to plain paragraph
/// styling rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Heading,
    Subheading,
    #[default]
    Paragraph,
    #[serde(other)]
    Other,
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Props for a chart block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProps {
    /// Declared chart kind. Carried through untouched; the renderer
    /// currently draws every chart as a bar chart.
    pub chart_type: String,
    pub title: String,
    /// Data rows, one JSON object per bar.
    pub data: Vec<Value>,
    /// Field name read for the category axis.
    pub x_key: String,
    /// Field name read for the value axis.
    pub y_key: String,
}

/// Props for a table block. Rows are positional — cell order follows the
/// header order, cells are not keyed by header name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableProps {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    #[serde(default)]
    pub striped: bool,
    #[serde(default)]
    pub hoverable: bool,
}

/// Props for a card block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardProps {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub content: String,
}

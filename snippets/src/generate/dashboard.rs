//! Dashboard generator: one fixed sample layout rendered dynamically.
//!
//! The layout lives as JSON so the preview exercises the same decode path a
//! real schema payload would take; the prompt itself is not consulted.

use log::warn;

use crate::schema::parse_layout;

use super::{GeneratedComponent, Preview, card};

/// Sample layout shown for dashboard prompts.
const SAMPLE_LAYOUT: &str = r#"[
  {
    "type": "text",
    "props": {
      "variant": "heading",
      "content": "📊 Monthly Sales Dashboard",
      "align": "center"
    }
  },
  {
    "type": "chart",
    "props": {
      "chartType": "bar",
      "title": "Sales by Month",
      "data": [
        { "month": "January", "sales": 5000 },
        { "month": "February", "sales": 7500 },
        { "month": "March", "sales": 6200 }
      ],
      "xKey": "month",
      "yKey": "sales"
    }
  },
  {
    "type": "table",
    "props": {
      "headers": ["Name", "Email"],
      "rows": [
        ["Alice Smith", "alice@example.com"],
        ["Bob Johnson", "bob@example.com"]
      ],
      "striped": true,
      "hoverable": true
    }
  },
  {
    "type": "card",
    "props": {
      "title": "John Doe",
      "subtitle": "Manager",
      "image": "https://via.placeholder.com/150",
      "content": "john.doe@example.com"
    }
  }
]"#;

/// Generate the sample dashboard snippet.
///
/// A decode failure of the embedded layout downgrades to the card generator
/// with a diagnostic log line; the caller never sees an error.
#[must_use]
pub fn generate(_prompt: &str) -> GeneratedComponent {
    match parse_layout(SAMPLE_LAYOUT) {
        Ok(items) => GeneratedComponent {
            preview: Preview::Dashboard(items),
            code: dashboard_code(),
        },
        Err(err) => {
            warn!("dashboard layout decode failed, falling back to card: {err}");
            card::generate()
        }
    }
}

fn dashboard_code() -> String {
    format!(
        r##"use leptos::prelude::*;
use snippets::schema::parse_layout;

use crate::components::dynamic_renderer::DynamicRenderer;

const LAYOUT: &str = r#"{SAMPLE_LAYOUT}"#;

#[component]
pub fn DynamicDashboard() -> impl IntoView {{
    let items = parse_layout(LAYOUT).unwrap_or_default();
    view! {{ <DynamicRenderer items/> }}
}}
"##
    )
}

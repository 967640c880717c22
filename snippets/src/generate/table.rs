//! Static table generator with synthesized sample rows.

use crate::extract::{DEFAULT_TABLE_HEADERS, extract_headers};
use crate::sample::synthesize_rows;

use super::{GeneratedComponent, Preview};

/// Generate a static data table from the prompt's header list.
///
/// Prompts without an explicit header phrase fall back to the default
/// three-column set. The emitted code inlines the literal headers and rows
/// so the snippet stands alone.
#[must_use]
pub fn generate(prompt: &str) -> GeneratedComponent {
    let headers = extract_headers(prompt).unwrap_or_else(default_headers);
    let rows = synthesize_rows(&headers);
    let code = table_code(&headers, &rows);
    GeneratedComponent {
        preview: Preview::Table { headers, rows },
        code,
    }
}

fn default_headers() -> Vec<String> {
    DEFAULT_TABLE_HEADERS.iter().map(|h| (*h).to_owned()).collect()
}

fn table_code(headers: &[String], rows: &[Vec<String>]) -> String {
    let header_cells = headers
        .iter()
        .map(|header| format!("                        <th>\"{header}\"</th>"))
        .collect::<Vec<_>>()
        .join("\n");

    let body_rows = rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| format!("                            <td>\"{cell}\"</td>"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("                    <tr>\n{cells}\n                    </tr>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"use leptos::prelude::*;

#[component]
pub fn DataTable() -> impl IntoView {{
    view! {{
        <div class="data-table">
            <table>
                <thead>
                    <tr>
{header_cells}
                    </tr>
                </thead>
                <tbody>
{body_rows}
                </tbody>
            </table>
        </div>
    }}
}}
"#
    )
}

//! API-backed table generator.
//!
//! The preview fetches live rows at render time; the emitted code bakes the
//! resolved URL and header list in, so the snippet carries no runtime
//! dependency on the extraction utilities.

use crate::extract::{DEFAULT_API_HEADERS, extract_api_url, extract_headers};

use super::{GeneratedComponent, Preview};

/// Generate a live table over the endpoint named in the prompt.
#[must_use]
pub fn generate(prompt: &str) -> GeneratedComponent {
    let url = extract_api_url(prompt);
    let headers = extract_headers(prompt).unwrap_or_else(default_headers);
    let code = api_table_code(&url, &headers);
    GeneratedComponent {
        preview: Preview::ApiTable { url, headers },
        code,
    }
}

fn default_headers() -> Vec<String> {
    DEFAULT_API_HEADERS.iter().map(|h| (*h).to_owned()).collect()
}

fn api_table_code(url: &str, headers: &[String]) -> String {
    let header_cells = headers
        .iter()
        .map(|header| format!("                                <th>\"{header}\"</th>"))
        .collect::<Vec<_>>()
        .join("\n");

    let row_cells = headers
        .iter()
        .map(|header| {
            format!("                                    <td>{{cell(row, \"{header}\")}}</td>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn ApiDataTable() -> impl IntoView {{
    let rows = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {{
        match gloo_net::http::Request::get("{url}").send().await {{
            Ok(resp) if !resp.ok() => {{
                error.set(Some(format!("HTTP error! Status: {{}}", resp.status())));
            }}
            Ok(resp) => match resp.json::<Value>().await {{
                Ok(Value::Array(items)) => rows.set(items),
                Ok(other) => rows.set(vec![other]),
                Err(err) => error.set(Some(err.to_string())),
            }},
            Err(err) => error.set(Some(err.to_string())),
        }}
        loading.set(false);
    }});

    fn cell(row: &Value, key: &str) -> String {{
        match row.get(key.to_ascii_lowercase()).or_else(|| row.get(key)) {{
            None => "—".to_owned(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }}
    }}

    view! {{
        <div class="api-table">
            {{move || {{
                if loading.get() {{
                    return view! {{ <div class="api-table__loading">"Loading data..."</div> }}
                        .into_any();
                }}
                if let Some(message) = error.get() {{
                    return view! {{
                        <div class="api-table__error">
                            {{format!("Failed to fetch data: {{message}}")}}
                        </div>
                    }}
                        .into_any();
                }}
                if rows.get().is_empty() {{
                    return view! {{ <div class="api-table__empty">"No data available"</div> }}
                        .into_any();
                }}
                view! {{
                    <table>
                        <thead>
                            <tr>
{header_cells}
                            </tr>
                        </thead>
                        <tbody>
                            {{rows
                                .get()
                                .iter()
                                .map(|row| view! {{
                                    <tr>
{row_cells}
                                    </tr>
                                }})
                                .collect::<Vec<_>>()}}
                        </tbody>
                    </table>
                }}
                    .into_any()
            }}}}
        </div>
    }}
}}
"#
    )
}

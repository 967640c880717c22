//! Search-driven API panel that classifies the payload shape.
//!
//! SYSTEM CONTEXT
//! ==============
//! One request may be in flight at a time; the search button stays disabled
//! until it settles. Results render as a chart, table, or card per the shape
//! heuristic. The result components are public because generated search
//! snippets reuse them.

#[cfg(test)]
#[path = "api_search_test.rs"]
mod api_search_test;

use leptos::prelude::*;
use serde_json::Value;

use snippets::shape::{ResponseShape, chart_fields, classify_payload, wrap_payload};

use crate::components::bar_chart::BarChartView;
use crate::net::api::{ApiRequest, fetch_json};
use crate::state::request::RequestPhase;

/// Columns shown in result tables and fields shown on result cards.
const RESULT_FIELD_LIMIT: usize = 5;

/// Search panel over one endpoint.
///
/// Mounting fires an unsearched load; the button fires a `q=`-filtered one.
#[component]
pub fn ApiSearchView(url: String) -> impl IntoView {
    let phase = RwSignal::new(RequestPhase::Idle);
    let rows = RwSignal::new(Vec::<Value>::new());
    let term = RwSignal::new(String::new());
    let searched = RwSignal::new(false);

    let run = move |url: String, search: String| {
        if phase.get().is_loading() {
            return;
        }
        phase.set(RequestPhase::Loading);
        searched.set(!search.trim().is_empty());
        let request = ApiRequest::search(&url, &search);
        leptos::task::spawn_local(async move {
            match fetch_json(&request).await {
                Ok(payload) => {
                    rows.set(wrap_payload(payload));
                    phase.set(RequestPhase::Success);
                }
                Err(err) => phase.set(RequestPhase::Error(err.to_string())),
            }
        });
    };

    // Initial unsearched load when the snippet mounts.
    run(url.clone(), String::new());

    let search_url = url.clone();
    let on_search = move |_| run(search_url.clone(), term.get());

    view! {
        <div class="api-search">
            <h1 class="api-search__title">"API Search"</h1>
            <div class="api-search__controls">
                <input
                    class="api-search__input"
                    type="text"
                    placeholder="Enter search term..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    on:click=on_search
                    disabled=move || phase.get().is_loading()
                >
                    "Search"
                </button>
            </div>
            {move || result_view(&phase.get(), &rows.get(), searched.get())}
        </div>
    }
}

/// Pick the result rendering for the current phase and payload.
fn result_view(phase: &RequestPhase, rows: &[Value], searched: bool) -> AnyView {
    match phase {
        RequestPhase::Idle => ().into_any(),
        RequestPhase::Loading => view! {
            <div class="api-search__loading"><p>"Loading data..."</p></div>
        }
        .into_any(),
        RequestPhase::Error(message) => view! {
            <div class="api-search__error">{format!("Failed to fetch data: {message}")}</div>
        }
        .into_any(),
        RequestPhase::Success if rows.is_empty() => {
            // An empty result is not an error; it only deserves a message
            // once the user actually searched for something.
            if searched {
                view! {
                    <div class="api-search__empty">
                        "No results found. Try a different search term."
                    </div>
                }
                .into_any()
            } else {
                ().into_any()
            }
        }
        RequestPhase::Success => match classify_payload(rows) {
            ResponseShape::Chart => view! { <ResultChart rows=rows.to_vec()/> }.into_any(),
            ResponseShape::Table => view! { <ResultTable rows=rows.to_vec()/> }.into_any(),
            ResponseShape::Card => view! { <ResultCard row=rows[0].clone()/> }.into_any(),
        },
    }
}

/// Chart result: bars over the heuristic-selected axis fields. Renders
/// nothing when no usable field pair exists.
#[component]
pub fn ResultChart(rows: Vec<Value>) -> impl IntoView {
    match chart_fields(&rows) {
        Some(fields) => view! {
            <div class="result-card">
                <h3 class="result-card__title">"Chart Visualization"</h3>
                <BarChartView data=rows x_key=fields.key_field y_key=fields.value_field/>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}

/// Table result: headers come from the first row's fields, capped at five.
#[component]
pub fn ResultTable(rows: Vec<Value>) -> impl IntoView {
    let headers = result_headers(&rows);

    view! {
        <div class="result-card">
            <h3 class="result-card__title">"Results Table"</h3>
            <table class="data-table__table">
                <thead class="data-table__head">
                    <tr>
                        {headers
                            .iter()
                            .map(|header| view! { <th>{header.clone()}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .iter()
                        .map(|row| {
                            view! {
                                <tr class="data-table__row data-table__row--hoverable">
                                    {headers
                                        .iter()
                                        .map(|header| {
                                            view! { <td>{field_text(row.get(header))}</td> }
                                        })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

/// Card result: title field plus the first few fields as a definition list.
#[component]
pub fn ResultCard(row: Value) -> impl IntoView {
    let title = card_title(&row);
    let fields: Vec<(String, String)> = row
        .as_object()
        .map(|obj| {
            obj.iter()
                .take(RESULT_FIELD_LIMIT)
                .map(|(key, value)| (key.clone(), field_text(Some(value))))
                .collect()
        })
        .unwrap_or_default();

    view! {
        <div class="result-card result-card--single">
            <h3 class="result-card__title">{title}</h3>
            <dl class="result-card__fields">
                {fields
                    .into_iter()
                    .map(|(key, value)| {
                        view! {
                            <div class="result-card__field">
                                <dt>{format!("{key}:")}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </div>
    }
}

/// Result-table headers: the first row's field names, capped.
fn result_headers(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().take(RESULT_FIELD_LIMIT).cloned().collect())
        .unwrap_or_default()
}

/// Card heading: a `name` or `title` field when present.
fn card_title(row: &Value) -> String {
    row.get("name")
        .or_else(|| row.get("title"))
        .and_then(Value::as_str)
        .unwrap_or("Result Details")
        .to_owned()
}

/// Search-result text: nulls and misses go blank, structures render as JSON.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

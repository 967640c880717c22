//! Live API-backed table with an explicit request lifecycle.

use leptos::prelude::*;
use serde_json::Value;

use snippets::shape::{cell_value, wrap_payload};

use crate::net::api::{ApiRequest, fetch_json};
use crate::state::request::RequestPhase;

/// Table fed by one fetch of `url`, rendered under `headers`.
///
/// The fetch starts when the component mounts and is never retried; the
/// request phase drives the loading, error, no-data, and table states. A
/// request that never settles leaves the component loading.
#[component]
pub fn ApiTableView(url: String, headers: Vec<String>) -> impl IntoView {
    let phase = RwSignal::new(RequestPhase::Loading);
    let rows = RwSignal::new(Vec::<Value>::new());

    let request = ApiRequest::get(&url);
    leptos::task::spawn_local(async move {
        match fetch_json(&request).await {
            Ok(payload) => {
                rows.set(wrap_payload(payload));
                phase.set(RequestPhase::Success);
            }
            Err(err) => phase.set(RequestPhase::Error(err.to_string())),
        }
    });

    view! {
        <div class="api-table">
            {move || match phase.get() {
                RequestPhase::Idle | RequestPhase::Loading => view! {
                    <div class="api-table__loading">"Loading data..."</div>
                }
                    .into_any(),
                RequestPhase::Error(message) => view! {
                    <div class="api-table__error">
                        {format!("Failed to fetch data: {message}")}
                    </div>
                }
                    .into_any(),
                RequestPhase::Success => {
                    let data = rows.get();
                    if data.is_empty() {
                        view! { <div class="api-table__empty">"No data available"</div> }
                            .into_any()
                    } else {
                        table_view(headers.clone(), data).into_any()
                    }
                }
            }}
        </div>
    }
}

fn table_view(headers: Vec<String>, rows: Vec<Value>) -> impl IntoView {
    view! {
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
                                    .map(|header| view! { <td>{cell_value(row, header)}</td> })
                                    .collect::<Vec<_>>()}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

//! API search generator.
//!
//! The preview is a search box over the extracted endpoint; results render
//! per the shape heuristic. The emitted code bakes the resolved URL in and
//! leans on the shared result components for the shape-specific views, the
//! same way the preview does.

use crate::extract::extract_api_url;

use super::{GeneratedComponent, Preview};

/// Generate a search panel over the endpoint named in the prompt.
#[must_use]
pub fn generate(prompt: &str) -> GeneratedComponent {
    let url = extract_api_url(prompt);
    let code = api_search_code(&url);
    GeneratedComponent {
        preview: Preview::ApiSearch { url },
        code,
    }
}

fn api_search_code(url: &str) -> String {
    format!(
        r#"use leptos::prelude::*;
use serde_json::Value;

use crate::components::api_search::{{ResultCard, ResultChart, ResultTable}};

#[component]
pub fn ApiSearchPanel() -> impl IntoView {{
    let term = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let searched = RwSignal::new(false);

    let run_search = move |_| {{
        if loading.get() {{
            return;
        }}
        loading.set(true);
        error.set(None);
        let search = term.get().trim().to_owned();
        searched.set(!search.is_empty());
        leptos::task::spawn_local(async move {{
            let url = if search.is_empty() {{
                "{url}".to_owned()
            }} else {{
                format!("{url}{separator}q={{}}", urlencoding::encode(&search))
            }};
            match gloo_net::http::Request::get(&url).send().await {{
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
    }};

    view! {{
        <div class="api-search">
            <h1 class="api-search__title">"API Search"</h1>
            <div class="api-search__controls">
                <input
                    type="text"
                    placeholder="Enter search term..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button on:click=run_search disabled=move || loading.get()>"Search"</button>
            </div>
            {{move || {{
                if loading.get() {{
                    return view! {{ <p class="api-search__loading">"Loading data..."</p> }}
                        .into_any();
                }}
                if let Some(message) = error.get() {{
                    return view! {{
                        <p class="api-search__error">
                            {{format!("Failed to fetch data: {{message}}")}}
                        </p>
                    }}
                        .into_any();
                }}
                let data = rows.get();
                if data.is_empty() {{
                    if searched.get() {{
                        return view! {{
                            <p class="api-search__empty">
                                "No results found. Try a different search term."
                            </p>
                        }}
                            .into_any();
                    }}
                    return ().into_any();
                }}
                // Three or more rows with a numeric field chart best; several
                // rows make a table; a single row reads as a card.
                let numeric = data[0]
                    .as_object()
                    .is_some_and(|obj| obj.values().any(Value::is_number));
                if data.len() >= 3 && numeric {{
                    view! {{ <ResultChart rows=data/> }}.into_any()
                }} else if data.len() > 1 {{
                    view! {{ <ResultTable rows=data/> }}.into_any()
                }} else {{
                    view! {{ <ResultCard row=data[0].clone()/> }}.into_any()
                }}
            }}}}
        </div>
    }}
}}
"#,
        url = url,
        separator = if url.contains('?') { '&' } else { '?' },
    )
}

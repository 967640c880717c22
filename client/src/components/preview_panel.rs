//! Right pane: tabbed preview/code display of the active snippet.

use leptos::prelude::*;

use snippets::Preview;

use crate::components::api_search::ApiSearchView;
use crate::components::api_table::ApiTableView;
use crate::components::canned_card::CannedCardView;
use crate::components::canned_form::CannedFormView;
use crate::components::code_view::CodeView;
use crate::components::dynamic_renderer::DynamicRenderer;
use crate::components::sample_table::SampleTableView;
use crate::state::workspace::{PreviewTab, WorkspaceState};

/// Right pane with Preview and Code tabs.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let select = move |tab: PreviewTab| workspace.update(|state| state.tab = tab);

    view! {
        <div class="preview-panel">
            <div class="preview-panel__header">
                <h2 class="preview-panel__title">"Component Preview"</h2>
                <div class="preview-panel__tabs">
                    <button
                        class="preview-panel__tab"
                        class:preview-panel__tab--active=move || {
                            workspace.get().tab == PreviewTab::Preview
                        }
                        on:click=move |_| select(PreviewTab::Preview)
                    >
                        "Preview"
                    </button>
                    <button
                        class="preview-panel__tab"
                        class:preview-panel__tab--active=move || {
                            workspace.get().tab == PreviewTab::Code
                        }
                        on:click=move |_| select(PreviewTab::Code)
                    >
                        "Code"
                    </button>
                </div>
            </div>
            <div class="preview-panel__content">
                {move || match workspace.get().tab {
                    PreviewTab::Preview => view! { <SnippetView/> }.into_any(),
                    PreviewTab::Code => view! { <CodeView/> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Interpret the active snippet's preview description.
///
/// Swapping the preview rebuilds the subtree, so API-backed components start
/// a fresh request per generated snippet.
#[component]
fn SnippetView() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    view! {
        <div class="snippet-view">
            {move || match workspace.get().component.preview {
                Preview::Placeholder => view! {
                    <div class="snippet-view__placeholder">
                        <p>"Your generated component will appear here"</p>
                    </div>
                }
                    .into_any(),
                Preview::Table { headers, rows } => {
                    view! { <SampleTableView headers rows/> }.into_any()
                }
                Preview::Form => view! { <CannedFormView/> }.into_any(),
                Preview::Card => view! { <CannedCardView/> }.into_any(),
                Preview::Dashboard(items) => view! { <DynamicRenderer items/> }.into_any(),
                Preview::ApiTable { url, headers } => {
                    view! { <ApiTableView url headers/> }.into_any()
                }
                Preview::ApiSearch { url } => view! { <ApiSearchView url/> }.into_any(),
            }}
        </div>
    }
}

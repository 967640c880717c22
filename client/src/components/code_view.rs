//! Line-numbered source display for the code tab.
//!
//! Display only — no syntax highlighting, no editing.

use leptos::prelude::*;

use crate::state::workspace::WorkspaceState;

/// Code tab: the active snippet's source with line numbers.
#[component]
pub fn CodeView() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    view! {
        <div class="code-view">
            <pre class="code-view__pre">
                {move || {
                    let code = workspace.get().component.code;
                    code.lines()
                        .enumerate()
                        .map(|(index, line)| {
                            let numbered = format!("{:>3}  {line}\n", index + 1);
                            view! { <span class="code-view__line">{numbered}</span> }
                        })
                        .collect::<Vec<_>>()
                }}
            </pre>
        </div>
    }
}

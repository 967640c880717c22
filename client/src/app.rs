//! Root application component with context providers and the two-pane shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The studio is a single screen: chat transcript on the left, tabbed
//! preview/code workspace on the right. Shared state lives in `RwSignal`
//! contexts so the panes stay decoupled.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::preview_panel::PreviewPanel;
use crate::state::chat::ChatState;
use crate::state::workspace::WorkspaceState;

/// Root component: header plus the chat and preview panes.
#[component]
pub fn App() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let workspace = RwSignal::new(WorkspaceState::default());

    provide_context(chat);
    provide_context(workspace);

    view! {
        <div class="studio">
            <header class="studio__header">
                <h1 class="studio__title">"Component Studio"</h1>
            </header>
            <div class="studio__panes">
                <div class="studio__pane studio__pane--chat">
                    <ChatPanel/>
                </div>
                <div class="studio__pane studio__pane--preview">
                    <PreviewPanel/>
                </div>
            </div>
        </div>
    }
}

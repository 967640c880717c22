//! Chat panel: prompt transcript and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sending a prompt appends the user message plus a canned bot reply to the
//! transcript and swaps the workspace to the freshly generated snippet.
//! Generation is synchronous and total, so the panel never blocks and never
//! surfaces an error state of its own.

use leptos::prelude::*;

use snippets::generate_component;

use crate::components::chat_message::ChatMessageView;
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::workspace::WorkspaceState;

/// Left pane: transcript plus the prompt input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let prompt = input.get().trim().to_owned();
        if prompt.is_empty() {
            return;
        }

        chat.update(|state| {
            state.messages.push(ChatMessage::user(&prompt));
            state.messages.push(ChatMessage::bot("Generating your component..."));
        });

        let generated = generate_component(&prompt);
        workspace.update(|state| state.component = generated);

        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <h2 class="chat-panel__title">"Component Chat"</h2>
            </div>
            <div class="chat-panel__messages">
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|message| {
                            view! { <ChatMessageView message=message.clone()/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Describe a component to generate..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

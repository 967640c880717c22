//! One transcript bubble with author badge and timestamp.

use leptos::prelude::*;

use crate::state::chat::ChatMessage;
use crate::util::time::clock_label;

/// A single chat bubble; user messages sit right, bot messages sit left.
#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user;
    let content = message.content;
    let time = clock_label(message.timestamp);

    view! {
        <div class="chat-message" class:chat-message--user=is_user>
            <div class="chat-message__bubble">
                {(!is_user)
                    .then(|| view! { <span class="chat-message__avatar">"AI"</span> })}
                <div class="chat-message__body">
                    <p class="chat-message__content">{content}</p>
                    <p class="chat-message__time">{time}</p>
                </div>
                {is_user
                    .then(|| {
                        view! {
                            <span class="chat-message__avatar chat-message__avatar--user">
                                "You"
                            </span>
                        }
                    })}
            </div>
        </div>
    }
}

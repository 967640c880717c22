//! Canned product-card generator; also the fallback for prompts no other
//! rule claims.

use super::{GeneratedComponent, Preview};

const CARD_CODE: &str = r##"use leptos::prelude::*;

#[component]
pub fn ProductCard() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="product-card__image"></div>
            <div class="product-card__body">
                <div class="product-card__title">"Card Title"</div>
                <p class="product-card__text">
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                     Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua."
                </p>
            </div>
            <div class="product-card__tags">
                <span class="product-card__tag">"#tag1"</span>
                <span class="product-card__tag">"#tag2"</span>
            </div>
        </div>
    }
}
"##;

/// Generate the canned card snippet. The prompt plays no part.
#[must_use]
pub fn generate() -> GeneratedComponent {
    GeneratedComponent {
        preview: Preview::Card,
        code: CARD_CODE.to_owned(),
    }
}

//! Canned product-card preview.

use leptos::prelude::*;

/// Fixed product card matching the card generator's code string.
#[component]
pub fn CannedCardView() -> impl IntoView {
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

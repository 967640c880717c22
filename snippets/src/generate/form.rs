//! Canned contact-form generator.

use super::{GeneratedComponent, Preview};

const FORM_CODE: &str = r#"use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Handle form submission
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__field">
                <label>"Full Name"</label>
                <input type="text" placeholder="Enter your name"/>
            </div>
            <div class="contact-form__field">
                <label>"Email Address"</label>
                <input type="email" placeholder="Enter your email"/>
            </div>
            <div class="contact-form__field">
                <label>"Message"</label>
                <textarea rows="3" placeholder="Enter your message"></textarea>
            </div>
            <button type="submit" class="btn btn--primary">"Submit"</button>
        </form>
    }
}
"#;

/// Generate the canned form snippet. The prompt plays no part.
#[must_use]
pub fn generate() -> GeneratedComponent {
    GeneratedComponent {
        preview: Preview::Form,
        code: FORM_CODE.to_owned(),
    }
}

//! Canned contact-form preview.

use leptos::prelude::*;

/// Fixed contact form matching the form generator's code string.
#[component]
pub fn CannedFormView() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
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

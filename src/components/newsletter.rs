use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::validation;

/// Newsletter email capture. Validation only: there is no subscription
/// backend, so a well-formed address is accepted silently.
#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !validation::is_valid_email(email.trim()) {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Please enter a valid email address.");
                }
            }
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <input
                type="text"
                class="newsletter-input"
                placeholder="Your email"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <button type="submit">{"Subscribe"}</button>
        </form>
    }
}

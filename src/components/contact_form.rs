use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::messaging;
use crate::validation::ContactSubmission;

fn alert(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(text);
    }
}

/// Contact form that validates locally and hands the inquiry off to
/// WhatsApp. On success the fields reset, the confirmation shows, and
/// after a short delay the deep link opens in a new tab.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let terms = use_state(|| false);
    let show_success = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();
        let terms = terms.clone();
        let show_success = show_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = ContactSubmission {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                phone: (*phone).trim().to_string(),
                service: (*service).clone(),
                message: (*message).trim().to_string(),
                terms: *terms,
            };

            if let Err(err) = submission.validate() {
                alert(&err.to_string());
                return;
            }

            let url = messaging::whatsapp_url(&submission);
            log!("Contact form validated, handing off to WhatsApp");

            // Controlled inputs: clearing the state clears the fields.
            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            service.set(String::new());
            message.set(String::new());
            terms.set(false);
            show_success.set(true);

            let show_success = show_success.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::WHATSAPP_OPEN_DELAY_MS).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
                show_success.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                value={(*name).clone()}
                onchange={let name = name.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="text"
                name="email"
                placeholder="Email address"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <input
                type="tel"
                name="phone"
                placeholder="Phone number"
                value={(*phone).clone()}
                onchange={let phone = phone.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    phone.set(input.value());
                }}
            />
            <select
                name="service"
                onchange={let service = service.clone(); move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    service.set(select.value());
                }}
            >
                <option value="" selected={service.is_empty()}>{"Select a service"}</option>
                <option value="web-design" selected={*service == "web-design"}>{"Web Design"}</option>
                <option value="branding" selected={*service == "branding"}>{"Branding"}</option>
                <option value="digital-marketing" selected={*service == "digital-marketing"}>{"Digital Marketing"}</option>
                <option value="ecommerce" selected={*service == "ecommerce"}>{"E-commerce"}</option>
            </select>
            <textarea
                name="message"
                placeholder="Tell us about your project"
                value={(*message).clone()}
                onchange={let message = message.clone(); move |e: Event| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            />
            <label class="terms-label">
                <input
                    type="checkbox"
                    name="terms"
                    checked={*terms}
                    onchange={let terms = terms.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        terms.set(input.checked());
                    }}
                />
                {"I agree to the terms of service"}
            </label>
            <button type="submit">{"Send inquiry"}</button>
            {
                if *show_success {
                    html! {
                        <div class="form-success">
                            {"Thank you! Opening WhatsApp with your inquiry..."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

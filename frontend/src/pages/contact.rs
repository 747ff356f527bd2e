use gloo_net::http::Request;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::hero::Hero;
use crate::config;
use crate::data::COMPANY;

const INQUIRY_OPTIONS: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("brand-partnership", "Brand Partnership"),
    ("speaking", "Speaking Opportunity"),
    ("investment", "Investment"),
    ("media", "Media / Press"),
    ("attend-event", "Attend an Event"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let inquiry_type = use_state(|| "general".to_string());
    let message = use_state(String::new);
    let is_submitting = use_state(|| false);
    let is_success = use_state(|| false);
    let error = use_state(|| None::<&'static str>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_inquiry = {
        let inquiry_type = inquiry_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            inquiry_type.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(textarea.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let inquiry_type = inquiry_type.clone();
        let message = message.clone();
        let is_submitting = is_submitting.clone();
        let is_success = is_success.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_submitting.set(true);
            error.set(None);

            let payload = json!({
                "name": (*name).clone(),
                "email": (*email).clone(),
                "inquiryType": (*inquiry_type).clone(),
                "message": (*message).clone(),
            });

            let name = name.clone();
            let email = email.clone();
            let inquiry_type = inquiry_type.clone();
            let message = message.clone();
            let is_submitting = is_submitting.clone();
            let is_success = is_success.clone();
            let error = error.clone();
            spawn_local(async move {
                let request = Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .header("Content-Type", "application/json")
                    .json(&payload)
                    .expect("Failed to serialize contact request");

                match request.send().await {
                    Ok(response) if response.ok() => {
                        is_success.set(true);
                        name.set(String::new());
                        email.set(String::new());
                        inquiry_type.set("general".to_string());
                        message.set(String::new());
                    }
                    // Leave the field values in place so the user can resubmit.
                    _ => {
                        error.set(Some(
                            "Failed to send message. Please try again or email us directly.",
                        ));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let reset_success = {
        let is_success = is_success.clone();
        Callback::from(move |_: web_sys::MouseEvent| is_success.set(false))
    };

    html! {
        <>
            <Hero
                title="Connect With Us"
                description="Whether you're a brand, speaker, investor, or attendee, we'd love to hear from you."
                full_height={false}
                show_scroll_indicator={false}
            />

            <section class="section contact-section">
                <div class="container contact-grid">
                    <div class="contact-form-col">
                        <h2 class="contact-heading">{"Send Us a Message"}</h2>
                        if *is_success {
                            <div class="contact-success">
                                <h3>{"Message Sent!"}</h3>
                                <p>{"Thank you for reaching out. We'll get back to you within 24-48 hours."}</p>
                                <button class="btn btn-ghost" onclick={reset_success}>
                                    {"Send Another Message"}
                                </button>
                            </div>
                        } else {
                            <form class="contact-form" {onsubmit}>
                                <label class="field">
                                    <span class="field-label">{"Name"}</span>
                                    <input
                                        class="input"
                                        placeholder="Your full name"
                                        value={(*name).clone()}
                                        oninput={on_name}
                                        required={true}
                                    />
                                </label>
                                <label class="field">
                                    <span class="field-label">{"Email"}</span>
                                    <input
                                        type="email"
                                        class="input"
                                        placeholder="your@email.com"
                                        value={(*email).clone()}
                                        oninput={on_email}
                                        required={true}
                                    />
                                </label>
                                <label class="field">
                                    <span class="field-label">{"Inquiry Type"}</span>
                                    <select class="input" onchange={on_inquiry} value={(*inquiry_type).clone()}>
                                        {
                                            for INQUIRY_OPTIONS.iter().map(|(value, label)| html! {
                                                <option
                                                    value={*value}
                                                    selected={*value == inquiry_type.as_str()}
                                                >
                                                    { *label }
                                                </option>
                                            })
                                        }
                                    </select>
                                </label>
                                <label class="field">
                                    <span class="field-label">{"Message"}</span>
                                    <textarea
                                        class="input textarea"
                                        placeholder="Tell us how we can help..."
                                        rows="5"
                                        value={(*message).clone()}
                                        oninput={on_message}
                                        required={true}
                                    />
                                </label>
                                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                                    { if *is_submitting { "Sending..." } else { "Send Message" } }
                                </button>
                                if let Some(message) = *error {
                                    <p class="form-error">{ message }</p>
                                }
                            </form>
                        }
                    </div>

                    <div class="contact-info-col">
                        <h2 class="contact-heading">{"Other Ways to Reach Us"}</h2>
                        <p class="contact-info-item">
                            <span class="field-label">{"Email"}</span>
                            <a href={format!("mailto:{}", COMPANY.email)}>{ COMPANY.email }</a>
                        </p>
                        <p class="contact-info-item">
                            <span class="field-label">{"Social"}</span>
                            <a href={COMPANY.instagram} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                            {" · "}
                            <a href={COMPANY.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        </p>
                        <p class="contact-info-note">
                            {"For press kits and partnership decks, mention the event you're interested in and we'll \
                              send the right materials."}
                        </p>
                    </div>
                </div>
            </section>
        </>
    }
}

use gloo_net::http::Request;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::effects::visibility::use_in_view;
use crate::utils::validate_email;

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Submitting,
    Success,
}

/// Email capture form shared by the CTA section and the footer. Failed
/// submissions keep the typed address in place so the user can just retry.
#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| SubmitState::Idle);
    let error = use_state(|| None::<&'static str>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim().to_string();
            if !validate_email(&address) {
                error.set(Some("Please enter a valid email address."));
                return;
            }
            status.set(SubmitState::Submitting);
            error.set(None);

            let email = email.clone();
            let status = status.clone();
            let error = error.clone();
            spawn_local(async move {
                let request = Request::post(&format!(
                    "{}/api/newsletter",
                    config::get_backend_url()
                ))
                .header("Content-Type", "application/json")
                .json(&json!({ "email": address }))
                .expect("Failed to serialize newsletter request");

                match request.send().await {
                    Ok(response) if response.ok() => {
                        status.set(SubmitState::Success);
                        email.set(String::new());
                    }
                    _ => {
                        status.set(SubmitState::Idle);
                        error.set(Some("Failed to subscribe. Please try again."));
                    }
                }
            });
        })
    };

    html! {
        <div class="newsletter-form-wrap">
            if *status == SubmitState::Success {
                <div class="newsletter-success">
                    <p class="newsletter-success-title">{"You're subscribed!"}</p>
                    <p class="newsletter-success-note">{"Check your inbox for a confirmation email."}</p>
                </div>
            } else {
                <form class="newsletter-form" {onsubmit}>
                    <input
                        type="email"
                        class="input"
                        placeholder="Enter your email"
                        value={(*email).clone()}
                        {oninput}
                        required={true}
                    />
                    <button
                        type="submit"
                        class="btn btn-coral"
                        disabled={*status == SubmitState::Submitting}
                    >
                        { if *status == SubmitState::Submitting { "Subscribing..." } else { "Subscribe" } }
                    </button>
                </form>
            }
            if let Some(message) = *error {
                <p class="form-error">{ message }</p>
            }
        </div>
    }
}

/// Full-width newsletter section: reveals once on first scroll into view,
/// then hosts the shared form.
#[function_component(NewsletterCta)]
pub fn newsletter_cta() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), "0px");

    html! {
        <section
            ref={node}
            class={classes!("newsletter-cta", visible.then_some("is-visible"))}
        >
            <div class="container">
                <div class="newsletter-cta-inner">
                    <h2 class="section-title">{"Stay Connected"}</h2>
                    <p class="section-lead">
                        {"Get the latest updates on events, speakers, and longevity insights delivered to your inbox."}
                    </p>
                    <NewsletterForm />
                    <p class="newsletter-privacy">{"We respect your privacy. Unsubscribe at any time."}</p>
                </div>
            </div>
        </section>
    }
}

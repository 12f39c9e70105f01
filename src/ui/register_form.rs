//! Registration form component
//!
//! Validates name, email and organization, posts the registration to the
//! first reachable backend and sends the visitor on to the external form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    FormView, RegistrationConfig, SubmitError, submit_registration, validate_registration,
};
use crate::ui::transport::FetchTransport;

/// Open `url` in a new tab after `delay_ms`
async fn open_after_delay(url: String, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        let opened = web_sys::window()
            .ok_or_else(|| "No window".to_string())
            .and_then(|w| {
                w.open_with_url_and_target(&url, "_blank")
                    .map_err(|e| format!("{:?}", e))
            });
        if let Err(e) = opened {
            leptos::logging::warn!("Could not open {}: {}", url, e);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, delay_ms);
    }
}

/// Registration form component
#[component]
pub fn RegistrationForm() -> impl IntoView {
    let config = StoredValue::new(use_context::<RegistrationConfig>().unwrap_or_default());

    // Form state
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let form_view = RwSignal::new(FormView::default());

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = false;
        form_view.update(|v| started = v.begin_validation());
        if !started {
            return;
        }

        let input = match validate_registration(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &organization.get_untracked(),
        ) {
            Ok(input) => input,
            Err(error) => {
                form_view.update(|v| v.reject(&error));
                return;
            }
        };

        form_view.update(FormView::begin_submission);
        let config = config.get_value();

        spawn_local(async move {
            let result = submit_registration(
                &FetchTransport,
                &config.endpoints,
                &input,
                |url, reason| {
                    leptos::logging::log!("Failed to connect to {}: {}", url, reason);
                },
            )
            .await;

            match &result {
                Ok(receipt) => {
                    leptos::logging::log!("Registered via {}", receipt.endpoint);
                }
                Err(error @ (SubmitError::Unreachable | SubmitError::Encode(_))) => {
                    leptos::logging::error!("Registration error: {}", error);
                }
                Err(SubmitError::Rejected { status, .. }) => {
                    leptos::logging::warn!("Registration rejected with status {}", status);
                }
            }

            form_view.update(|v| v.finish(&result));

            if result.is_ok() {
                full_name.set(String::new());
                email.set(String::new());
                organization.set(String::new());
                open_after_delay(config.redirect_url, config.redirect_delay_ms).await;
            }
        });
    };

    let text_input = move |value: RwSignal<String>, input_type: &'static str, placeholder: &'static str| {
        view! {
            <input
                type=input_type
                placeholder=placeholder
                aria-label=placeholder
                class="register-input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form id="registerForm" class="register-form" on:submit=on_submit novalidate=true>
            {text_input(full_name, "text", "Full Name")}
            {text_input(email, "email", "Email")}
            {text_input(organization, "text", "College/Organization")}

            <button
                type="submit"
                class="btn register-submit"
                disabled=move || form_view.get().is_busy()
            >
                "Register Now"
            </button>

            <p
                id="successMsg"
                class="register-status"
                role="status"
                style:color=move || {
                    form_view
                        .get()
                        .status
                        .map(|s| s.tone.color())
                        .unwrap_or("inherit")
                }
            >
                {move || form_view.get().status.map(|s| s.display()).unwrap_or_default()}
            </p>
        </form>
    }
}

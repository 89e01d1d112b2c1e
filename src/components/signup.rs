use gloo_console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::utils::storage::{BrowserStore, PreferenceStore};

/// Result of a signup attempt, surfaced as the status line under the form.
#[derive(Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Saved,
    InvalidEmail,
}

/// Trim and validate a signup email, persisting it only when it passes.
pub fn submit_signup(store: &impl PreferenceStore, raw_email: &str) -> SignupOutcome {
    let email = raw_email.trim();
    if !is_valid_email(email) {
        return SignupOutcome::InvalidEmail;
    }
    store.write(config::EMAIL_STORAGE_KEY, email);
    SignupOutcome::Saved
}

// Syntactic check only: no whitespace, one part before the '@', and a dot
// inside the domain with at least one character on each side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        }
        None => false,
    }
}

#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let email = use_state(String::new);
    let saved_email = use_state(|| BrowserStore.read(config::EMAIL_STORAGE_KEY));
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let saved_email = saved_email.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit_signup(&BrowserStore, email.as_str()) {
                SignupOutcome::Saved => {
                    let address = email.trim().to_string();
                    log!("signup saved for", address.clone());
                    saved_email.set(Some(address));
                    error_setter.set(None);
                    success_setter.set(Some("Thanks! You're on the list.".to_string()));
                    email.set(String::new());
                    // Clear the status line after a few seconds; a quick
                    // resubmission arms another timer and the last one wins
                    let error_setter = error_setter.clone();
                    let success_setter = success_setter.clone();
                    gloo_timers::callback::Timeout::new(5_000, move || {
                        error_setter.set(None);
                        success_setter.set(None);
                    })
                    .forget();
                }
                SignupOutcome::InvalidEmail => {
                    error_setter.set(Some("Please enter a valid email address".to_string()));
                }
            }
        })
    };

    html! {
        <div class="signup-box">
            <form class="signup-form" onsubmit={onsubmit} novalidate=true>
                <input
                    type="email"
                    placeholder="Enter your email"
                    value={(*email).clone()}
                    oninput={
                        let email = email.clone();
                        move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }
                    }
                />
                <button type="submit">{"Get Early Access"}</button>
            </form>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! {
                        <div class="error-message">
                            {error_message}
                        </div>
                    }
                } else if let Some(success_message) = (*success).as_ref() {
                    html! {
                        <div class="success-message">
                            {success_message}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
    .signup-box {
        max-width: 480px;
        margin: 0 auto;
    }
    .signup-form {
        display: flex;
        gap: 0.75rem;
    }
    .signup-form input {
        flex: 1;
        padding: 0.9rem 1.1rem;
        font-size: 1rem;
        border: 1px solid rgba(31, 36, 48, 0.2);
        border-radius: 8px;
        background: #fff;
        color: #1F2430;
    }
    .signup-form input:focus {
        outline: none;
        border-color: #5B6CFF;
        box-shadow: 0 0 0 3px rgba(91, 108, 255, 0.15);
    }
    .signup-form button {
        padding: 0.9rem 1.5rem;
        font-size: 1rem;
        font-weight: 600;
        border: none;
        border-radius: 8px;
        background: linear-gradient(45deg, #5B6CFF, #9B7BFF);
        color: #fff;
        cursor: pointer;
    }
    .signup-form button:hover {
        filter: brightness(1.08);
    }
    .error-message {
        margin-top: 0.75rem;
        color: #D64545;
    }
    .success-message {
        margin-top: 0.75rem;
        color: #2F9E6E;
    }
    @media (max-width: 600px) {
        .signup-form {
            flex-direction: column;
        }
    }
                "#}
            </style>
        </div>
    }
}

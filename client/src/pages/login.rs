//! Phone + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::api::ApiClient;
use crate::net::auth::{self, LoginRequest};
use crate::net::transport::Transport;
use crate::state::auth::use_auth;
use crate::util::phone::to_latin_digits;

/// Validate the form and build the request.
///
/// # Errors
///
/// Returns a user-facing message when a field is missing.
pub fn login_request(phone: &str, password: &str) -> Result<LoginRequest, String> {
    let phone_number = to_latin_digits(phone.trim());
    if phone_number.is_empty() || password.is_empty() {
        return Err("Enter your phone number and password.".to_owned());
    }
    Ok(LoginRequest {
        phone_number,
        password: password.to_owned(),
    })
}

pub const AFTER_LOGIN_ROUTE: &str = "/";

/// What the form does once the server has answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Navigate(&'static str),
    ShowError(String),
}

/// Send the credentials. A rejection stays on the form with the server's message.
pub async fn attempt_login<T: Transport>(api: &ApiClient<T>, request: &LoginRequest) -> LoginOutcome {
    match auth::login(api, request).await {
        Ok(()) => LoginOutcome::Navigate(AFTER_LOGIN_ROUTE),
        Err(e) => LoginOutcome::ShowError(e.to_string()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match login_request(&phone.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match attempt_login(auth.api(), &request).await {
                LoginOutcome::Navigate(to) => {
                    auth.refresh().await;
                    navigate(to, Default::default());
                }
                LoginOutcome::ShowError(message) => {
                    error.try_set(message);
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <SeoHead title="Log in"/>
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field-label">
                        "Phone number"
                        <input
                            class="field"
                            type="tel"
                            autocomplete="username"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field-label">
                        "Password"
                        <input
                            class="field"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <ErrorText message=Signal::derive(move || error.get())/>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__footer">"No account yet? " <a href="/register">"Register"</a></p>
            </div>
        </section>
    }
}

//! Four-step registration wizard: phone, identity, password, review.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::auth::{self, RegisterRequest};
use crate::state::auth::use_auth;
use crate::util::phone::to_latin_digits;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterStep {
    Phone,
    Identity,
    Password,
    Review,
}

impl RegisterStep {
    pub const ALL: [Self; 4] = [Self::Phone, Self::Identity, Self::Password, Self::Review];

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|step| *step == self).unwrap_or(0) + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Phone => "Phone number",
            Self::Identity => "About you",
            Self::Password => "Choose a password",
            Self::Review => "Review",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Phone => Self::Identity,
            Self::Identity => Self::Password,
            Self::Password | Self::Review => Self::Review,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Phone | Self::Identity => Self::Phone,
            Self::Password => Self::Identity,
            Self::Review => Self::Password,
        }
    }
}

/// Check the fields owned by `step`.
///
/// # Errors
///
/// Returns the message to show under the step.
pub fn validate_step(step: RegisterStep, form: &RegisterRequest) -> Result<(), String> {
    match step {
        RegisterStep::Phone if form.phone_number.trim().is_empty() => Err("Phone number is required.".to_owned()),
        RegisterStep::Password if form.password.is_empty() || form.confirm_password.is_empty() => {
            Err("Enter the password twice.".to_owned())
        }
        RegisterStep::Password if form.password != form.confirm_password => Err("Passwords do not match.".to_owned()),
        _ => Ok(()),
    }
}

/// Trimmed copy with Latin digits, ready to send.
pub fn normalized(form: &RegisterRequest) -> RegisterRequest {
    RegisterRequest {
        phone_number: to_latin_digits(form.phone_number.trim()),
        full_name: form.full_name.trim().to_owned(),
        national_id: to_latin_digits(form.national_id.trim()),
        ..form.clone()
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let step = RwSignal::new(RegisterStep::Phone);
    let form = RwSignal::new(RegisterRequest::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_next = move |_| {
        let current = step.get();
        match form.with(|form| validate_step(current, form)) {
            Ok(()) => {
                error.set(String::new());
                step.set(current.next());
            }
            Err(message) => error.set(message),
        }
    };
    let on_back = move |_| {
        error.set(String::new());
        step.update(|step| *step = step.prev());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || step.get() != RegisterStep::Review {
            return;
        }
        let request = form.with(normalized);
        for check in [RegisterStep::Phone, RegisterStep::Password] {
            if let Err(message) = validate_step(check, &request) {
                error.set(message);
                step.set(check);
                return;
            }
        }
        busy.set(true);
        error.set(String::new());
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::register(auth.api(), &request).await {
                Ok(()) => {
                    auth.refresh().await;
                    navigate("/", Default::default());
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            busy.try_set(false);
        });
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           read: fn(&RegisterRequest) -> String,
                           write: fn(&mut RegisterRequest, String)| {
        view! {
            <label class="field-label">
                {label}
                <input
                    class="field"
                    type=kind
                    prop:value=move || form.with(read)
                    on:input=move |ev| form.update(|form| write(form, event_target_value(&ev)))
                />
            </label>
        }
    };

    let step_body = move || match step.get() {
        RegisterStep::Phone => text_field(
            "Phone number",
            "tel",
            |f| f.phone_number.clone(),
            |f, v| f.phone_number = v,
        )
        .into_any(),
        RegisterStep::Identity => view! {
            {text_field("Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
            {text_field("National ID", "text", |f| f.national_id.clone(), |f, v| f.national_id = v)}
        }
        .into_any(),
        RegisterStep::Password => view! {
            {text_field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
            {text_field(
                "Confirm password",
                "password",
                |f| f.confirm_password.clone(),
                |f, v| f.confirm_password = v,
            )}
        }
        .into_any(),
        RegisterStep::Review => {
            let summary = form.with(normalized);
            view! {
                <dl class="review-list">
                    <dt>"Phone number"</dt>
                    <dd>{summary.phone_number}</dd>
                    <dt>"Full name"</dt>
                    <dd>{summary.full_name}</dd>
                    <dt>"National ID"</dt>
                    <dd>{summary.national_id}</dd>
                </dl>
            }
            .into_any()
        }
    };

    view! {
        <SeoHead title="Register"/>
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="wizard__progress">
                    {move || format!("Step {} of {}: {}", step.get().number(), RegisterStep::ALL.len(), step.get().title())}
                </p>
                <form class="auth-form" on:submit=on_submit>
                    {step_body}
                    <ErrorText message=Signal::derive(move || error.get())/>
                    <div class="wizard__actions">
                        <Show when=move || step.get() != RegisterStep::Phone>
                            <button class="button" type="button" on:click=on_back>"Back"</button>
                        </Show>
                        <Show
                            when=move || step.get() == RegisterStep::Review
                            fallback=move || view! {
                                <button class="button button--primary" type="button" on:click=on_next>"Next"</button>
                            }
                        >
                            <button class="button button--primary" type="submit" disabled=move || busy.get()>
                                "Create account"
                            </button>
                        </Show>
                    </div>
                </form>
                <p class="auth-card__footer">"Already registered? " <a href="/login">"Log in"</a></p>
            </div>
        </section>
    }
}

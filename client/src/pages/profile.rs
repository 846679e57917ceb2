//! Account page: basic profile fields plus freelancer self-service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile edits refresh the auth session so the header picks up the new
//! name. The freelancer section loads the user's own profile together with
//! the specialty/flair taxonomy, and re-fetches the profile after every
//! service change so the list matches the server.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::components::service_card::{DELIVERY_MODES, ServiceCard, service_input_from_form};
use crate::net::auth::{self, FreelancerProfileUpdate, FreelancerTaxonomy, ProfileUpdate, ServiceInput};
use crate::net::error::ApiError;
use crate::net::freelancers::WORK_TYPES;
use crate::net::types::OwnFreelancerProfile;
use crate::state::auth::{use_api, use_auth};

/// Editable copy of a stored profile.
pub fn update_from_profile(profile: &OwnFreelancerProfile) -> FreelancerProfileUpdate {
    FreelancerProfileUpdate {
        public_slug: profile.public_slug.clone(),
        headline: profile.headline.clone(),
        introduction: profile.introduction.clone(),
        work_types: profile.work_types.clone(),
        city: profile.city.clone(),
        province: profile.province.clone(),
        is_public: profile.is_public.unwrap_or(true),
        contact_cta_text: profile.contact_cta_text.clone(),
        contact_cta_url: profile.contact_cta_url.clone(),
        specialty_ids: profile.specialty_ids.clone(),
        flair_ids: profile.flair_ids.clone(),
        custom_specialties: profile.custom_specialties.clone(),
    }
}

/// A missing profile (`404`) is an empty one; anything else is an error.
///
/// # Errors
///
/// Passes through every error other than `404`.
pub fn profile_or_default(result: Result<OwnFreelancerProfile, ApiError>) -> Result<OwnFreelancerProfile, ApiError> {
    match result {
        Err(e) if e.status() == Some(404) => Ok(OwnFreelancerProfile::default()),
        other => other,
    }
}

pub fn toggle_id(ids: &mut Vec<i64>, id: i64) {
    if let Some(pos) = ids.iter().position(|existing| *existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

pub fn toggle_value(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|existing| existing == value) {
        values.remove(pos);
    } else {
        values.push(value.to_owned());
    }
}

pub fn status_label(status: &str) -> &str {
    match status {
        "" | "DRAFT" => "Draft",
        "PENDING" => "Waiting for review",
        "APPROVED" => "Published",
        "REJECTED" => "Changes requested",
        other => other,
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <SeoHead title="Your profile"/>
        <section class="page profile-page">
            <h1>"Your profile"</h1>
            <AccountForm/>
            <FreelancerSection/>
        </section>
    }
}

#[component]
fn AccountForm() -> impl IntoView {
    let auth = use_auth();
    let initial = auth.state.with_untracked(|state| {
        state
            .user()
            .map(|user| (user.full_name.clone(), user.birth_date.clone().unwrap_or_default()))
            .unwrap_or_default()
    });
    let full_name = RwSignal::new(initial.0);
    let birth_date = RwSignal::new(initial.1);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let phone = {
        let auth = auth.clone();
        move || auth.state.with(|state| state.user().map(|user| user.phone_number.clone()).unwrap_or_default())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = ProfileUpdate {
            full_name: full_name.get().trim().to_owned(),
            birth_date: birth_date.get().trim().to_owned(),
        };
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());
        let auth = auth.clone();
        spawn_local(async move {
            match auth::update_profile(auth.api(), &update).await {
                Ok(()) => {
                    auth.refresh().await;
                    notice.try_set("Profile saved.".to_owned());
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="card profile-form" on:submit=on_submit>
            <h2>"Account"</h2>
            <p class="muted">{phone}</p>
            <label class="field-label">
                "Full name"
                <input
                    class="field"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </label>
            <label class="field-label">
                "Birth date"
                <input
                    class="field"
                    type="date"
                    prop:value=move || birth_date.get()
                    on:input=move |ev| birth_date.set(event_target_value(&ev))
                />
            </label>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || !notice.get().is_empty()>
                <p class="notice">{move || notice.get()}</p>
            </Show>
            <button class="button button--primary" type="submit" disabled=move || busy.get()>"Save"</button>
        </form>
    }
}

#[component]
fn FreelancerSection() -> impl IntoView {
    let api = use_api();
    let profile = RwSignal::new(None::<OwnFreelancerProfile>);
    let taxonomy = RwSignal::new(FreelancerTaxonomy::default());
    let form = RwSignal::new(FreelancerProfileUpdate::default());
    let custom_raw = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let apply_profile = move |loaded: OwnFreelancerProfile| {
        form.try_set(update_from_profile(&loaded));
        custom_raw.try_set(loaded.custom_specialties.join(", "));
        profile.try_set(Some(loaded));
    };

    let reload_profile = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                match profile_or_default(auth::fetch_freelancer_profile(&api).await) {
                    Ok(loaded) => apply_profile(loaded),
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                let (loaded, choices) = futures::join!(
                    auth::fetch_freelancer_profile(&api),
                    auth::fetch_freelancer_taxonomy(&api)
                );
                match choices {
                    Ok(choices) => {
                        taxonomy.try_set(choices);
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
                match profile_or_default(loaded) {
                    Ok(loaded) => apply_profile(loaded),
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    let on_save = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let mut update = form.get();
            update.custom_specialties = auth::parse_custom_specialties(&custom_raw.get());
            busy.set(true);
            error.set(String::new());
            notice.set(String::new());
            let api = api.clone();
            spawn_local(async move {
                match auth::save_freelancer_profile(&api, &update).await {
                    Ok(saved) => {
                        apply_profile(saved);
                        notice.try_set("Freelancer profile saved.".to_owned());
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
                busy.try_set(false);
            });
        }
    };

    let on_submit_review = {
        let api = api.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            error.set(String::new());
            let api = api.clone();
            spawn_local(async move {
                match auth::submit_freelancer_profile(&api).await {
                    Ok(submitted) => {
                        apply_profile(submitted);
                        notice.try_set("Profile sent for review.".to_owned());
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
                busy.try_set(false);
            });
        }
    };

    let run_service_change = {
        let api = api.clone();
        move |change: ServiceChange| {
            let api = api.clone();
            error.set(String::new());
            spawn_local(async move {
                let result = match &change {
                    ServiceChange::Create(input) => auth::create_freelancer_service(&api, input).await,
                    ServiceChange::Update(id, input) => auth::update_freelancer_service(&api, *id, input).await,
                    ServiceChange::Delete(id) => auth::delete_freelancer_service(&api, *id).await,
                };
                match result {
                    Ok(()) => reload_profile.run(()),
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    };
    let on_service_save = Callback::new({
        let run = run_service_change.clone();
        move |(id, input): (i64, ServiceInput)| run(ServiceChange::Update(id, input))
    });
    let on_service_delete = Callback::new({
        let run = run_service_change.clone();
        move |id: i64| run(ServiceChange::Delete(id))
    });
    let on_service_create = Callback::new(move |input: ServiceInput| run_service_change(ServiceChange::Create(input)));

    let status = move || profile.with(|p| p.as_ref().map(|p| status_label(&p.status).to_owned()).unwrap_or_default());
    let moderation_note =
        move || profile.with(|p| p.as_ref().map(|p| p.moderation_note.clone()).unwrap_or_default());

    let text_input = move |label: &'static str,
                           read: fn(&FreelancerProfileUpdate) -> String,
                           write: fn(&mut FreelancerProfileUpdate, String)| {
        view! {
            <label class="field-label">
                {label}
                <input
                    class="field"
                    prop:value=move || form.with(read)
                    on:input=move |ev| form.update(|form| write(form, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="card freelancer-section">
            <h2>"Freelancer profile"</h2>
            <Show
                when=move || profile.with(Option::is_some)
                fallback=|| view! { <p class="muted">"Loading freelancer profile..."</p> }
            >
                <p class="freelancer-section__status">"Status: " {status}</p>
                <Show when=move || !moderation_note().is_empty()>
                    <p class="notice notice--warning">{moderation_note}</p>
                </Show>
                <form class="freelancer-form" on:submit=on_save.clone()>
                    {text_input("Public URL name", |f| f.public_slug.clone(), |f, v| f.public_slug = v)}
                    {text_input("Headline", |f| f.headline.clone(), |f, v| f.headline = v)}
                    <label class="field-label">
                        "Introduction"
                        <textarea
                            class="field"
                            prop:value=move || form.with(|f| f.introduction.clone())
                            on:input=move |ev| form.update(|f| f.introduction = event_target_value(&ev))
                        ></textarea>
                    </label>
                    {text_input("City", |f| f.city.clone(), |f, v| f.city = v)}
                    {text_input("Province", |f| f.province.clone(), |f, v| f.province = v)}
                    <fieldset class="choice-group">
                        <legend>"Work types"</legend>
                        {WORK_TYPES
                            .into_iter()
                            .map(|(key, label)| {
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.work_types.iter().any(|w| w == key))
                                            on:change=move |_| form.update(|f| toggle_value(&mut f.work_types, key))
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>
                    <fieldset class="choice-group">
                        <legend>"Specialties"</legend>
                        {move || {
                            taxonomy
                                .with(|t| t.specialties.specialties.clone())
                                .into_iter()
                                .map(|specialty| {
                                    let id = specialty.id;
                                    view! {
                                        <label class="checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || form.with(|f| f.specialty_ids.contains(&id))
                                                on:change=move |_| form.update(|f| toggle_id(&mut f.specialty_ids, id))
                                            />
                                            {specialty.name}
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </fieldset>
                    <label class="field-label">
                        "Other specialties (comma separated)"
                        <input
                            class="field"
                            prop:value=move || custom_raw.get()
                            on:input=move |ev| custom_raw.set(event_target_value(&ev))
                        />
                    </label>
                    <fieldset class="choice-group">
                        <legend>"Flairs"</legend>
                        {move || {
                            taxonomy
                                .with(|t| t.flairs.flairs.clone())
                                .into_iter()
                                .map(|flair| {
                                    let id = flair.id;
                                    view! {
                                        <label class="checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || form.with(|f| f.flair_ids.contains(&id))
                                                on:change=move |_| form.update(|f| toggle_id(&mut f.flair_ids, id))
                                            />
                                            {flair.name}
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </fieldset>
                    {text_input("Contact button text", |f| f.contact_cta_text.clone(), |f, v| f.contact_cta_text = v)}
                    {text_input("Contact link", |f| f.contact_cta_url.clone(), |f, v| f.contact_cta_url = v)}
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_public)
                            on:change=move |ev| form.update(|f| f.is_public = event_target_checked(&ev))
                        />
                        "Show my profile in the directory"
                    </label>
                    <ErrorText message=Signal::derive(move || error.get())/>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="notice">{move || notice.get()}</p>
                    </Show>
                    <div class="form-actions">
                        <button class="button button--primary" type="submit" disabled=move || busy.get()>"Save"</button>
                        <button
                            class="button"
                            type="button"
                            disabled=move || busy.get()
                            on:click=on_submit_review.clone()
                        >
                            "Submit for review"
                        </button>
                    </div>
                </form>
                <h3>"Services"</h3>
                <div class="service-list">
                    {move || {
                        profile
                            .with(|p| p.as_ref().map(|p| p.services.clone()).unwrap_or_default())
                            .into_iter()
                            .map(|service| {
                                view! {
                                    <ServiceCard service=service on_save=on_service_save on_delete=on_service_delete/>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <NewServiceForm on_create=on_service_create/>
            </Show>
        </div>
    }
}

enum ServiceChange {
    Create(ServiceInput),
    Update(i64, ServiceInput),
    Delete(i64),
}

#[component]
fn NewServiceForm(on_create: Callback<ServiceInput>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let delivery_mode = RwSignal::new(DELIVERY_MODES[0].0.to_owned());
    let starting_price = RwSignal::new(String::new());
    let response_time = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match service_input_from_form(
            &title.get(),
            &description.get(),
            &delivery_mode.get(),
            &starting_price.get(),
            &response_time.get(),
            true,
        ) {
            Ok(input) => {
                error.set(String::new());
                title.set(String::new());
                description.set(String::new());
                starting_price.set(String::new());
                response_time.set(String::new());
                on_create.run(input);
            }
            Err(message) => error.set(message),
        }
    };

    view! {
        <form class="service-form" on:submit=on_submit>
            <h4>"Add a service"</h4>
            <input
                class="field"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="field"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <select class="field" on:change=move |ev| delivery_mode.set(event_target_value(&ev))>
                {DELIVERY_MODES
                    .into_iter()
                    .map(|(key, label)| view! { <option value=key>{label}</option> })
                    .collect_view()}
            </select>
            <input
                class="field"
                inputmode="decimal"
                placeholder="Starting price"
                prop:value=move || starting_price.get()
                on:input=move |ev| starting_price.set(event_target_value(&ev))
            />
            <input
                class="field"
                inputmode="numeric"
                placeholder="Response time (hours)"
                prop:value=move || response_time.get()
                on:input=move |ev| response_time.set(event_target_value(&ev))
            />
            <ErrorText message=Signal::derive(move || error.get())/>
            <button class="button" type="submit">"Add service"</button>
        </form>
    }
}

//! Public freelancer profile.

#[cfg(test)]
#[path = "freelancer_profile_test.rs"]
mod freelancer_profile_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::error_text::ErrorText;
use crate::components::flair_badge::FlairBadge;
use crate::components::seo_head::SeoHead;
use crate::components::service_card::ServiceCard;
use crate::components::tag_chip::TagChip;
use crate::net::freelancers::{self, work_type_label};
use crate::net::types::PublicFreelancer;
use crate::pages::freelancers_list::location_label;
use crate::state::auth::use_api;

const DEFAULT_CTA: &str = "Get in touch";

/// Contact button, shown only for http(s), mailto and tel links.
pub fn contact_cta(text: &str, url: &str) -> Option<(String, String)> {
    let url = url.trim();
    let allowed = ["https://", "http://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| url.starts_with(scheme));
    if !allowed {
        return None;
    }
    let label = match text.trim() {
        "" => DEFAULT_CTA,
        label => label,
    };
    Some((label.to_owned(), url.to_owned()))
}

#[component]
pub fn FreelancerProfilePage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let profile = RwSignal::new(None::<PublicFreelancer>);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let slug = slug.get();
        let api = api.clone();
        profile.set(None);
        error.set(String::new());
        spawn_local(async move {
            match freelancers::fetch_freelancer(&api, &slug).await {
                Ok(loaded) => {
                    profile.try_set(Some(loaded));
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let body = move || {
        profile.get().map(|freelancer| {
            let name = freelancer.display_name().to_owned();
            let location = location_label(&freelancer.city, &freelancer.province);
            let cta = contact_cta(&freelancer.contact_cta_text, &freelancer.contact_cta_url);
            let work = freelancer
                .work_types
                .iter()
                .map(|w| work_type_label(w).to_owned())
                .collect::<Vec<_>>()
                .join(" · ");
            view! {
                <SeoHead title=name.clone() description=freelancer.headline.clone()/>
                <header class="freelancer-hero">
                    <h1>{name}</h1>
                    <p class="freelancer-hero__headline">{freelancer.headline}</p>
                    <p class="freelancer-hero__meta">{location} " " {work}</p>
                    <div class="freelancer-hero__flairs">
                        {freelancer
                            .flairs
                            .into_iter()
                            .map(|flair| view! { <FlairBadge label=flair.name color=flair.color_token/> })
                            .collect_view()}
                    </div>
                    {cta.map(|(label, url)| {
                        view! { <a class="button button--primary" href=url rel="noopener" target="_blank">{label}</a> }
                    })}
                </header>
                <section class="freelancer-about">
                    <h2>"About"</h2>
                    <p>{freelancer.introduction}</p>
                    <div class="freelancer-about__tags">
                        {freelancer
                            .specialties
                            .into_iter()
                            .map(|s| s.name)
                            .chain(freelancer.custom_specialties)
                            .map(|label| view! { <TagChip label=label/> })
                            .collect_view()}
                    </div>
                </section>
                <section class="freelancer-services">
                    <h2>"Services"</h2>
                    {freelancer
                        .services
                        .into_iter()
                        .filter(|service| service.is_active)
                        .map(|service| view! { <ServiceCard service=service/> })
                        .collect_view()}
                </section>
            }
        })
    };

    view! {
        <section class="page freelancer-profile">
            <a class="back-link" href="/freelancers">"← All freelancers"</a>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show
                when=move || profile.with(Option::is_some) || !error.get().is_empty()
                fallback=|| view! { <p class="muted">"Loading profile..."</p> }
            >
                {body}
            </Show>
        </section>
    }
}

//! Freelancer directory with filters and pagination.

#[cfg(test)]
#[path = "freelancers_list_test.rs"]
mod freelancers_list_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::flair_badge::FlairBadge;
use crate::components::pagination::Pagination;
use crate::components::seo_head::SeoHead;
use crate::components::tag_chip::TagChip;
use crate::net::freelancers::{self, FREELANCERS_PAGE_SIZE, FreelancerFilter, WORK_TYPES, work_type_label};
use crate::net::types::{Flair, FreelancerCard, Page, Specialty};
use crate::state::auth::use_api;
use crate::util::pagination::total_pages;

/// `City, Province` with blanks dropped.
pub fn location_label(city: &str, province: &str) -> String {
    [city.trim(), province.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply the draft filter form, restarting from page one.
pub fn submitted(draft: &FreelancerFilter) -> FreelancerFilter {
    FreelancerFilter {
        page: 1,
        q: draft.q.trim().to_owned(),
        city: draft.city.trim().to_owned(),
        ..draft.clone()
    }
}

/// Specialty names followed by free-text ones.
pub fn specialty_names(card: &FreelancerCard) -> Vec<String> {
    card.specialties
        .iter()
        .map(|s| s.name.clone())
        .chain(card.custom_specialties.iter().cloned())
        .collect()
}

#[component]
pub fn FreelancersListPage() -> impl IntoView {
    let api = use_api();
    let draft = RwSignal::new(FreelancerFilter::default());
    let filter = RwSignal::new(FreelancerFilter {
        page: 1,
        ..FreelancerFilter::default()
    });
    let specialties = RwSignal::new(Vec::<Specialty>::new());
    let flairs = RwSignal::new(Vec::<Flair>::new());
    let results = RwSignal::new(None::<Page<FreelancerCard>>);
    let error = RwSignal::new(String::new());

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                let (loaded_specialties, loaded_flairs) =
                    futures::join!(freelancers::fetch_specialties(&api), freelancers::fetch_flairs(&api));
                match loaded_specialties {
                    Ok(payload) => {
                        specialties.try_set(payload.specialties);
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
                match loaded_flairs {
                    Ok(payload) => {
                        flairs.try_set(payload.flairs);
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    Effect::new(move || {
        let current = filter.get();
        let api = api.clone();
        spawn_local(async move {
            match freelancers::fetch_freelancers(&api, &current).await {
                Ok(page) => {
                    results.try_set(Some(page));
                }
                Err(e) => {
                    results.try_set(Some(Page::empty(FREELANCERS_PAGE_SIZE)));
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        filter.set(draft.with(submitted));
    };
    let on_reset = move |_| {
        draft.set(FreelancerFilter::default());
        filter.set(FreelancerFilter {
            page: 1,
            ..FreelancerFilter::default()
        });
    };

    let page = Signal::derive(move || filter.with(|f| f.page.max(1)));
    let pages = Signal::derive(move || {
        results.with(|r| r.as_ref().map_or(1, |r| total_pages(r.count, FREELANCERS_PAGE_SIZE)))
    });
    let on_page = Callback::new(move |next: u32| filter.update(|f| f.page = next));

    let cards = move || {
        let list = results.with(|r| r.as_ref().map(|r| r.results.clone()).unwrap_or_default());
        if list.is_empty() {
            return view! { <EmptyState title="No freelancers match these filters."/> }.into_any();
        }
        list.into_iter().map(freelancer_card).collect_view().into_any()
    };

    view! {
        <SeoHead title="Freelancers" description="Designers, developers, and other professionals from our community."/>
        <section class="page freelancers-list">
            <h1>"Freelancers"</h1>
            <form class="filter-bar" on:submit=on_submit>
                <input
                    class="field"
                    type="search"
                    placeholder="Search"
                    prop:value=move || draft.with(|d| d.q.clone())
                    on:input=move |ev| draft.update(|d| d.q = event_target_value(&ev))
                />
                <input
                    class="field"
                    placeholder="City"
                    prop:value=move || draft.with(|d| d.city.clone())
                    on:input=move |ev| draft.update(|d| d.city = event_target_value(&ev))
                />
                <select class="field" on:change=move |ev| draft.update(|d| d.tag = event_target_value(&ev))>
                    <option value="" selected=move || draft.with(|d| d.tag.is_empty())>"Any specialty"</option>
                    {move || {
                        specialties
                            .get()
                            .into_iter()
                            .map(|s| {
                                let slug = s.slug.clone();
                                view! {
                                    <option value=s.slug selected=move || draft.with(|d| d.tag == slug)>{s.name}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <select class="field" on:change=move |ev| draft.update(|d| d.flair = event_target_value(&ev))>
                    <option value="" selected=move || draft.with(|d| d.flair.is_empty())>"Any flair"</option>
                    {move || {
                        flairs
                            .get()
                            .into_iter()
                            .map(|f| {
                                let slug = f.slug.clone();
                                view! {
                                    <option value=f.slug selected=move || draft.with(|d| d.flair == slug)>{f.name}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <select class="field" on:change=move |ev| draft.update(|d| d.work_type = event_target_value(&ev))>
                    <option value="" selected=move || draft.with(|d| d.work_type.is_empty())>"Any work type"</option>
                    {WORK_TYPES
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <option value=key selected=move || draft.with(|d| d.work_type == key)>{label}</option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="button button--primary" type="submit">"Apply"</button>
                <button class="button" type="button" on:click=on_reset>"Reset"</button>
            </form>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || results.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading freelancers..."</p> }>
                <div class="freelancer-grid">{cards}</div>
            </Show>
            <Pagination page=page total_pages=pages on_change=on_page/>
        </section>
    }
}

fn freelancer_card(card: FreelancerCard) -> impl IntoView {
    let href = format!("/freelancers/{}", card.public_slug);
    let location = location_label(&card.city, &card.province);
    let specialties = specialty_names(&card);
    let name = if card.full_name.is_empty() { card.public_slug.clone() } else { card.full_name.clone() };
    view! {
        <article class="freelancer-card">
            <h2 class="freelancer-card__name"><a href=href>{name}</a></h2>
            <p class="freelancer-card__headline">{card.headline}</p>
            <p class="freelancer-card__location">{location}</p>
            <p class="freelancer-card__work">
                {card.work_types.iter().map(|w| work_type_label(w).to_owned()).collect::<Vec<_>>().join(" · ")}
            </p>
            <div class="freelancer-card__flairs">
                {card
                    .flairs
                    .into_iter()
                    .map(|flair| view! { <FlairBadge label=flair.name color=flair.color_token/> })
                    .collect_view()}
            </div>
            <div class="freelancer-card__tags">
                {specialties.into_iter().map(|label| view! { <TagChip label=label/> }).collect_view()}
            </div>
        </article>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::staff;
use crate::net::types::{AnalyticsOverview, TopSpender};
use crate::state::auth::use_api;
use crate::util::format::{format_percent, format_price};

#[component]
pub fn StaffAnalyticsPage() -> impl IntoView {
    let api = use_api();
    let overview = RwSignal::new(None::<AnalyticsOverview>);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let api = api.clone();
        spawn_local(async move {
            match staff::fetch_analytics(&api).await {
                Ok(data) => {
                    overview.try_set(Some(data));
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let body = move || {
        let Some(data) = overview.get() else {
            return view! { <p class="muted">"Loading analytics..."</p> }.into_any();
        };
        let top_items = if data.top_items.is_empty() {
            view! { <EmptyState title="No sales yet."/> }.into_any()
        } else {
            view! {
                <ol class="rank-list">
                    {data
                        .top_items
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="rank-list__row">
                                    <span>{item.name.clone()}</span>
                                    <span class="muted">{format!("{} sold", item.total_qty)}</span>
                                    <span>{format_price(item.total_rev)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            }
            .into_any()
        };
        view! {
            <div class="metric-grid">
                <div class="metric">
                    <span class="metric__value">{format_price(data.cafe_total)}</span>
                    <span class="metric__label">"Cafe revenue"</span>
                </div>
                <div class="metric">
                    <span class="metric__value">{format_price(data.cafe_today)}</span>
                    <span class="metric__label">"Cafe today"</span>
                </div>
                <div class="metric">
                    <span class="metric__value">{format_price(data.cowork_total)}</span>
                    <span class="metric__label">"Cowork revenue"</span>
                </div>
                <div class="metric">
                    <span class="metric__value">{format_percent(data.occupancy_rate)}</span>
                    <span class="metric__label">
                        {format!("Occupancy ({} of {} spaces)", data.active_bookings, data.total_spaces)}
                    </span>
                </div>
            </div>
            <div class="analytics-columns">
                <div class="card">
                    <h2>"Top items"</h2>
                    {top_items}
                </div>
                <SpenderList title="Top cafe buyers" spenders=data.top_cafe_buyers/>
                <SpenderList title="Top cowork members" spenders=data.top_cowork_members/>
            </div>
        }
        .into_any()
    };

    view! {
        <SeoHead title="Analytics"/>
        <section class="page staff-analytics">
            <h1>"Analytics"</h1>
            <ErrorText message=Signal::derive(move || error.get())/>
            {body}
        </section>
    }
}

#[component]
fn SpenderList(title: &'static str, spenders: Vec<TopSpender>) -> impl IntoView {
    let rows = if spenders.is_empty() {
        view! { <EmptyState title="Nobody yet."/> }.into_any()
    } else {
        view! {
            <ol class="rank-list">
                {spenders
                    .into_iter()
                    .map(|spender| {
                        let bookings = spender.total_bookings.map(|n| format!("{n} bookings"));
                        view! {
                            <li class="rank-list__row">
                                <span>{spender.display_name().to_owned()}</span>
                                <span class="muted">{bookings}</span>
                                <span>{format_price(spender.total_spent)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_any()
    };
    view! {
        <div class="card">
            <h2>{title}</h2>
            {rows}
        </div>
    }
}

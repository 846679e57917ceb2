//! Blog index: search, tag filter, and pagination.

#[cfg(test)]
#[path = "blog_list_test.rs"]
mod blog_list_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::pagination::Pagination;
use crate::components::seo_head::SeoHead;
use crate::components::tag_chip::TagChip;
use crate::net::blog::{self, POSTS_PAGE_SIZE, PostFilter};
use crate::net::types::{BlogTag, Page, PostCard};
use crate::state::auth::use_api;
use crate::util::format::date_part;
use crate::util::pagination::total_pages;

/// New search text always restarts from the first page.
pub fn with_search(filter: &PostFilter, q: &str) -> PostFilter {
    PostFilter {
        page: 1,
        q: q.trim().to_owned(),
        ..filter.clone()
    }
}

/// Selecting the active tag again clears it.
pub fn with_tag(filter: &PostFilter, slug: &str) -> PostFilter {
    let tag = if filter.tag == slug { String::new() } else { slug.to_owned() };
    PostFilter {
        page: 1,
        tag,
        ..filter.clone()
    }
}

#[component]
pub fn BlogListPage() -> impl IntoView {
    let api = use_api();
    let filter = RwSignal::new(PostFilter {
        page: 1,
        ..PostFilter::default()
    });
    let search = RwSignal::new(String::new());
    let tags = RwSignal::new(Vec::<BlogTag>::new());
    let posts = RwSignal::new(None::<Page<PostCard>>);
    let error = RwSignal::new(String::new());

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match blog::fetch_tags(&api).await {
                    Ok(payload) => {
                        tags.try_set(payload.tags);
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
            match blog::fetch_posts(&api, &current).await {
                Ok(page) => {
                    error.try_set(String::new());
                    posts.try_set(Some(page));
                }
                Err(e) => {
                    posts.try_set(Some(Page::empty(POSTS_PAGE_SIZE)));
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let next = filter.with(|f| with_search(f, &search.get()));
        filter.set(next);
    };

    let page = Signal::derive(move || filter.with(|f| f.page.max(1)));
    let pages = Signal::derive(move || {
        posts.with(|p| p.as_ref().map_or(1, |p| total_pages(p.count, POSTS_PAGE_SIZE)))
    });
    let on_page = Callback::new(move |next: u32| filter.update(|f| f.page = next));

    let tag_bar = move || {
        let active = filter.with(|f| f.tag.clone());
        tags.get()
            .into_iter()
            .map(|tag| {
                let is_active = tag.slug == active;
                let slug = tag.slug.clone();
                view! {
                    <button
                        class="tag-filter"
                        class:tag-filter--active=is_active
                        on:click=move |_| filter.update(|f| *f = with_tag(f, &slug))
                    >
                        {format!("{} ({})", tag.name, tag.post_count)}
                    </button>
                }
            })
            .collect_view()
    };

    let cards = move || {
        let list = posts.with(|p| p.as_ref().map(|p| p.results.clone()).unwrap_or_default());
        if list.is_empty() {
            return view! { <EmptyState title="No posts found." message="Try another search or tag."/> }.into_any();
        }
        list.into_iter().map(post_card).collect_view().into_any()
    };

    view! {
        <SeoHead title="Blog" description="News, events, and stories from our cafe and coworking community."/>
        <section class="page blog-list">
            <h1>"Blog"</h1>
            <form class="search-bar" on:submit=on_search>
                <input
                    class="field"
                    type="search"
                    placeholder="Search posts"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="button" type="submit">"Search"</button>
            </form>
            <div class="tag-bar">{tag_bar}</div>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || posts.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading posts..."</p> }>
                <div class="post-grid">{cards}</div>
            </Show>
            <Pagination page=page total_pages=pages on_change=on_page/>
        </section>
    }
}

fn post_card(post: PostCard) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    let alt = if post.hero_image_alt.is_empty() { post.title.clone() } else { post.hero_image_alt.clone() };
    view! {
        <article class="post-card">
            {post.hero_image_url.map(|src| view! { <img class="post-card__image" src=src alt=alt loading="lazy"/> })}
            <h2 class="post-card__title"><a href=href>{post.title}</a></h2>
            <p class="post-card__date">{post.published_at.as_deref().map(|d| date_part(d).to_owned())}</p>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <div class="post-card__tags">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! { <TagChip label=tag.name/> })
                    .collect_view()}
            </div>
        </article>
    }
}

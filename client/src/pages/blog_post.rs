//! Single blog post rendered from typed content blocks.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::components::tag_chip::TagChip;
use crate::net::blog;
use crate::net::types::{ContentBlock, Post, PostPayload};
use crate::state::auth::use_api;
use crate::util::format::date_part;

/// Description for the page head: the excerpt, else the first paragraph.
pub fn post_description(post: &Post) -> String {
    if !post.excerpt.trim().is_empty() {
        return post.excerpt.clone();
    }
    post.content_blocks
        .iter()
        .find_map(|block| match block {
            ContentBlock::Paragraph { text } => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Byline: author and publication date, whichever are present.
pub fn byline(post: &Post) -> String {
    let author = post.author_name.as_deref().map(str::trim).filter(|name| !name.is_empty());
    let date = post.published_at.as_deref().map(date_part);
    match (author, date) {
        (Some(author), Some(date)) => format!("{author} · {date}"),
        (Some(author), None) => author.to_owned(),
        (None, Some(date)) => date.to_owned(),
        (None, None) => String::new(),
    }
}

fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Paragraph { text } => view! { <p>{text}</p> }.into_any(),
        ContentBlock::Heading { text } => view! { <h2>{text}</h2> }.into_any(),
        ContentBlock::Quote { text, author } => view! {
            <blockquote>
                <p>{text}</p>
                {author.map(|author| view! { <cite>{author}</cite> })}
            </blockquote>
        }
        .into_any(),
        ContentBlock::Image { url, alt, caption } => view! {
            <figure>
                <img src=url alt=alt.unwrap_or_default() loading="lazy"/>
                {caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
            </figure>
        }
        .into_any(),
        ContentBlock::List { items } => view! {
            <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        }
        .into_any(),
        ContentBlock::Unsupported => ().into_any(),
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let payload = RwSignal::new(None::<PostPayload>);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let slug = slug.get();
        let api = api.clone();
        payload.set(None);
        error.set(String::new());
        spawn_local(async move {
            match blog::fetch_post(&api, &slug).await {
                Ok(loaded) => {
                    payload.try_set(Some(loaded));
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let article = move || {
        payload.get().map(|PostPayload { post, related }| {
            let description = post_description(&post);
            let byline = byline(&post);
            let hero_alt = if post.hero_image_alt.is_empty() { post.title.clone() } else { post.hero_image_alt.clone() };
            view! {
                <SeoHead title=post.title.clone() description=description canonical=post.canonical_url.clone()/>
                <article class="post">
                    <h1 class="post__title">{post.title}</h1>
                    <p class="post__byline">{byline}</p>
                    {post.hero_image_url.map(|src| view! { <img class="post__hero" src=src alt=hero_alt/> })}
                    <div class="post__tags">
                        {post
                            .tags
                            .into_iter()
                            .map(|tag| view! { <TagChip label=tag.name/> })
                            .collect_view()}
                    </div>
                    <div class="post__body">{post.content_blocks.into_iter().map(render_block).collect_view()}</div>
                </article>
                <Show when={
                    let has_related = !related.is_empty();
                    move || has_related
                }>
                    <aside class="related-posts">
                        <h2>"Related posts"</h2>
                        <ul>
                            {related
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a href=format!("/blog/{}", item.slug)>{item.title.clone()}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </aside>
                </Show>
            }
        })
    };

    view! {
        <section class="page blog-post">
            <a class="back-link" href="/blog">"← All posts"</a>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show
                when=move || payload.with(Option::is_some) || !error.get().is_empty()
                fallback=|| view! { <p class="muted">"Loading post..."</p> }
            >
                {article}
            </Show>
        </section>
    }
}

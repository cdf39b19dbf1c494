//! Card for one post in the blogs list.

#[cfg(all(test, feature = "ssr"))]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::context::AppContext;
use crate::net::types::Post;
use crate::util::format::{excerpt, format_date};
use crate::util::owner::post_actions;

/// `deleting` disables the delete control while this post's delete is in
/// flight; `on_delete` receives the post id and is expected to confirm first.
#[component]
pub fn PostCard(
    ctx: AppContext,
    post: Post,
    #[prop(into)] deleting: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let auth = ctx.auth;
    let owner_id = post.user_id.clone();
    let actions = Memo::new(move |_| auth.with(|a| post_actions(a, &owner_id)));
    let href = format!("/blogs/{}", post.id);
    let edit_href = format!("/blogs/edit/{}", post.id);
    let id = post.id.clone();
    let date = format_date(post.created_at.as_deref());
    let summary = excerpt(&post.content);
    let image = post.image_url.clone();

    view! {
        <article class="post-card">
            {image.map(|src| view! { <img class="post-card__image" src=src alt="" /> })}
            <a class="post-card__title" href=href>
                {post.title}
            </a>
            <span class="post-card__date">{date}</span>
            <p class="post-card__excerpt">{summary}</p>
            <div class="post-card__actions">
                <Show when=move || actions.get().edit>
                    <a class="btn" href=edit_href.clone()>
                        "Edit"
                    </a>
                </Show>
                <Show when=move || actions.get().delete>
                    <button
                        class="btn btn--danger"
                        disabled=move || deleting.get()
                        on:click={
                            let id = id.clone();
                            move |_| on_delete.run(id.clone())
                        }
                    >
                        {move || if deleting.get() { "Deleting…" } else { "Delete" }}
                    </button>
                </Show>
            </div>
        </article>
    }
}

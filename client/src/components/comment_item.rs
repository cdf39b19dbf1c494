//! One comment in a post's comment list.

#[cfg(all(test, feature = "ssr"))]
#[path = "comment_item_test.rs"]
mod comment_item_test;

use leptos::prelude::*;

use crate::context::AppContext;
use crate::net::types::Comment;
use crate::util::format::format_date;
use crate::util::owner::comment_actions;

#[component]
pub fn CommentItem(
    ctx: AppContext,
    comment: Comment,
    #[prop(into)] deleting: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let auth = ctx.auth;
    let owner_id = comment.user_id.clone();
    let can_delete = Memo::new(move |_| auth.with(|a| comment_actions(a, &owner_id).delete));
    let id = comment.id.clone();
    let date = format_date(comment.created_at.as_deref());

    view! {
        <li class="comment">
            <p class="comment__content">{comment.content}</p>
            {comment.image_url.map(|src| view! { <img class="comment__image" src=src alt="" /> })}
            <span class="comment__date">{date}</span>
            <Show when=move || can_delete.get()>
                <button
                    class="btn btn--danger comment__delete"
                    disabled=move || deleting.get()
                    on:click={
                        let id = id.clone();
                        move |_| on_delete.run(id.clone())
                    }
                >
                    {move || if deleting.get() { "Deleting…" } else { "Delete" }}
                </button>
            </Show>
        </li>
    }
}

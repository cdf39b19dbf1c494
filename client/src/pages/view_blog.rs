//! Post detail with its comment thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Loads the post and then its comments in one pass; adding or
//! deleting a comment reloads both. Commenting needs a signed-in user, the
//! form is shown disabled otherwise.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_item::CommentItem;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::image_picker::{ImagePicker, reset_selection, selection_signal};
use crate::context::AppContext;
use crate::net::comments::{create_comment, delete_comment, fetch_comments};
use crate::net::posts::fetch_post;
use crate::net::types::Post;
use crate::state::detail::{Detail, DetailState};
use crate::state::image::ImageSelection;
use crate::util::form::validate_comment;
use crate::util::format::format_date;
use crate::util::owner::post_actions;

#[component]
pub fn ViewBlogPage(ctx: AppContext) -> impl IntoView {
    let auth = ctx.auth;
    let params = use_params_map();
    let post_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let state = RwSignal::new(DetailState::default());
    let detail = Memo::new(move |_| state.with(|s| s.detail.clone()));
    let comments = Memo::new(move |_| state.with(|s| s.comments.clone()));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let set_error = move |message: Option<String>| state.update(|s| s.error = message);
    let reload = RwSignal::new(0_u32);

    // Comment form.
    let text = RwSignal::new(String::new());
    let image = selection_signal();
    let posting = RwSignal::new(false);

    // Comment delete.
    let pending_delete = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = post_id.get();
        reload.track();
        let Some(request) = state.try_update(|s| s.begin_load(&id)) else {
            return;
        };
        let backend = ctx.backend();
        leptos::task::spawn_local(async move {
            let post = fetch_post(&*backend, &id).await.map_err(|e| {
                log::warn!("blogs: load post={id} failed: {e}");
                e.to_string()
            });
            let rows = match &post {
                Ok(_) => fetch_comments(&*backend, &id).await.map_err(|e| {
                    log::warn!("comments: load for post={id} failed: {e}");
                    e.to_string()
                }),
                Err(_) => Ok(Vec::new()),
            };
            if state.try_update(|s| s.loaded(request, post, rows)) != Some(true) {
                log::debug!("blogs: dropped stale load of post={id}");
            }
        });
    });

    let signed_in = move || auth.with(|a| a.user.is_some());
    let form_disabled = Signal::derive(move || !signed_in() || posting.get());
    let submit_disabled = move || form_disabled.get() || image.with(ImageSelection::is_reading);

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get_untracked() || image.with_untracked(ImageSelection::is_reading) {
            return;
        }
        let content = match validate_comment(&text.get_untracked()) {
            Ok(content) => content,
            Err(message) => {
                set_error(Some(message.to_owned()));
                return;
            }
        };
        set_error(None);
        posting.set(true);

        let backend = ctx.backend();
        let id = post_id.get_untracked();
        let file = image.with_untracked(|s| s.file.clone());
        leptos::task::spawn_local(async move {
            match create_comment(&*backend, &id, &content, file.as_ref()).await {
                Ok(()) => {
                    text.set(String::new());
                    reset_selection(image);
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    log::warn!("comments: create on post={id} failed: {e}");
                    set_error(Some(e.to_string()));
                }
            }
            posting.set(false);
        });
    };

    let request_delete = Callback::new(move |id: String| pending_delete.set(Some(id)));
    let cancel_delete = Callback::new(move |()| pending_delete.set(None));
    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if deleting.with_untracked(Option::is_some) {
            return;
        }
        deleting.set(Some(id.clone()));
        set_error(None);
        let backend = ctx.backend();
        leptos::task::spawn_local(async move {
            let result = delete_comment(&*backend, &id).await;
            deleting.set(None);
            match result {
                Ok(()) => reload.update(|n| *n = n.wrapping_add(1)),
                Err(e) => {
                    log::warn!("comments: delete comment={id} failed: {e}");
                    set_error(Some(e.to_string()));
                }
            }
        });
    });

    let header = move |post: Post| {
        let actions = post_actions(&auth.get(), &post.user_id);
        let edit_href = format!("/blogs/edit/{}", post.id);
        view! {
            <article class="post-detail">
                <header class="post-detail__header">
                    <h1>{post.title}</h1>
                    <span class="post-detail__date">{format_date(post.created_at.as_deref())}</span>
                    {actions.edit.then(|| view! { <a class="btn" href=edit_href>"Edit"</a> })}
                </header>
                {post.image_url.map(|src| view! { <img class="post-detail__image" src=src alt="" /> })}
                <div class="post-detail__content">{post.content}</div>
            </article>
        }
    };

    let comment_list = move || {
        let rows = comments.get();
        if rows.is_empty() {
            return view! { <p class="comments__empty">"No comments yet."</p> }.into_any();
        }
        rows.into_iter()
            .map(|comment| {
                let id = comment.id.clone();
                let is_deleting = Signal::derive(move || deleting.with(|d| d.as_deref() == Some(id.as_str())));
                view! { <CommentItem ctx=ctx comment=comment deleting=is_deleting on_delete=request_delete /> }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <section class="view-blog-page">
            <nav class="view-blog-page__links">
                <a class="btn" href="/blogs">
                    "Back to Blogs"
                </a>
                <a class="btn" href="/">
                    "Home"
                </a>
            </nav>
            {move || match detail.get() {
                Detail::Loading => view! { <p class="page-status">"Loading…"</p> }.into_any(),
                Detail::Missing => view! { <p class="page-status">"Not found."</p> }.into_any(),
                Detail::Loaded(post) => {
                    view! {
                        {header(post)}
                        <h2 class="comments__title">"Comments"</h2>
                        <form class="comment-form" on:submit=on_comment>
                            <textarea
                                class="comment-form__text"
                                placeholder=move || if signed_in() { "Write a comment…" } else { "Login to comment…" }
                                disabled=move || form_disabled.get()
                                prop:value=move || text.get()
                                on:input=move |ev| text.set(event_target_value(&ev))
                            ></textarea>
                            <ImagePicker selection=image disabled=form_disabled />
                            <button class="btn btn--primary" type="submit" disabled=submit_disabled>
                                {move || if posting.get() { "Posting…" } else { "Post comment" }}
                            </button>
                            <Show when=move || error.with(Option::is_some)>
                                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                        </form>
                        <ul class="comments">{comment_list}</ul>
                    }
                        .into_any()
                }
            }}
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Comment"
                    message="Delete this comment?"
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </Show>
        </section>
    }
}

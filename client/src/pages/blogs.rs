//! Paginated blog list with owner-gated edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Fetches one page at a time, newest first, and refetches the
//! current page after a successful delete. A response for a page the user
//! has already navigated away from is dropped.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pager::Pager;
use crate::components::post_card::PostCard;
use crate::context::AppContext;
use crate::net::posts::{delete_post, fetch_page};
use crate::state::blogs::BlogsState;

#[component]
pub fn BlogsPage(ctx: AppContext) -> impl IntoView {
    let state = RwSignal::new(BlogsState::new(ctx.page_size));
    let page = Memo::new(move |_| state.with(|s| s.page));
    let reload = RwSignal::new(0_u32);
    let pending_delete = RwSignal::new(None::<String>);

    Effect::new(move || {
        let page = page.get();
        reload.track();
        state.update(BlogsState::begin_load);
        let backend = ctx.backend();
        let size = ctx.page_size;
        leptos::task::spawn_local(async move {
            let result = fetch_page(&*backend, page, size).await.map_err(|e| {
                log::warn!("blogs: page {page} failed: {e}");
                e.to_string()
            });
            if state.try_with_untracked(|s| s.page) == Some(page) {
                state.update(|s| s.loaded(result));
            }
        });
    });

    let request_delete = Callback::new(move |id: String| pending_delete.set(Some(id)));
    let cancel_delete = Callback::new(move |()| pending_delete.set(None));
    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if state.with_untracked(|s| s.deleting.is_some()) {
            return;
        }
        state.update(|s| {
            s.deleting = Some(id.clone());
            s.error = None;
        });
        let backend = ctx.backend();
        leptos::task::spawn_local(async move {
            let result = delete_post(&*backend, &id).await;
            state.update(|s| s.deleting = None);
            match result {
                Ok(()) => {
                    log::info!("blogs: deleted post={id}");
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    log::warn!("blogs: delete post={id} failed: {e}");
                    state.update(|s| s.error = Some(e.to_string()));
                }
            }
        });
    });

    let list = move || {
        let (items, loading) = state.with(|s| (s.items.clone(), s.loading));
        if items.is_empty() {
            if loading {
                return view! { <p class="page-status">"Loading..."</p> }.into_any();
            }
            return view! {
                <div class="blogs-page__empty">
                    <p>"No blogs yet."</p>
                    <a class="btn btn--primary" href="/blogs/create">
                        "Create the first one"
                    </a>
                </div>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|post| {
                let id = post.id.clone();
                let deleting = Signal::derive(move || state.with(|s| s.is_deleting(&id)));
                view! { <PostCard ctx=ctx post=post deleting=deleting on_delete=request_delete /> }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <section class="blogs-page">
            <header class="blogs-page__header">
                <h1>"Blogs"</h1>
                <a class="btn btn--primary" href="/blogs/create">
                    "New Blog"
                </a>
            </header>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="blogs-page__list">{list}</div>
            <Pager state=state />
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Blog"
                    message="This will permanently delete this blog post."
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </Show>
        </section>
    }
}

//! Edit-post page (protected).
//!
//! SYSTEM CONTEXT
//! ==============
//! Prefills from the stored post. Saving without picking a new image writes
//! the stored `image_url` back unchanged; picking one uploads it and
//! replaces the URL.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::post_editor::{PostEditor, PostFields};
use crate::context::AppContext;
use crate::net::posts::{fetch_draft, update_post};
use crate::util::form::validate_post;

#[component]
pub fn EditBlogPage(ctx: AppContext) -> impl IntoView {
    let params = use_params_map();
    let post_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let fields = PostFields::new();
    let existing_image = RwSignal::new(None::<String>);
    let loaded = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if saved.get() {
            navigate("/blogs", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let id = post_id.get();
        loaded.set(false);
        let backend = ctx.backend();
        leptos::task::spawn_local(async move {
            match fetch_draft(&*backend, &id).await {
                Ok(draft) => {
                    fields.title.set(draft.title);
                    fields.content.set(draft.content);
                    existing_image.set(draft.image_url);
                    loaded.set(true);
                }
                Err(e) => {
                    log::warn!("blogs: load post={id} for edit failed: {e}");
                    fields.error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        if fields.is_busy_untracked() || !loaded.get_untracked() {
            return;
        }
        let form = match validate_post(&fields.title.get_untracked(), &fields.content.get_untracked()) {
            Ok(form) => form,
            Err(message) => {
                fields.error.set(Some(message.to_owned()));
                return;
            }
        };
        fields.error.set(None);
        fields.saving.set(true);

        let backend = ctx.backend();
        let id = post_id.get_untracked();
        let stored = existing_image.get_untracked();
        let image = fields.image.with_untracked(|s| s.file.clone());
        leptos::task::spawn_local(async move {
            match update_post(&*backend, &id, &form, stored, image.as_ref()).await {
                Ok(()) => saved.set(true),
                Err(e) => {
                    log::warn!("blogs: update post={id} failed: {e}");
                    fields.error.set(Some(e.to_string()));
                    fields.saving.set(false);
                }
            }
        });
    });

    view! {
        <section class="editor-page">
            <h1>"Edit Blog"</h1>
            <Show
                when=move || loaded.get()
                fallback=move || {
                    view! {
                        <Show
                            when=move || fields.error.with(Option::is_some)
                            fallback=|| view! { <p class="page-status">"Loading..."</p> }
                        >
                            <p class="page-error">{move || fields.error.get().unwrap_or_default()}</p>
                        </Show>
                    }
                }
            >
                <PostEditor
                    fields=fields
                    submit_label="Save Changes"
                    saving_label="Saving..."
                    current_image=existing_image
                    on_submit=on_submit
                />
            </Show>
        </section>
    }
}

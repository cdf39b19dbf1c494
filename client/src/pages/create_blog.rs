//! New-post page (protected).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::post_editor::{PostEditor, PostFields};
use crate::context::AppContext;
use crate::net::posts::create_post;
use crate::util::form::validate_post;

#[component]
pub fn CreateBlogPage(ctx: AppContext) -> impl IntoView {
    let fields = PostFields::new();
    let saved = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if saved.get() {
            navigate("/blogs", NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        if fields.is_busy_untracked() {
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
        let image = fields.image.with_untracked(|s| s.file.clone());
        leptos::task::spawn_local(async move {
            match create_post(&*backend, &form, image.as_ref()).await {
                Ok(()) => saved.set(true),
                Err(e) => {
                    log::warn!("blogs: create failed: {e}");
                    fields.error.set(Some(e.to_string()));
                    fields.saving.set(false);
                }
            }
        });
    });

    view! {
        <section class="editor-page">
            <h1>"Create Blog"</h1>
            <PostEditor fields=fields submit_label="Publish" saving_label="Saving..." on_submit=on_submit />
        </section>
    }
}

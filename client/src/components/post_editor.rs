//! Title/content/image editor shared by the create and edit pages.

#[cfg(test)]
#[path = "post_editor_test.rs"]
mod post_editor_test;

use leptos::prelude::*;

use super::image_picker::{ImagePicker, selection_signal};
use crate::state::image::ImageSelection;

/// Field signals owned by the page. The page validates and saves; this
/// component only renders and forwards submit.
#[derive(Clone, Copy)]
pub struct PostFields {
    pub title: RwSignal<String>,
    pub content: RwSignal<String>,
    pub image: RwSignal<ImageSelection>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PostFields {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            image: selection_signal(),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Submit is held while a save runs or the picked image is still being
    /// read.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.saving.get() || self.image.with(ImageSelection::is_reading)
    }

    #[must_use]
    pub fn is_busy_untracked(&self) -> bool {
        self.saving.get_untracked() || self.image.with_untracked(ImageSelection::is_reading)
    }
}

impl Default for PostFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn PostEditor(
    fields: PostFields,
    #[prop(into)] submit_label: String,
    #[prop(into)] saving_label: String,
    /// Image already stored on the post, shown until a replacement is picked.
    #[prop(optional)]
    current_image: Option<RwSignal<Option<String>>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let PostFields { title, content, image, saving, error } = fields;
    let current =
        move || current_image.and_then(|s| s.get()).filter(|_| image.with(|i| i.preview.is_none()));

    view! {
        <form
            class="post-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                class="post-form__title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="post-form__content"
                placeholder="Write your post..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || current().is_some()>
                <img class="post-form__current-image" src=move || current().unwrap_or_default() alt="Current image" />
            </Show>
            <ImagePicker selection=image disabled=saving />
            <button class="btn btn--primary" type="submit" disabled=move || fields.is_busy()>
                {
                    let submit_label = submit_label.clone();
                    let saving_label = saving_label.clone();
                    move || if saving.get() { saving_label.clone() } else { submit_label.clone() }
                }
            </button>
            <Show when=move || error.with(Option::is_some)>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}

//! File input that reads a chosen image into memory and previews it.
//!
//! DESIGN
//! ======
//! The picked file is read fully into an `ImageFile` as soon as it is
//! chosen, so submit handlers only deal with plain bytes. Until that read
//! settles the selection reports `is_reading` and forms hold submit. The
//! preview is an object URL for the original browser `File`; it is released
//! when replaced, cleared, or when the view that owns the selection goes
//! away.

use leptos::prelude::*;

use crate::state::image::ImageSelection;

/// Selection signal for a form. Must be created by the view that owns the
/// form so its preview URL is released with that view.
pub fn selection_signal() -> RwSignal<ImageSelection> {
    let selection = RwSignal::new(ImageSelection::default());
    on_cleanup(move || release_preview(selection.try_update_untracked(ImageSelection::clear).flatten()));
    selection
}

/// Clear the selection after a successful save.
pub fn reset_selection(selection: RwSignal<ImageSelection>) {
    release_preview(selection.try_update(ImageSelection::clear).flatten());
}

#[component]
pub fn ImagePicker(
    selection: RwSignal<ImageSelection>,
    #[prop(into, default = "Image (optional)".to_owned())] label: String,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        pick_file(&ev, selection);
        #[cfg(not(feature = "hydrate"))]
        {
            drop(ev);
            reset_selection(selection);
        }
    };
    let preview = move || selection.with(|s| s.preview.clone());

    view! {
        <label class="image-picker">
            <span class="image-picker__label">{label}</span>
            <input type="file" accept="image/*" disabled=move || disabled.get() on:change=on_change />
        </label>
        <Show when=move || preview().is_some()>
            <img class="image-picker__preview" src=move || preview().unwrap_or_default() alt="Selected image preview" />
        </Show>
        <Show when=move || selection.with(ImageSelection::is_reading)>
            <span class="image-picker__status">"Reading image…"</span>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn pick_file(ev: &leptos::ev::Event, selection: RwSignal<ImageSelection>) {
    use wasm_bindgen::JsCast as _;

    let picked = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0));
    let Some(picked) = picked else {
        reset_selection(selection);
        return;
    };

    let url = web_sys::Url::create_object_url_with_blob(&picked).ok();
    let Some((ticket, replaced)) = selection.try_update(|s| s.begin_read(url)) else {
        return;
    };
    release_preview(replaced);

    leptos::task::spawn_local(async move {
        match read_file(&picked).await {
            Ok(image) => {
                if selection.try_update(|s| s.finish_read(ticket, image)) == Some(false) {
                    log::debug!("image: dropped superseded read of {}", picked.name());
                }
            }
            Err(e) => {
                log::warn!("image: failed to read {}: {e}", picked.name());
                release_preview(selection.try_update(|s| s.abandon_read(ticket)).flatten());
            }
        }
    });
}

#[cfg(feature = "hydrate")]
async fn read_file(picked: &web_sys::File) -> Result<crate::net::types::ImageFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(picked.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(crate::net::types::ImageFile {
        file_name: picked.name(),
        content_type: picked.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[cfg(feature = "hydrate")]
fn release_preview(url: Option<String>) {
    if let Some(url) = url {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::debug!("image: revoke {url} failed: {e:?}");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn release_preview(url: Option<String>) {
    drop(url);
}

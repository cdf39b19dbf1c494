//! Previous/next controls for the paginated list.

use leptos::prelude::*;

use crate::state::blogs::BlogsState;

#[component]
pub fn Pager(state: RwSignal<BlogsState>) -> impl IntoView {
    let prev_disabled = move || state.with(|s| s.loading || !s.can_go_prev());
    let next_disabled = move || state.with(|s| s.loading || !s.can_go_next());

    view! {
        <div class="pager">
            <button class="btn pager__prev" disabled=prev_disabled on:click=move |_| state.update(BlogsState::prev)>
                "Previous"
            </button>
            <span class="pager__page">{move || format!("Page {}", state.with(|s| s.page))}</span>
            <button class="btn pager__next" disabled=next_disabled on:click=move |_| state.update(BlogsState::next)>
                "Next"
            </button>
        </div>
    }
}

//! Sign-out route: signs out on mount, then replaces itself with `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::context::AppContext;
use crate::state::session::logout;

#[component]
pub fn LogoutPage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        let backend = ctx.backend();
        let auth = ctx.auth;
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            logout(&*backend, &auth).await;
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    });

    view! { <p class="page-status">"Logging out..."</p> }
}

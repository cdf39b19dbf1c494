//! Top navigation bar.
//!
//! Links depend on whether a user is cached in the auth signal; the signed-in
//! pill shows the account email when the service reported one.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NavBar(ctx: AppContext) -> impl IntoView {
    let auth = ctx.auth;
    let signed_in = move || auth.with(|a| a.user.is_some());
    let email = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .and_then(|u| u.email.clone())
                .unwrap_or_else(|| "account".to_owned())
        })
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Blogboard"
            </a>
            <a class="nav-bar__link" href="/">
                "Home"
            </a>
            <a class="nav-bar__link" href="/blogs">
                "Blogs"
            </a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href="/login">
                            "Login"
                        </a>
                        <a class="nav-bar__link" href="/register">
                            "Register"
                        </a>
                    }
                }
            >
                <a class="nav-bar__link" href="/blogs/create">
                    "Create"
                </a>
                <span class="nav-bar__pill">"Signed in as " {email}</span>
                <a class="nav-bar__link" href="/logout">
                    "Logout"
                </a>
            </Show>
        </nav>
    }
}

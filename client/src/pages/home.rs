//! Landing dashboard with auth status and entry points.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn HomePage(ctx: AppContext) -> impl IntoView {
    let auth = ctx.auth;
    let status = move || {
        auth.with(|a| match &a.user {
            Some(user) => format!("Signed in as {}", user.email.as_deref().unwrap_or(&user.id)),
            None if a.loading => "Checking session...".to_owned(),
            None => "Not signed in".to_owned(),
        })
    };

    view! {
        <section class="home-page">
            <h1>"Dashboard"</h1>
            <p class="home-page__status">"Status: " <b>{status}</b></p>
            <div class="home-page__grid">
                <div class="home-card">
                    <h3>"Blogs"</h3>
                    <p>"View the list of blogs with pagination."</p>
                    <a class="btn btn--primary" href="/blogs">
                        "Open Blogs"
                    </a>
                </div>
                <div class="home-card">
                    <h3>"Create Blog"</h3>
                    <p>"Create a new blog post (requires login)."</p>
                    <a class="btn btn--primary" href="/blogs/create">
                        "Create"
                    </a>
                </div>
                <div class="home-card">
                    <h3>"Authentication"</h3>
                    <p>"Register a new account or log into an existing one."</p>
                    <a class="btn" href="/register">
                        "Register"
                    </a>
                    <a class="btn" href="/login">
                        "Login"
                    </a>
                    <a class="btn" href="/logout">
                        "Logout"
                    </a>
                </div>
            </div>
        </section>
    }
}

//! Root application component with routing and the session context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::config::BackendConfig;
use crate::context::AppContext;
use crate::net::supabase::SupabaseClient;
use crate::pages::{
    blogs::BlogsPage, create_blog::CreateBlogPage, edit_blog::EditBlogPage, home::HomePage, login::LoginPage,
    logout::LogoutPage, not_found::NotFoundPage, register::RegisterPage, view_blog::ViewBlogPage,
};
use crate::state::session::init_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session context around the Supabase client and restores any
/// stored session once mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BackendConfig::from_build_env();
    let page_size = config.page_size;
    let ctx = AppContext::new(Arc::new(SupabaseClient::new(config)), page_size);

    Effect::new(move || {
        let backend = ctx.backend();
        let auth = ctx.auth;
        leptos::task::spawn_local(async move {
            init_session(&*backend, &auth).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/blogboard.css"/>
        <Title text="Blogboard"/>

        <Router>
            <NavBar ctx=ctx/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=move || view! { <HomePage ctx=ctx/> }/>
                    <Route path=StaticSegment("register") view=move || view! { <RegisterPage ctx=ctx/> }/>
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage ctx=ctx/> }/>
                    <Route path=StaticSegment("logout") view=move || view! { <LogoutPage ctx=ctx/> }/>
                    <Route path=StaticSegment("blogs") view=move || view! { <BlogsPage ctx=ctx/> }/>
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("create"))
                        view=move || view! {
                            <ProtectedRoute ctx=ctx>
                                <CreateBlogPage ctx=ctx/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("edit"), ParamSegment("id"))
                        view=move || view! {
                            <ProtectedRoute ctx=ctx>
                                <EditBlogPage ctx=ctx/>
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=(StaticSegment("blogs"), ParamSegment("id"))
                        view=move || view! { <ViewBlogPage ctx=ctx/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR app, its compiled `/pkg` assets, and a health check
//! under one Axum router. The server keeps no application state: every blog,
//! comment, and session operation happens in the browser against the hosted
//! backend.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on Leptos.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: SSR pages, static assets, and [`base_routes`].
///
/// Paths no route claims are rendered through the app shell, so a direct
/// load of an unknown URL gets the not-found page instead of an empty body.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(blog_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || blog_client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(blog_client::app::shell))
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

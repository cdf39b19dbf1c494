//! Wrapper that only mounts its children for a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the create and edit routes. The decision itself is the pure
//! `util::guard::guard_decision`; this component renders it and performs the
//! login redirect with history replaced so Back does not return to the
//! guarded URL.

#[cfg(all(test, feature = "ssr"))]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::context::AppContext;
use crate::util::guard::{GuardDecision, LOGIN_PATH, guard_decision};

#[component]
pub fn ProtectedRoute(ctx: AppContext, children: ChildrenFn) -> impl IntoView {
    let auth = ctx.auth;
    let decision = Memo::new(move |_| auth.with(guard_decision));
    let navigate = use_navigate();

    Effect::new(move || {
        if decision.get() == GuardDecision::Redirect {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    guarded_view(decision.into(), children)
}

/// Children are only built for [`GuardDecision::Render`].
pub fn guarded_view(decision: Signal<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! { <p class="page-status">"Loading..."</p> }.into_any(),
        GuardDecision::Redirect => view! { <p class="page-status">"Redirecting to login..."</p> }.into_any(),
    }
}

//! Email + password form shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through `state::session` and renders the resulting
//! `AuthState::error` verbatim. Once a user is cached the page replaces
//! itself with `/`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::context::AppContext;
use crate::state::session::{login, register};
use crate::util::form::validate_credentials;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Register => "Creating account...",
        }
    }

    fn alternate(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("/register", "Need an account? Register"),
            Self::Register => ("/login", "Already registered? Login"),
        }
    }
}

#[component]
pub fn AuthForm(ctx: AppContext, mode: AuthMode) -> impl IntoView {
    let auth = ctx.auth;
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.with(|a| a.user.is_some()) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(message) => {
                    local_error.set(Some(message));
                    return;
                }
            };
        local_error.set(None);

        let backend = ctx.backend();
        leptos::task::spawn_local(async move {
            match mode {
                AuthMode::Login => login(&*backend, &auth, &email_value, &password_value).await,
                AuthMode::Register => register(&*backend, &auth, &email_value, &password_value).await,
            }
        });
    };

    let message = move || {
        local_error
            .get()
            .map(str::to_owned)
            .or_else(|| auth.with(|a| a.error.clone()))
    };
    let busy = move || auth.with(|a| a.loading);
    let (alt_href, alt_label) = mode.alternate();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{mode.title()}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { mode.busy_label() } else { mode.title() }}
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="auth-message">{move || message().unwrap_or_default()}</p>
                </Show>
                <a class="auth-card__alt" href=alt_href>
                    {alt_label}
                </a>
            </div>
        </div>
    }
}

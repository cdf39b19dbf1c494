//! Email + password sign-in page.

use leptos::prelude::*;

use crate::components::auth_form::{AuthForm, AuthMode};
use crate::context::AppContext;

#[component]
pub fn LoginPage(ctx: AppContext) -> impl IntoView {
    view! { <AuthForm ctx=ctx mode=AuthMode::Login /> }
}

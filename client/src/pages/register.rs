//! Account registration page.

use leptos::prelude::*;

use crate::components::auth_form::{AuthForm, AuthMode};
use crate::context::AppContext;

#[component]
pub fn RegisterPage(ctx: AppContext) -> impl IntoView {
    view! { <AuthForm ctx=ctx mode=AuthMode::Register /> }
}

use leptos::prelude::*;

use crate::layout::section::SectionContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Top-level gate: the main shell is only reachable with a stored session,
/// everything else falls back to the login page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    provide_context(SectionContext::new());

    view! {
        <Shell />
    }
}

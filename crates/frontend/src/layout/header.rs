use leptos::prelude::*;

use crate::layout::section::use_section;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::do_logout;

#[component]
pub fn Header() -> impl IntoView {
    let sections = use_section();
    let (auth_state, set_auth_state) = use_auth();

    let display_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <h1 class="header__title">{move || sections.active.get().title()}</h1>
            <div class="header__actions">
                <span class="header__user">{display_name}</span>
                <button
                    class="button button--secondary"
                    on:click=move |_| do_logout(set_auth_state)
                    title="Log out"
                >
                    {icon("logout")}
                    "Logout"
                </button>
            </div>
        </header>
    }
}

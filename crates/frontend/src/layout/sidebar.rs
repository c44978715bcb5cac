use leptos::prelude::*;

use crate::layout::section::{use_section, Section};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let sections = use_section();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("inventory")}
                <span class="sidebar__brand-name">"Inventory"</span>
            </div>
            <nav class="sidebar__nav">
                {Section::all().into_iter().map(|section| {
                    let is_active = move || sections.active.get() == section;
                    view! {
                        <button
                            class=move || if is_active() { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                            on:click=move |_| sections.navigate(section)
                        >
                            {icon(section.icon_name())}
                            <span>{section.title()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}

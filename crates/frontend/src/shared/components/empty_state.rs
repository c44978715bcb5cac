use leptos::prelude::*;

use crate::shared::icons::icon;

/// Placeholder body shown instead of rows when a collection is empty.
/// Tables wrap it in a single full-width row; card grids render it bare.
#[component]
pub fn EmptyState(
    icon_name: &'static str,
    title: &'static str,
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name)}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__hint">{hint}</p>
        </div>
    }
}

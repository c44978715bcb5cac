use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::store::AppStore;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the entity-list store to the whole app via context.
    provide_context(AppStore::new());

    // Toast notifications are pushed from any handler.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

use contracts::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Restores the stored session on mount and exposes it via context.
/// Whether the token is still valid is decided by the server: the first
/// 401 clears the session again.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = AuthState {
        token: storage::get_token(),
        user: storage::get_user(),
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

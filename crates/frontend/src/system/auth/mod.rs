pub mod api;
pub mod context;
pub mod storage;

use leptos::prelude::*;

use contracts::auth::AuthResponse;
use context::AuthState;

/// Persist a successful login/register response and flip the app into the
/// authenticated state.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, response: &AuthResponse) {
    storage::save_session(&response.token, &response.user);
    set_auth_state.set(AuthState {
        token: Some(response.token.clone()),
        user: Some(response.user.clone()),
    });
}

/// Drop the stored session; the auth gate falls back to the login page.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

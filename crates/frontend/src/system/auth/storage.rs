use contracts::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the bearer token and the user record as opaque strings.
pub fn save_session(token: &str, user: &UserInfo) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn get_user() -> Option<UserInfo> {
    let json = local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// `Authorization` header value, when a session exists.
pub fn bearer_header() -> Option<String> {
    get_token().map(|token| format!("Bearer {}", token))
}

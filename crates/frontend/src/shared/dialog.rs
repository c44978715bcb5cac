use web_sys::window;

/// Blocking confirmation gate in front of destructive actions. Cancelling
/// (or a missing window) means no request is issued at all.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

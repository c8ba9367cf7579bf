//! Dialog Commands
//!
//! Blocking host dialogs.

/// Show a native alert. Used for input the user has to fix.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(message, "no window for alert");
        return;
    };
    if window.alert_with_message(message).is_err() {
        tracing::warn!(message, "alert failed");
    }
}

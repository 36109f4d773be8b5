//! Native Dialogs
//!
//! Thin wrappers over `window.alert` / `window.confirm`.

/// Show a blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("[DIALOG] alert failed: {:?}", e);
        }
    }
}

/// Ask the user to confirm; anything but an explicit OK is a no
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

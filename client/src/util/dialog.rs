//! Native `alert` / `confirm` dialogs.
//!
//! Outside the browser `alert` does nothing and `confirm` answers `false`, so
//! destructive actions never proceed without a user.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

pub const CONFIRM_DELETE: &str = "Are you sure?";

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

//! Browser Platform
//!
//! Confirmation dialogs and delayed callbacks, behind a trait so the board
//! can run without a browser.

/// Host services the board needs besides the network
pub trait Platform {
    /// Ask the user to confirm an action. `false` when declined.
    fn confirm(&self, message: &str) -> bool;

    /// Run `callback` once after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// `window.confirm` and `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window available, treating confirmation as declined");
            return false;
        };

        match window.confirm_with_message(message) {
            Ok(confirmed) => confirmed,
            Err(e) => {
                tracing::warn!(error = ?e, "confirmation dialog failed");
                false
            }
        }
    }

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}

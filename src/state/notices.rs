//! Notice State
//!
//! Transient success/error banners shown through the toast container.

use leptos::*;

/// Banner messages provided to all components
#[derive(Clone, Copy)]
pub struct Notices {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message
    pub success: RwSignal<Option<String>>,
}

/// Provide notice state to the component tree
pub fn provide_notices() {
    let notices = Notices {
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(notices);
}

impl Notices {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

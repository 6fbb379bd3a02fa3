use std::cell::Cell;

use futures_signals::signal::Mutable;

/// Reactive cells behind the four page surfaces.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub email: Mutable<String>,
    pub submitting: Mutable<bool>,
    pub toast_text: Mutable<String>,
    pub toast_visible: Mutable<bool>,
    pub run_time: Mutable<String>,
}

/// Access token for the page lifetime. Written once at start-up.
#[derive(Debug, Default)]
pub struct Session {
    token: Mutable<Option<String>>,
    written: Cell<bool>,
}

impl Session {
    pub fn token(&self) -> Option<String> {
        self.token.get_cloned()
    }

    pub fn set_token(&self, token: Option<String>) -> bool {
        if self.written.replace(true) {
            log::warn!("session token already set, ignoring");
            return false;
        }
        self.token.set(token);
        true
    }
}

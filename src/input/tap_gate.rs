//! Tap handling for the button.
//!
//! A tap fires the download action only while the button is in `Start`.
//! There is no debouncing: every tap received in `Start` fires once.

use std::fmt;

use crate::model::ButtonState;

/// Invoke `callback` if and only if `state` is `Start`.
///
/// Returns whether the callback ran.
pub fn handle_tap<F: FnOnce()>(state: ButtonState, callback: F) -> bool {
    if state.is_tappable() {
        callback();
        true
    } else {
        tracing::debug!(%state, "tap ignored");
        false
    }
}

/// Boxed action fired by a tap.
pub type DownloadAction = Box<dyn FnMut() + Send>;

/// Owns the download action and gates it on the button state.
pub struct TapGate {
    action: DownloadAction,
}

impl TapGate {
    pub fn new(action: impl FnMut() + Send + 'static) -> Self {
        Self {
            action: Box::new(action),
        }
    }

    /// Replace the download action.
    pub fn set_action(&mut self, action: impl FnMut() + Send + 'static) {
        self.action = Box::new(action);
    }

    /// Route a tap received while the button is in `state`.
    pub fn on_tap(&mut self, state: ButtonState) -> bool {
        handle_tap(state, || (self.action)())
    }
}

impl Default for TapGate {
    /// No-op action, so an unconfigured button can still be tapped.
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl fmt::Debug for TapGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapGate").finish_non_exhaustive()
    }
}

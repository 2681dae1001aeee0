//! Button events delivered by the host.
//!
//! These events represent everything a host can tell the button: taps with
//! coordinates and changes to its inputs. This module is pure Rust with no
//! toolkit types, so any gesture layer can produce them.

use crate::model::{ButtonState, Color};

/// Events flowing from the host, through the `EventBus`, into the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonEvent {
    // === Input Events ===
    /// A tap at `(x, y)` in button coordinates.
    Tap { x: f64, y: f64 },

    // === Input Changes ===
    /// Download moved to another stage.
    SetState(ButtonState),

    /// Completion fraction changed.
    SetPercent(f64),

    /// Stroke color changed.
    SetStrokeColor(Color),

    /// Stroke width changed.
    SetStrokeWidth(f64),

    /// The host laid the button out at a new size.
    Resize { width: f64, height: f64 },
}

impl ButtonEvent {
    /// Returns true if this event changes what the button looks like.
    pub fn requires_redraw(&self) -> bool {
        !matches!(self, ButtonEvent::Tap { .. })
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            ButtonEvent::Tap { .. } => "Tap on button",
            ButtonEvent::SetState(_) => "Set button state",
            ButtonEvent::SetPercent(_) => "Set progress percent",
            ButtonEvent::SetStrokeColor(_) => "Set stroke color",
            ButtonEvent::SetStrokeWidth(_) => "Set stroke width",
            ButtonEvent::Resize { .. } => "Resize draw area",
        }
    }
}

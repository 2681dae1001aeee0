//! Event dispatcher for applying host events to a button.
//!
//! Called from the host's frame loop; processes all pending events in batch.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → ProgressButton setters / tap_at
//! ```

use kurbo::Point;

use crate::events::{ButtonEvent, EventBus};
use crate::model::DrawArea;
use crate::ui::ProgressButton;

/// What a dispatch pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    /// Events applied, taps included.
    pub applied: usize,
    /// Taps that fired the download action.
    pub actions_fired: usize,
    /// The button is dirty after the pass.
    pub needs_display: bool,
}

/// Drain `bus` and apply every pending event to `button`, in order.
pub fn dispatch_events(bus: &EventBus, button: &mut ProgressButton) -> DispatchSummary {
    let mut summary = DispatchSummary::default();

    for event in bus.drain() {
        if dispatch_single_event(button, &event) {
            summary.actions_fired += 1;
        }
        summary.applied += 1;
    }

    summary.needs_display = button.needs_display();
    if summary.applied > 0 {
        tracing::debug!(
            applied = summary.applied,
            actions_fired = summary.actions_fired,
            needs_display = summary.needs_display,
            "dispatched button events"
        );
    }
    summary
}

/// Apply one event. Returns true if it fired the download action.
fn dispatch_single_event(button: &mut ProgressButton, event: &ButtonEvent) -> bool {
    match *event {
        ButtonEvent::Tap { x, y } => button.tap_at(Point::new(x, y)),
        ButtonEvent::SetState(state) => {
            button.set_state(state);
            false
        }
        ButtonEvent::SetPercent(percent) => {
            button.set_percent(percent);
            false
        }
        ButtonEvent::SetStrokeColor(color) => {
            button.set_stroke_color(color);
            false
        }
        ButtonEvent::SetStrokeWidth(width) => {
            button.set_stroke_width(width);
            false
        }
        ButtonEvent::Resize { width, height } => {
            button.resize(DrawArea::new(width, height));
            false
        }
    }
}

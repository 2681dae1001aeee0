//! Thread-safe event bus using mpsc channels.
//!
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The UI thread polls for events via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::ButtonEvent;

/// Multi-producer, single-consumer queue of [`ButtonEvent`]s.
///
/// Gesture layers and download workers hold publishers; the UI thread owns
/// the bus and drains it before each frame.
///
/// # Example
///
/// ```
/// use progress_button::events::{ButtonEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(ButtonEvent::SetPercent(0.5));
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<ButtonEvent>,
    receiver: Receiver<ButtonEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<ButtonEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so Disconnected cannot happen
            // while it is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, in publication order.
    pub fn drain(&self) -> Vec<ButtonEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<ButtonEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus has been dropped the event is discarded.
    pub fn publish(&self, event: ButtonEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!(event = event.description(), "event bus gone, event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ButtonState;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(ButtonEvent::SetState(ButtonState::Progress));
        publisher.publish(ButtonEvent::SetPercent(0.25));
        publisher.publish(ButtonEvent::Tap { x: 1.0, y: 1.0 });

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                ButtonEvent::SetState(ButtonState::Progress),
                ButtonEvent::SetPercent(0.25),
                ButtonEvent::Tap { x: 1.0, y: 1.0 },
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(ButtonEvent::SetPercent(0.1));
        publisher.publish(ButtonEvent::SetPercent(0.2));

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_other_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let handle = std::thread::spawn(move || {
            for i in 0..10 {
                publisher.publish(ButtonEvent::SetPercent(i as f64 / 10.0));
            }
        });
        handle.join().unwrap();

        let events = bus.drain();
        assert_eq!(events.len(), 10);
        assert_eq!(events[9], ButtonEvent::SetPercent(0.9));
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(ButtonEvent::SetPercent(1.0));
    }

    #[test]
    fn test_try_recv_returns_none_when_empty() {
        let bus = EventBus::default();
        assert!(bus.try_recv().is_none());
    }
}

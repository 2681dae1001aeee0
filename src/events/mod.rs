//! Event system feeding host input into the button.
//!
//! Gesture layers and download workers publish [`ButtonEvent`]s from any
//! thread; the UI thread drains them and hands them to the dispatcher.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Gestures   │     │  Download   │
//! │  (taps)     │     │  worker     │
//! └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()
//!        ▼                   ▼
//! ┌─────────────────────────────────┐
//! │            EventBus             │
//! │         (mpsc channel)          │
//! └───────────────┬─────────────────┘
//!                 │ drain()
//!                 ▼
//! ┌─────────────────────────────────┐
//! │   dispatch_events → button      │
//! └─────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`ButtonEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::ButtonEvent;

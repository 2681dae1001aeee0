//! Event handlers and dispatching.
//!
//! This module contains the event dispatcher that drains the event bus
//! and applies each event to the button.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, DispatchSummary};

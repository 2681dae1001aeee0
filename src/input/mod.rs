//! Input handling module.
//!
//! - tap_gate.rs: decides whether a tap fires the download action

pub mod tap_gate;

pub use tap_gate::{handle_tap, DownloadAction, TapGate};

//! User interface module.
//!
//! ## progress_button.rs
//! - `ProgressButton`: state, style and area of the control, explicit
//!   dirty flag, `draw()` and tap routing

pub mod progress_button;

pub use progress_button::ProgressButton;

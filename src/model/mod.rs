//! Button domain model.
//!
//! This module contains pure value types (no host toolkit dependencies):
//! the button state, render inputs and configuration constants.
//!
//! Loading styles from disk lives in `storage`.

pub mod button_state;
pub mod constants;
pub mod render_config;

pub use button_state::ButtonState;
pub use constants::*;
pub use render_config::{ButtonStyle, Color, DrawArea, RenderConfig};

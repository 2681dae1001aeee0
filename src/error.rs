//! Error types for the fallible edges of the crate.
//!
//! Rendering itself never fails. Only loading a style and writing output can.

use thiserror::Error;

/// Errors raised while loading styles or writing rendered output.
#[derive(Debug, Error)]
pub enum ButtonError {
    /// Reading a style file or writing an SVG failed.
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A style file is not valid JSON for [`ButtonStyle`](crate::model::ButtonStyle).
    #[error("invalid style json: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// A state name is not one of `start`, `progress`, `done`.
    #[error("unknown button state `{0}`")]
    UnknownState(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ButtonError>;

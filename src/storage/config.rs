//! JSON style files.
//!
//! A style file sets the stroke color and width of the button:
//!
//! ```json
//! { "stroke_color": "#1E90FF", "stroke_width": 3.0 }
//! ```
//!
//! Both keys are optional; missing keys take the defaults. Loaded values are
//! clamped to the validation limits in `model::constants`.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::ButtonStyle;

/// Parse a style from JSON text and validate it.
pub fn parse_style(json: &str) -> Result<ButtonStyle> {
    let mut style: ButtonStyle = serde_json::from_str(json)?;
    style.validate();
    Ok(style)
}

/// Load a style from a JSON file.
pub fn load_style(path: impl AsRef<Path>) -> Result<ButtonStyle> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let style = parse_style(&contents)?;
    tracing::debug!(
        path = %path.display(),
        color = %style.stroke_color.to_hex(),
        width = style.stroke_width,
        "loaded button style"
    );
    Ok(style)
}

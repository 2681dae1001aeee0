//! Geometry and interaction core of a three-state download button.
//!
//! The button shows a downward arrow (`Start`), an arc that grows with the
//! completion fraction (`Progress`) and a circle with a checkmark (`Done`).
//! [`render()`] turns a state, a [`RenderConfig`] and a [`DrawArea`] into the
//! primitives to stroke; [`handle_tap()`] fires a callback only in `Start`.
//! Everything here is free of host toolkit types so tests run as plain
//! integration tests.

pub mod error;
pub mod events;
pub mod handlers;
pub mod input;
pub mod model;
pub mod render;
pub mod storage;
pub mod ui;

pub use error::{ButtonError, Result};
pub use events::{ButtonEvent, EventBus, EventPublisher};
pub use handlers::{dispatch_events, DispatchSummary};
pub use input::{handle_tap, TapGate};
pub use model::{ButtonState, ButtonStyle, Color, DrawArea, RenderConfig};
pub use render::{render, to_bez_path, to_svg_document, ArcSegment, PathDescription, Primitive};
pub use ui::ProgressButton;

pub use kurbo::Point;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Convert RGBA floats [0..1] to #RRGGBB or #RRGGBBAA (if alpha < 1).
pub fn color_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let ri = (clamp(r, 0.0, 1.0) * 255.0).round() as u8;
    let gi = (clamp(g, 0.0, 1.0) * 255.0).round() as u8;
    let bi = (clamp(b, 0.0, 1.0) * 255.0).round() as u8;
    let ai = (clamp(a, 0.0, 1.0) * 255.0).round() as u8;
    if ai == 255 {
        format!("#{:02X}{:02X}{:02X}", ri, gi, bi)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", ri, gi, bi, ai)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into normalised floats [0..1].
pub fn parse_hex_color(s: &str) -> Option<(f64, f64, f64, f64)> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        6 => (channel(0)?, channel(2)?, channel(4)?, 255u8),
        8 => (channel(0)?, channel(2)?, channel(4)?, channel(6)?),
        _ => return None,
    };
    Some((
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}

/// Install a `tracing` subscriber writing to stderr.
///
/// Filter comes from `RUST_LOG` (default `warn`). Returns an error string if a
/// global subscriber is already set.
pub fn init_tracing() -> std::result::Result<(), String> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("tracing init failed: {e}"))
}

//! Configuration constants and default values.
//!
//! This module contains the visual defaults of the button, the geometric
//! ratios used by the renderer, and validation limits for loaded styles.

// === Visual Defaults ===

/// Default stroke width in points.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Default stroke color (R, G, B, A) - mid gray, fully opaque.
pub const DEFAULT_COLOR: (f64, f64, f64, f64) = (0.5, 0.5, 0.5, 1.0);

/// Default completion fraction.
pub const DEFAULT_PERCENT: f64 = 0.0;

/// Default drawing area edge used by the demo host.
pub const DEFAULT_AREA_SIDE: f64 = 100.0;

// === Geometry Ratios ===

/// Padding is `side / PADDING_DIVISOR`.
pub const PADDING_DIVISOR: f64 = 10.0;

/// Checkmark offset is `side / THRESHOLD_DIVISOR`.
pub const THRESHOLD_DIVISOR: f64 = 20.0;

/// Extra inset applied to the arrow only. Arcs use the unscaled padding.
pub const ARROW_PADDING_SCALE: f64 = 1.1;

/// Arc start angle: straight up in y-down coordinates (3π/2).
pub const ARC_START_ANGLE: f64 = std::f64::consts::PI * 1.5;

/// A full turn in radians.
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// Flattening tolerance used when converting arcs to bezier curves.
pub const ARC_TOLERANCE: f64 = 0.1;

// === Validation Limits ===

/// Minimum stroke width accepted from a style file.
pub const MIN_STROKE_WIDTH: f64 = 0.5;

/// Maximum stroke width accepted from a style file.
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// Minimum completion fraction.
pub const MIN_PERCENT: f64 = 0.0;

/// Maximum completion fraction.
pub const MAX_PERCENT: f64 = 1.0;

//! Geometry renderer.
//!
//! Maps `(state, config, area)` to a [`PathDescription`]: the line segments
//! and arcs a host must stroke to paint the button. Nothing here touches a
//! drawing surface.
//!
//! # Module Structure
//!
//! - [`drawing`]: `render` and the per-state geometry
//! - [`path`]: output primitives
//! - [`export`]: kurbo `BezPath` and SVG conversion

pub mod drawing;
pub mod export;
pub mod path;

pub use drawing::render;
pub use export::{to_bez_path, to_svg_document};
pub use path::{ArcSegment, PathDescription, Primitive};

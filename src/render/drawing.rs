//! Per-state geometry.
//!
//! Every function here is pure: it reads the area and config and appends
//! primitives to a fresh `PathDescription`. Coordinates are y-down with the
//! origin at the top-left corner of the draw area.

use kurbo::Point;

use super::path::{ArcSegment, PathDescription};
use crate::model::constants::*;
use crate::model::{ButtonState, DrawArea, RenderConfig};

/// Compute the geometry to paint for `state`.
///
/// Called on every repaint; the result is never cached.
pub fn render(state: ButtonState, config: &RenderConfig, area: &DrawArea) -> PathDescription {
    tracing::trace!(
        %state,
        width = area.width,
        height = area.height,
        percent = config.percent,
        "rendering button"
    );

    let mut path = PathDescription::new(config.stroke_width, config.stroke_color);
    match state {
        ButtonState::Start => draw_arrow(&mut path, config, area),
        ButtonState::Progress => draw_progress(&mut path, config, area),
        ButtonState::Done => draw_done(&mut path, config, area),
    }
    path
}

/// Draw an arrow pointing down: a vertical shaft and a chevron at its tip.
fn draw_arrow(path: &mut PathDescription, config: &RenderConfig, area: &DrawArea) {
    let (w, h) = (area.width, area.height);
    let s = area.side();
    let b = config.stroke_width;
    let p = area.padding() * ARROW_PADDING_SCALE;

    let tip = Point::new(w / 2.0, (h + s - b) / 2.0 - p);

    path.polyline([Point::new(w / 2.0, (h - s) / 2.0 + p), tip]);
    path.polyline([
        Point::new((w + s - b) / 2.0 - p, h / 2.0),
        tip,
        Point::new((w - s + b) / 2.0 + p, h / 2.0),
    ]);
}

/// Draw an arc from the top, clockwise, proportional to `config.percent`.
fn draw_progress(path: &mut PathDescription, config: &RenderConfig, area: &DrawArea) {
    path.arc(ring(config, area, FULL_TURN * config.percent));
}

/// Draw a full circle and a checkmark inside it.
fn draw_done(path: &mut PathDescription, config: &RenderConfig, area: &DrawArea) {
    path.arc(ring(config, area, FULL_TURN));

    let (w, h) = (area.width, area.height);
    let s = area.side();
    let padding = area.padding();
    let t = s / THRESHOLD_DIVISOR;

    path.polyline([
        Point::new(
            (w - s) / 2.0 + s / 3.0 + padding / 2.0 - t,
            h / 2.0 - padding / 2.0 + t,
        ),
        Point::new(w / 2.0 - t, (h - s) / 2.0 + s * 2.0 / 3.0 - padding + t),
        Point::new(
            (w - s) / 2.0 + s * 5.0 / 6.0 - padding - t,
            (h - s) / 2.0 + s / 3.0 + t,
        ),
    ]);
}

/// The arc shared by progress and done, starting at the top.
fn ring(config: &RenderConfig, area: &DrawArea, sweep: f64) -> ArcSegment {
    ArcSegment {
        center: area.center(),
        radius: (area.side() - config.stroke_width) / 2.0 - area.padding(),
        start_angle: ARC_START_ANGLE,
        end_angle: ARC_START_ANGLE + sweep,
        clockwise: true,
    }
}

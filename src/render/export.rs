//! Conversions from a `PathDescription` to formats hosts can paint directly.

use kurbo::{Arc, BezPath, Vec2};

use super::path::{PathDescription, Primitive};
use crate::model::constants::ARC_TOLERANCE;
use crate::model::DrawArea;

/// Convert to a kurbo path. Arcs are approximated with cubic beziers.
pub fn to_bez_path(description: &PathDescription) -> BezPath {
    let mut path = BezPath::new();
    for primitive in &description.primitives {
        match primitive {
            Primitive::Polyline(points) => {
                if let Some((first, rest)) = points.split_first() {
                    path.move_to(*first);
                    for point in rest {
                        path.line_to(*point);
                    }
                }
            }
            Primitive::Arc(segment) => {
                let radius = segment.radius.max(0.0);
                let arc = Arc {
                    center: segment.center,
                    radii: Vec2::new(radius, radius),
                    start_angle: segment.start_angle,
                    sweep_angle: segment.sweep(),
                    x_rotation: 0.0,
                };
                path.move_to(arc.center + Vec2::from_angle(arc.start_angle) * radius);
                path.extend(arc.append_iter(ARC_TOLERANCE));
            }
        }
    }
    path
}

/// Standalone SVG document with the stroked path, sized to `area`.
pub fn to_svg_document(description: &PathDescription, area: &DrawArea) -> String {
    let color = description.stroke_color.clamped();
    let opaque = crate::color_to_hex(color.r, color.g, color.b, 1.0);
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            "  <path d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-opacity=\"{opacity}\" ",
            "stroke-width=\"{sw}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
            "</svg>\n"
        ),
        w = area.width,
        h = area.height,
        d = to_bez_path(description).to_svg(),
        stroke = opaque,
        opacity = color.a,
        sw = description.stroke_width.max(0.0),
    )
}

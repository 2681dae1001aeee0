//! Output of the renderer: a transient list of stroked primitives.

use kurbo::Point;

use crate::model::Color;

/// A circular arc in y-down coordinates. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Clockwise on screen, i.e. with increasing angle in y-down space.
    pub clockwise: bool,
}

impl ArcSegment {
    /// Signed angular extent from start to end.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// First point is a move-to, each following point a line-to.
    Polyline(Vec<Point>),
    Arc(ArcSegment),
}

/// Everything the host needs to paint one frame of the button.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDescription {
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub primitives: Vec<Primitive>,
}

impl PathDescription {
    pub fn new(stroke_width: f64, stroke_color: Color) -> Self {
        Self {
            stroke_width,
            stroke_color,
            primitives: Vec::new(),
        }
    }

    pub(crate) fn polyline(&mut self, points: impl IntoIterator<Item = Point>) {
        self.primitives.push(Primitive::Polyline(points.into_iter().collect()));
    }

    pub(crate) fn arc(&mut self, arc: ArcSegment) {
        self.primitives.push(Primitive::Arc(arc));
    }

    /// Every straight segment, as `(from, to)` pairs in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Polyline(points) => Some(points.windows(2).map(|w| (w[0], w[1]))),
                Primitive::Arc(_) => None,
            })
            .flatten()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arc(arc) => Some(arc),
            Primitive::Polyline(_) => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polyline(points) => Some(points.as_slice()),
            Primitive::Arc(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

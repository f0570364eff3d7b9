use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled convex polygon draw payload.
///
/// Vertices are in logical pixels, in winding order. The renderer fan-
/// triangulates from the first vertex, so concave outlines are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }

    /// Number of fan triangles this polygon expands to.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.points.len().saturating_sub(2)
    }
}

impl DrawList {
    /// Records a solid convex polygon.
    ///
    /// Polygons with fewer than three vertices are dropped.
    #[inline]
    pub fn push_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color) {
        if points.len() < 3 {
            log::debug!("push_polygon: dropped degenerate polygon ({} vertices)", points.len());
            return;
        }
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points, color)));
    }
}

use super::{Point, Vec2};

/// Axis-aligned rectangle in integer logical pixels (top-left origin).
///
/// Used for shape bounding boxes. Containment is inclusive on all four edges,
/// matching the hit-test rule for axis-aligned shapes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Closed containment: `[origin, origin + size]` on both axes.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }

    /// Origin in render space.
    #[inline]
    pub fn origin_vec2(self) -> Vec2 {
        self.origin.to_vec2()
    }

    /// Size in render space.
    #[inline]
    pub fn size_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = r(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(10, 0)));
        assert!(rect.contains(Point::new(0, 10)));
    }

    #[test]
    fn contains_rejects_outside_points() {
        let rect = r(0, 0, 10, 10);
        assert!(!rect.contains(Point::new(11, 11)));
        assert!(!rect.contains(Point::new(-1, 5)));
        assert!(!rect.contains(Point::new(5, 11)));
    }

}

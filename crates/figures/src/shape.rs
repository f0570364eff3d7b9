use figures_engine::coords::{Point, Rect, Vec2};
use figures_engine::paint::Color;
use figures_engine::scene::{DrawList, ZIndex};

/// A drawable, hit-testable figure on the canvas.
///
/// Geometry lives on the integer pixel grid; parameters are assumed positive
/// (degenerate shapes are not constructed by the application).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Apex at the top; base corners at `(apex.x ± height/2, apex.y + height)`.
    Triangle {
        apex: Point,
        height: i32,
        color: Color,
    },
    Square {
        origin: Point,
        side: i32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
    },
}

impl Shape {
    pub fn triangle(apex: Point, height: i32, color: Color) -> Self {
        Shape::Triangle { apex, height, color }
    }

    pub fn square(origin: Point, side: i32, color: Color) -> Self {
        Shape::Square { origin, side, color }
    }

    pub fn circle(center: Point, radius: i32, color: Color) -> Self {
        Shape::Circle { center, radius, color }
    }

    /// Corner points of the triangle variant, apex first.
    fn triangle_corners(apex: Point, height: i32) -> [Point; 3] {
        [
            apex,
            Point::new(apex.x + height / 2, apex.y + height),
            Point::new(apex.x - height / 2, apex.y + height),
        ]
    }

    /// Whether `p` lies inside the shape (boundary inclusive for the
    /// axis-aligned variants and the circle; even-odd rule for the triangle).
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Shape::Triangle { apex, height, .. } => {
                point_in_polygon(&Self::triangle_corners(apex, height), p)
            }
            Shape::Square { .. } => self.bounding_box().contains(p),
            Shape::Circle { center, radius, .. } => {
                // i64 arithmetic: squaring i32 coordinates can overflow i32.
                let dx = (p.x - center.x) as i64;
                let dy = (p.y - center.y) as i64;
                let r = radius as i64;
                dx * dx + dy * dy <= r * r
            }
        }
    }

    /// Translates the shape by `(dx, dy)`. No clamping to the canvas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let anchor = match self {
            Shape::Triangle { apex, .. } => apex,
            Shape::Square { origin, .. } => origin,
            Shape::Circle { center, .. } => center,
        };
        anchor.x += dx;
        anchor.y += dy;
    }

    /// Axis-aligned box exactly enclosing the shape.
    ///
    /// Used for drag-offset computation, not for hit-testing.
    pub fn bounding_box(&self) -> Rect {
        match *self {
            Shape::Triangle { apex, height, .. } => {
                Rect::new(apex.x - height / 2, apex.y, height, height)
            }
            Shape::Square { origin, side, .. } => Rect::new(origin.x, origin.y, side, side),
            Shape::Circle { center, radius, .. } => {
                Rect::new(center.x - radius, center.y - radius, 2 * radius, 2 * radius)
            }
        }
    }

    /// Fill color, fixed at construction.
    pub fn color(&self) -> Color {
        match *self {
            Shape::Triangle { color, .. }
            | Shape::Square { color, .. }
            | Shape::Circle { color, .. } => color,
        }
    }

    /// Records the matching draw command into `list`.
    pub fn record(&self, list: &mut DrawList, z: ZIndex) {
        match *self {
            Shape::Triangle { apex, height, color } => {
                let points: Vec<Vec2> = Self::triangle_corners(apex, height)
                    .iter()
                    .map(|p| p.to_vec2())
                    .collect();
                list.push_polygon(z, points, color);
            }
            Shape::Square { .. } => {
                let bb = self.bounding_box();
                list.push_rect(z, bb.origin_vec2(), bb.size_vec2(), self.color());
            }
            Shape::Circle { center, radius, color } => {
                list.push_circle(z, center.to_vec2(), radius as f32, color);
            }
        }
    }
}

/// Even-odd (ray crossing) point-in-polygon test.
///
/// A horizontal ray is cast toward +X; the point is inside when it crosses an
/// odd number of edges. Evaluated in `f64` so the half-pixel edge offsets of
/// the crossing test do not truncate.
fn point_in_polygon(corners: &[Point], p: Point) -> bool {
    let px = p.x as f64;
    let py = p.y as f64;

    let mut inside = false;
    let mut j = corners.len() - 1;
    for i in 0..corners.len() {
        let (xi, yi) = (corners[i].x as f64, corners[i].y as f64);
        let (xj, yj) = (corners[j].x as f64, corners[j].y as f64);

        if (yi > py) != (yj > py) {
            let x_cross = xi + (py - yi) / (yj - yi) * (xj - xi);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn green() -> Color {
        Color::from_srgb_u8(0, 255, 0)
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn triangle_contains_centroid() {
        let t = Shape::triangle(Point::new(150, 50), 80, green());
        assert!(t.contains(Point::new(150, 100)));
    }

    #[test]
    fn triangle_excludes_points_beside_the_apex() {
        let t = Shape::triangle(Point::new(150, 50), 80, green());
        // Inside the bounding box but outside the slanted edges.
        assert!(!t.contains(Point::new(115, 55)));
        assert!(!t.contains(Point::new(185, 55)));
    }

    #[test]
    fn triangle_excludes_points_outside_the_box() {
        let t = Shape::triangle(Point::new(150, 50), 80, green());
        assert!(!t.contains(Point::new(150, 40)));
        assert!(!t.contains(Point::new(150, 140)));
        assert!(!t.contains(Point::new(1, 1)));
    }

    #[test]
    fn square_is_edge_inclusive() {
        let s = Shape::square(Point::new(0, 0), 10, green());
        assert!(s.contains(Point::new(10, 10)));
        assert!(s.contains(Point::new(0, 0)));
        assert!(!s.contains(Point::new(11, 11)));
    }

    #[test]
    fn circle_is_boundary_inclusive() {
        let c = Shape::circle(Point::new(0, 0), 40, green());
        assert!(c.contains(Point::new(40, 0)));
        assert!(c.contains(Point::new(0, -40)));
        assert!(!c.contains(Point::new(41, 0)));
        assert!(!c.contains(Point::new(29, 29))); // 29² + 29² > 40²
        assert!(c.contains(Point::new(28, 28)));
    }

    // ── translation equivariance ──────────────────────────────────────────

    #[test]
    fn contains_is_translation_equivariant() {
        let probes = [
            Point::new(150, 100),
            Point::new(115, 55),
            Point::new(310, 60),
            Point::new(450, 90),
            Point::new(1, 1),
        ];
        let shapes = [
            Shape::triangle(Point::new(150, 50), 80, green()),
            Shape::square(Point::new(300, 50), 80, green()),
            Shape::circle(Point::new(450, 90), 40, green()),
        ];

        for shape in &shapes {
            for (dx, dy) in [(17, -4), (-300, 250), (0, 0)] {
                let mut moved = shape.clone();
                moved.translate(dx, dy);
                for p in &probes {
                    let q = Point::new(p.x + dx, p.y + dy);
                    assert_eq!(shape.contains(*p), moved.contains(q));
                }
            }
        }
    }

    // ── bounding boxes ────────────────────────────────────────────────────

    #[test]
    fn bounding_boxes_enclose_exactly() {
        let t = Shape::triangle(Point::new(150, 50), 80, green());
        assert_eq!(t.bounding_box(), Rect::new(110, 50, 80, 80));

        let s = Shape::square(Point::new(300, 50), 80, green());
        assert_eq!(s.bounding_box(), Rect::new(300, 50, 80, 80));

        let c = Shape::circle(Point::new(450, 90), 40, green());
        assert_eq!(c.bounding_box(), Rect::new(410, 50, 80, 80));
    }

    #[test]
    fn translate_moves_the_bounding_box() {
        let mut s = Shape::square(Point::new(300, 50), 80, green());
        s.translate(-10, 25);
        assert_eq!(s.bounding_box(), Rect::new(290, 75, 80, 80));
    }
}

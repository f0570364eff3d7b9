use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled axis-aligned ellipse draw payload.
///
/// `radii.x == radii.y` yields a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub radii: Vec2,
    pub color: Color,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, radii: Vec2, color: Color) -> Self {
        Self { center, radii, color }
    }
}

impl DrawList {
    /// Records a solid ellipse.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, center: Vec2, radii: Vec2, color: Color) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd::new(center, radii, color)));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_ellipse(z, center, Vec2::new(radius, radius), color);
    }
}

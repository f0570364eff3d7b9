use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(origin: Vec2, size: Vec2, color: Color) -> Self {
        Self { origin, size, color }
    }
}

impl DrawList {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, origin: Vec2, size: Vec2, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(origin, size, color)));
    }
}

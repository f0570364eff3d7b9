use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Ellipse(EllipseCmd),
    Polygon(PolygonCmd),
}

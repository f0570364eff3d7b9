pub(crate) mod ellipse;
pub(crate) mod polygon;
pub(crate) mod rect;

pub use ellipse::EllipseCmd;
pub use polygon::PolygonCmd;
pub use rect::RectCmd;

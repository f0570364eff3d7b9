pub mod ellipse;
pub mod polygon;
pub mod rect;

pub(crate) mod common;

pub use ellipse::EllipseRenderer;
pub use polygon::PolygonRenderer;
pub use rect::RectRenderer;

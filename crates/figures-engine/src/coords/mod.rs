//! Coordinate and geometry types shared across the engine and the application.
//!
//! Two coordinate spaces exist:
//! - Model space: integer logical pixels (`Point`, `Rect`). Shape geometry and
//!   hit-testing live here.
//! - Render space: `f32` logical pixels (`Vec2`, `Viewport`). Draw commands
//!   live here; renderers convert to NDC in shaders using a viewport uniform.
//!
//! Origin is top-left, +X right, +Y down in both spaces.

mod point;
mod rect;
mod vec2;
mod viewport;

pub use point::Point;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

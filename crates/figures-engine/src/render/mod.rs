//! GPU renderers for the scene's draw commands.
//!
//! Each shape kind has its own instanced pipeline under `render::shapes`.
//! [`ShapeRenderers`] owns one renderer per kind and dispatches paint-order
//! runs across them, so z-ordering holds even when commands of different
//! kinds interleave.

mod ctx;
mod pass;

pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use pass::ShapeRenderers;

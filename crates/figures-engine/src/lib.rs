//! Figures engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the application:
//! window/event-loop management, pointer input, and instanced wgpu renderers
//! for filled shapes (rectangles, ellipses, polygons).

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

//! Paint model shared between the scene and renderers.
//!
//! Scope is intentionally small: solid fills with a linear premultiplied
//! color representation. Gradient or image paints would be added here as an
//! enum over paint sources once a consumer exists.

mod color;

pub use color::Color;

//! Cornerbadge engine crate.
//!
//! Geometry, paint, draw-list and text primitives shared by the widget layer,
//! plus a CPU rasterizer that turns a recorded draw list into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;

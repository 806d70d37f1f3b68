//! Paint model shared between UI and renderers.
//!
//! Colors are stored linear premultiplied. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

//! Coordinate and geometry types shared across the renderer and UI.
//!
//! Canonical CPU space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Positive rotation angles turn clockwise on screen, matching the +Y-down
//! convention.

mod path;
mod rect;
mod transform;
mod vec2;
mod viewport;

pub use path::{Path, PathEl};
pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;

pub mod corner_badge;

pub use corner_badge::{CornerBadge, TextOrigin};

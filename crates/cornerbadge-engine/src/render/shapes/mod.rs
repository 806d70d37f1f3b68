//! Per-shape rasterizers.

mod common;

pub mod path;
pub mod text;

//! Text measurement and layout.
//!
//! [`FontSystem`] owns fontdue fonts and implements [`TextMeasure`], the
//! capability the widget layer uses to measure and lay out text without
//! depending on a concrete font backend.

mod font_system;
mod layout;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use layout::{TextLayout, TextLine, TextMeasure, TextStyle};

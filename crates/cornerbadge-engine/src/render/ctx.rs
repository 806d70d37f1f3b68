use crate::coords::Viewport;
use crate::text::FontSystem;

use super::Pixmap;

/// Renderer-facing context (fonts + viewport).
pub struct RenderCtx<'a> {
    pub fonts: &'a FontSystem,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(fonts: &'a FontSystem, viewport: Viewport) -> Self {
        Self { fonts, viewport }
    }
}

/// Target for drawing.
pub struct RenderTarget<'a> {
    pub pixmap: &'a mut Pixmap,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self { pixmap }
    }
}

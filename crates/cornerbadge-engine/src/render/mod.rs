//! CPU rendering subsystem.
//!
//! Rasterizers consume `scene` draw streams and write premultiplied pixels
//! into a [`Pixmap`]. Each rasterizer owns its own caches.
//!
//! Convention:
//! - draw items carry local geometry plus the transform they were recorded under
//! - rasterizers iterate device pixels and map them back into local space, so
//!   rotated content has no holes

mod ctx;
mod pixmap;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use pixmap::Pixmap;

use crate::scene::{DrawCmd, DrawList};

use shapes::path::PathRasterizer;
use shapes::text::TextRasterizer;

/// Renders a whole draw list in paint order, dispatching per command type.
#[derive(Default)]
pub struct Renderer {
    paths: PathRasterizer,
    text: TextRasterizer,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &mut DrawList) {
        let mut drawn = 0usize;
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Path(cmd) => self.paths.fill(target, item, cmd),
                DrawCmd::Text(cmd) => self.text.draw(ctx, target, item, cmd),
            }
            drawn += 1;
        }
        log::trace!(
            "rendered {} draw items for a {}x{} viewport into {}x{}",
            drawn,
            ctx.viewport.width,
            ctx.viewport.height,
            target.pixmap.width(),
            target.pixmap.height(),
        );
    }
}

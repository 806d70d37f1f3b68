use cornerbadge_engine::coords::{Rect, Vec2};
use cornerbadge_engine::scene::DrawList;
use cornerbadge_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::redraw::RedrawRequests;
use crate::widget::Element;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem`, the `DrawList` populated by [`frame`](Self::frame),
/// the redraw counter widgets bump, and the viewport size of the previous
/// frame (used to emit [`UiEvent::SizeChanged`]).
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(include_bytes!("my_font.ttf"))?;
/// let badge = CornerBadge::new(BadgeConfig::new().text("New").font(font), &ui.layout_ctx());
/// let mut root = Element::from(badge);
///
/// let draw_list = ui.frame(&mut root, Vec2::new(96.0, 96.0));
/// renderer.render(&RenderCtx::new(&ui.font_system, viewport), &mut target, draw_list);
/// ```
pub struct UiScene {
    /// Public so the application can pass `&ui.font_system` to the engine's
    /// `Renderer`.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    ///
    /// Public so callers can split-borrow it alongside `font_system`.
    pub draw_list: DrawList,
    redraw: RedrawRequests,
    size: Vec2,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            draw_list: DrawList::new(),
            redraw: RedrawRequests::new(),
            size: Vec2::zero(),
        }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Context for building widgets and calling their setters between frames.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx::new(&self.font_system, Some(&self.redraw))
    }

    /// Returns `true` if a widget asked for a redraw since the last call.
    #[inline]
    pub fn take_redraw(&self) -> bool {
        self.redraw.take()
    }

    /// Viewport size of the most recent frame.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Lay out and paint `root` for this frame.
    ///
    /// If `viewport` differs from the previous frame's, the root receives
    /// [`UiEvent::SizeChanged`] first. The root is then measured against the
    /// viewport and painted into a rect of its measured size, anchored at the
    /// origin. The returned `&mut DrawList` is owned by the `UiScene` and
    /// valid until the next call to `frame`.
    #[must_use]
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // ── events + layout ───────────────────────────────────────────────
        let rect = {
            let ctx = LayoutCtx::new(&self.font_system, Some(&self.redraw));
            if viewport != self.size {
                log::debug!("viewport {}x{} -> {}x{}", self.size.x, self.size.y, viewport.x, viewport.y);
                let event = UiEvent::SizeChanged { size: viewport, old_size: self.size };
                root.on_event(&event, Rect::from_size(viewport), &ctx);
                self.size = viewport;
            }

            let measured = root.measure(Constraints::loose(viewport), &ctx);
            Rect::from_size(measured)
        };

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

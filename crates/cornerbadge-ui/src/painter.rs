use cornerbadge_engine::coords::{Path, Rect, Transform, Vec2};
use cornerbadge_engine::paint::Color;
use cornerbadge_engine::scene::{DrawList, ZIndex};
use cornerbadge_engine::text::{FontId, TextMeasure};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`].
///
/// Wraps the engine's `DrawList` with a canvas-style API: fills, text,
/// a clip stack and a transform stack. Every recorded item gets the next
/// z value so paint order equals call order.
///
/// [`Widget::paint`]: crate::widget::Widget::paint
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) fonts: &'a dyn TextMeasure,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a dyn TextMeasure) -> Self {
        Self { draw_list, fonts, z: 0 }
    }

    // ── layout context ────────────────────────────────────────────────────

    /// Returns a [`LayoutCtx`] borrowing this painter's text measurer.
    ///
    /// The context has no redraw scheduler: paint passes never request one.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.fonts, redraw: None }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Filled path under the current clip and transform.
    pub fn fill_path(&mut self, path: Path, color: Color) {
        let z = self.next_z();
        self.draw_list.push_fill_path(z, path, color);
    }

    /// One line of text with its line box top-left at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Concatenate `t` onto the current transform. Must be paired with
    /// [`pop_transform`](Self::pop_transform).
    pub fn push_transform(&mut self, t: Transform) {
        self.draw_list.push_transform(t);
    }

    /// Restore the transform saved by the matching push.
    pub fn pop_transform(&mut self) {
        self.draw_list.pop_transform();
    }

    /// Runs `f` with `t` pushed, then pops it.
    pub fn with_transform<R>(&mut self, t: Transform, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_transform(t);
        let out = f(self);
        self.pop_transform();
        out
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use cornerbadge_engine::scene::DrawCmd;
    use cornerbadge_engine::text::{TextLayout, TextStyle};

    use super::*;

    struct NoText;

    impl TextMeasure for NoText {
        fn measure_width(&self, _text: &str, _style: TextStyle) -> f32 {
            0.0
        }
        fn layout(&self, text: &str, _style: TextStyle, max_width: f32) -> TextLayout {
            TextLayout::new(text, max_width as i32, 0, Vec::new())
        }
    }

    fn triangle() -> Path {
        Path::polygon(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)])
    }

    #[test]
    fn items_take_increasing_z() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &NoText);
        p.fill_path(triangle(), Color::white());
        p.fill_path(triangle(), Color::white());
        let zs: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, [0, 1]);
    }

    #[test]
    fn with_transform_scopes_the_push() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &NoText);
        p.with_transform(Transform::translate(5.0, 7.0), |p| {
            p.fill_path(triangle(), Color::white());
        });
        p.fill_path(triangle(), Color::white());
        assert_eq!(list.transform_depth(), 0);
        assert_eq!(list.items()[0].transform, Transform::translate(5.0, 7.0));
        assert!(list.items()[1].transform.is_identity());
        assert!(matches!(list.items()[1].cmd, DrawCmd::Path(_)));
    }
}

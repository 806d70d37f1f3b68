use cornerbadge_engine::coords::{Path, Rect, Transform, Vec2};
use cornerbadge_engine::paint::Color;
use cornerbadge_engine::text::{FontId, TextLayout, TextMeasure, TextStyle};

use crate::config::{BadgeConfig, CornerGravity};
use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::resources::{ResourceError, Resources};
use crate::widget::Widget;

/// Offset of the text block inside the rotated frame, in whole pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextOrigin {
    pub left: i32,
    pub top: i32,
}

/// A triangular ribbon filling one corner of its viewport, with a short
/// status label rotated along the hypotenuse.
///
/// Geometry is derived state: the triangle is rebuilt on every size
/// notification, the text layout and its origin whenever the text or the
/// viewport dimensions change. [`paint`](Widget::paint) only reads it.
///
/// # Example
/// ```rust,ignore
/// let config = BadgeConfig::new()
///     .background(red)
///     .text_color(Color::white())
///     .gravity(CornerGravity::TopEnd)
///     .text("Sale")
///     .font(font);
/// let badge = CornerBadge::new(config, &ui.layout_ctx());
/// ```
pub struct CornerBadge {
    background: Color,
    text_color: Color,
    text_size: f32,
    text_all_caps: bool,
    gravity: CornerGravity,
    font: Option<FontId>,
    text_angle: i32,

    text: String,
    size: Vec2,
    triangle: Option<Path>,
    layout: Option<TextLayout>,
    origin: TextOrigin,
}

impl CornerBadge {
    /// Builds a badge and applies the configured text.
    ///
    /// The viewport is unknown until the first
    /// [`UiEvent::SizeChanged`], so no triangle exists yet.
    pub fn new(config: BadgeConfig, ctx: &LayoutCtx<'_>) -> Self {
        let mut badge = Self {
            background: config.background,
            text_color: config.text_color,
            text_size: config.text_size,
            text_all_caps: config.text_all_caps,
            gravity: config.gravity,
            font: config.font,
            text_angle: config.gravity.text_angle(),
            text: String::new(),
            size: Vec2::zero(),
            triangle: None,
            layout: None,
            origin: TextOrigin::default(),
        };
        badge.set_text(config.text.as_deref(), ctx);
        badge
    }

    // ── setters ───────────────────────────────────────────────────────────

    /// Replaces the label. `None` clears it.
    ///
    /// With all-caps enabled the text is uppercased before it is stored. If
    /// the result equals the current label nothing is recomputed and no
    /// redraw is requested.
    pub fn set_text(&mut self, text: Option<&str>, ctx: &LayoutCtx<'_>) {
        let text = text.unwrap_or("");
        let text = if self.text_all_caps { text.to_uppercase() } else { text.to_string() };
        if text == self.text {
            log::trace!("corner badge: text unchanged ({:?})", text);
            return;
        }
        self.text = text;
        self.update_content(ctx.fonts);
        ctx.request_redraw();
    }

    /// Looks `id` up in `resources` and forwards it to
    /// [`set_text`](Self::set_text). On error the badge is unchanged.
    pub fn set_text_res(&mut self, id: &str, resources: &Resources, ctx: &LayoutCtx<'_>) -> Result<(), ResourceError> {
        let text = resources.text(id)?;
        self.set_text(Some(text), ctx);
        Ok(())
    }

    /// Changes the text size used when drawing.
    ///
    /// The current layout and origin are kept; they pick up the new size on
    /// the next text or viewport change.
    pub fn set_status_text_size(&mut self, px: f32, ctx: &LayoutCtx<'_>) {
        self.text_size = px;
        ctx.request_redraw();
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn text_angle(&self) -> i32 {
        self.text_angle
    }

    #[inline]
    pub fn gravity(&self) -> CornerGravity {
        self.gravity
    }

    #[inline]
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn triangle(&self) -> Option<&Path> {
        self.triangle.as_ref()
    }

    #[inline]
    pub fn text_layout(&self) -> Option<&TextLayout> {
        self.layout.as_ref()
    }

    #[inline]
    pub fn text_origin(&self) -> TextOrigin {
        self.origin
    }

    // ── derived state ─────────────────────────────────────────────────────

    fn update_content(&mut self, fonts: &dyn TextMeasure) {
        let Some(font) = self.font else {
            log::trace!("corner badge: no font, skipping text layout");
            self.layout = None;
            self.origin = TextOrigin::default();
            return;
        };
        if self.text.is_empty() {
            self.layout = None;
            self.origin = TextOrigin::default();
            return;
        }

        let style = TextStyle::new(font, self.text_size);
        let width = fonts.measure_width(&self.text, style);
        let layout = fonts.layout(&self.text, style, width);
        self.origin = text_origin(self.gravity, &layout, self.size);
        log::debug!(
            "corner badge: laid out {:?} as {}x{} at {:?} for {}x{}",
            self.text,
            layout.width(),
            layout.height(),
            self.origin,
            self.size.x,
            self.size.y,
        );
        self.layout = Some(layout);
    }
}

/// The closed triangle covering `gravity`'s corner of a `size` viewport.
pub fn triangle_path(gravity: CornerGravity, size: Vec2) -> Path {
    let (w, h) = (size.x, size.y);
    let [a, b, c] = match gravity {
        CornerGravity::TopStart => [Vec2::new(0.0, h), Vec2::new(w, 0.0), Vec2::new(0.0, 0.0)],
        CornerGravity::TopEnd => [Vec2::new(0.0, 0.0), Vec2::new(w, h), Vec2::new(w, 0.0)],
        CornerGravity::BottomStart => [Vec2::new(0.0, 0.0), Vec2::new(w, h), Vec2::new(0.0, h)],
        CornerGravity::BottomEnd => [Vec2::new(0.0, h), Vec2::new(w, 0.0), Vec2::new(w, h)],
    };
    let mut path = Path::new();
    path.move_to(a).line_to(b).line_to(c).line_to(a).close();
    path
}

/// Where the text block goes after the frame is rotated by the gravity's
/// text angle.
///
/// Layout metrics are whole pixels and divided with integer division; values
/// involving the diagonal are truncated toward zero.
pub fn text_origin(gravity: CornerGravity, layout: &TextLayout, size: Vec2) -> TextOrigin {
    let (tw, th) = (layout.width(), layout.height());
    let (w, h) = (size.x as i32, size.y as i32);
    let (w64, h64) = (i64::from(w), i64::from(h));
    let diagonal = ((w64 * w64 + h64 * h64) as f64).sqrt();
    match gravity {
        CornerGravity::BottomStart => TextOrigin {
            left: ((diagonal - f64::from(tw)) / 2.0) as i32,
            top: th / 4,
        },
        CornerGravity::TopEnd => TextOrigin {
            left: ((diagonal - f64::from(tw)) / 2.0) as i32,
            top: -(th + th / 4),
        },
        CornerGravity::BottomEnd => TextOrigin {
            left: -(tw / 2),
            top: (diagonal / 2.0 + f64::from(th / 4)) as i32,
        },
        CornerGravity::TopStart => TextOrigin {
            left: -(tw / 2),
            top: (h - th) / 2,
        },
    }
}

impl Widget for CornerBadge {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx<'_>) -> Vec2 {
        constraints.constrain(constraints.finite_max_or(self.size))
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        painter.push_clip(rect);
        painter.with_transform(Transform::translate(rect.origin.x, rect.origin.y), |p| {
            if let Some(triangle) = &self.triangle {
                p.fill_path(triangle.clone(), self.background);
            }

            let (Some(layout), Some(font)) = (&self.layout, self.font) else {
                return;
            };
            p.with_transform(Transform::rotate_deg(self.text_angle as f32), |p| {
                let origin = Transform::translate(self.origin.left as f32, self.origin.top as f32);
                p.with_transform(origin, |p| {
                    for line in layout.lines() {
                        let x = (layout.width() as f32 - line.width) / 2.0;
                        p.text(layout.line_text(line), font, self.text_size, self.text_color, Vec2::new(x, line.top));
                    }
                });
            });
        });
        painter.pop_clip();
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        match *event {
            UiEvent::SizeChanged { size, old_size } => {
                self.size = size;
                self.triangle = Some(triangle_path(self.gravity, size));
                if size != old_size {
                    self.update_content(ctx.fonts);
                }
                EventResult::Consumed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use cornerbadge_engine::scene::{DrawCmd, DrawList};
    use cornerbadge_engine::text::TextLine;

    use super::*;
    use crate::redraw::RedrawRequests;

    /// Fixed-advance text: every char is `0.6 × size` wide, one line of
    /// height `size + 2`. Counts layout calls.
    #[derive(Default)]
    struct FakeText {
        layouts: Cell<u32>,
    }

    impl TextMeasure for FakeText {
        fn measure_width(&self, text: &str, style: TextStyle) -> f32 {
            (text.chars().count() * 6) as f32 * style.size / 10.0
        }

        fn layout(&self, text: &str, style: TextStyle, max_width: f32) -> TextLayout {
            self.layouts.set(self.layouts.get() + 1);
            let line = TextLine { range: 0..text.len(), width: self.measure_width(text, style), top: 0.0 };
            TextLayout::new(text, max_width as i32, style.size as i32 + 2, vec![line])
        }
    }

    fn font() -> FontId {
        FontId::from_index(0)
    }

    fn config(gravity: CornerGravity) -> BadgeConfig {
        BadgeConfig::new()
            .background(Color::from_srgb_u8(200, 0, 0, 255))
            .text_color(Color::white())
            .gravity(gravity)
            .font(font())
    }

    fn resize(badge: &mut CornerBadge, ctx: &LayoutCtx<'_>, from: Vec2, to: Vec2) {
        let event = UiEvent::SizeChanged { size: to, old_size: from };
        assert!(badge.on_event(&event, Rect::from_size(to), ctx).is_consumed());
    }

    fn sized(config: BadgeConfig, ctx: &LayoutCtx<'_>, w: f32, h: f32) -> CornerBadge {
        let mut badge = CornerBadge::new(config, ctx);
        resize(&mut badge, ctx, Vec2::zero(), Vec2::new(w, h));
        badge
    }

    fn paint(badge: &CornerBadge, fonts: &FakeText, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, fonts);
            badge.paint(&mut painter, rect);
        }
        list
    }

    // ── triangle ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_vertices_per_corner() {
        let size = Vec2::new(100.0, 80.0);
        let v = |x, y| Vec2::new(x, y);
        let cases = [
            (CornerGravity::TopStart, [v(0.0, 80.0), v(100.0, 0.0), v(0.0, 0.0)]),
            (CornerGravity::TopEnd, [v(0.0, 0.0), v(100.0, 80.0), v(100.0, 0.0)]),
            (CornerGravity::BottomStart, [v(0.0, 0.0), v(100.0, 80.0), v(0.0, 80.0)]),
            (CornerGravity::BottomEnd, [v(0.0, 80.0), v(100.0, 0.0), v(100.0, 80.0)]),
        ];
        for (gravity, expected) in cases {
            assert_eq!(triangle_path(gravity, size).vertices(), expected, "{gravity}");
        }
    }

    #[test]
    fn triangle_is_closed_with_three_corner_vertices() {
        for gravity in CornerGravity::ALL {
            for (w, h) in [(1.0, 1.0), (100.0, 100.0), (37.0, 211.0)] {
                let path = triangle_path(gravity, Vec2::new(w, h));
                assert!(path.is_closed());
                let vertices = path.vertices();
                assert_eq!(vertices.len(), 3);
                for p in vertices {
                    assert!((p.x == 0.0 || p.x == w) && (p.y == 0.0 || p.y == h));
                }
            }
        }
    }

    #[test]
    fn no_triangle_before_first_size() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let badge = CornerBadge::new(config(CornerGravity::TopStart), &ctx);
        assert!(badge.triangle().is_none());
        assert!(paint(&badge, &fonts, Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }

    // ── text origin ───────────────────────────────────────────────────────

    #[test]
    fn text_origin_per_corner() {
        let layout = TextLayout::new("x", 30, 13, Vec::new());
        let size = Vec2::new(100.0, 60.0);
        // diagonal = sqrt(13600) ≈ 116.62
        let origin = |g| text_origin(g, &layout, size);
        assert_eq!(origin(CornerGravity::BottomStart), TextOrigin { left: 43, top: 3 });
        assert_eq!(origin(CornerGravity::TopEnd), TextOrigin { left: 43, top: -16 });
        assert_eq!(origin(CornerGravity::BottomEnd), TextOrigin { left: -15, top: 61 });
        assert_eq!(origin(CornerGravity::TopStart), TextOrigin { left: -15, top: 23 });
    }

    #[test]
    fn text_origin_on_very_wide_viewport() {
        let layout = TextLayout::new("x", 30, 13, Vec::new());
        let size = Vec2::new(50_000.0, 10.0);
        // diagonal ≈ 50000.001
        assert_eq!(text_origin(CornerGravity::BottomStart, &layout, size), TextOrigin { left: 24985, top: 3 });
        assert_eq!(text_origin(CornerGravity::BottomEnd, &layout, size), TextOrigin { left: -15, top: 25003 });
    }

    #[test]
    fn odd_widths_truncate_toward_zero() {
        let layout = TextLayout::new("x", 31, 13, Vec::new());
        let origin = text_origin(CornerGravity::TopStart, &layout, Vec2::new(10.0, 10.0));
        assert_eq!(origin, TextOrigin { left: -15, top: -1 });
    }

    // ── set_text ──────────────────────────────────────────────────────────

    #[test]
    fn top_start_square_with_label() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let badge = sized(config(CornerGravity::TopStart).text("NEW"), &ctx, 100.0, 100.0);

        assert_eq!(
            badge.triangle().unwrap().vertices(),
            [Vec2::new(0.0, 100.0), Vec2::new(100.0, 0.0), Vec2::new(0.0, 0.0)]
        );
        assert_eq!(badge.text_angle(), -45);
        let layout = badge.text_layout().unwrap();
        assert_eq!((layout.width(), layout.height()), (18, 12));
        assert_eq!(badge.text_origin(), TextOrigin { left: -layout.width() / 2, top: (100 - layout.height()) / 2 });
        assert_eq!(badge.text_origin(), TextOrigin { left: -9, top: 44 });
    }

    #[test]
    fn identical_text_lays_out_once() {
        let fonts = FakeText::default();
        let redraw = RedrawRequests::new();
        let ctx = LayoutCtx::new(&fonts, Some(&redraw));
        let mut badge = sized(config(CornerGravity::TopEnd), &ctx, 64.0, 64.0);
        let before = fonts.layouts.get();

        badge.set_text(Some("Sale"), &ctx);
        badge.set_text(Some("Sale"), &ctx);

        assert_eq!(fonts.layouts.get(), before + 1);
        assert_eq!(redraw.pending(), 1);
    }

    #[test]
    fn all_caps_uppercases_before_storing() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let mut badge = CornerBadge::new(config(CornerGravity::TopStart).text_all_caps(true), &ctx);

        badge.set_text(Some("abc"), &ctx);
        assert_eq!(badge.text(), "ABC");

        let layouts = fonts.layouts.get();
        badge.set_text(Some("ABC"), &ctx);
        badge.set_text(Some("abc"), &ctx);
        assert_eq!(fonts.layouts.get(), layouts);
    }

    #[test]
    fn empty_text_draws_only_the_triangle() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let mut badge = sized(config(CornerGravity::BottomEnd).text("Hot"), &ctx, 50.0, 50.0);
        assert!(badge.text_layout().is_some());

        badge.set_text(None, &ctx);
        assert_eq!(badge.text(), "");
        assert!(badge.text_layout().is_none());

        let list = paint(&badge, &fonts, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(list.len(), 1);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Path(_)));
    }

    #[test]
    fn unset_text_never_lays_out() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let badge = sized(config(CornerGravity::TopStart), &ctx, 40.0, 40.0);
        assert!(badge.text_layout().is_none());
        assert_eq!(fonts.layouts.get(), 0);
        assert!(badge.triangle().is_some());
    }

    #[test]
    fn no_font_means_no_text() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let mut config = config(CornerGravity::TopStart).text("NEW");
        config.font = None;
        let badge = sized(config, &ctx, 40.0, 40.0);
        assert_eq!(badge.text(), "NEW");
        assert!(badge.text_layout().is_none());
        assert_eq!(badge.text_origin(), TextOrigin::default());
        assert_eq!(fonts.layouts.get(), 0);
    }

    // ── set_text_res ──────────────────────────────────────────────────────

    #[test]
    fn text_from_resources() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let resources = Resources::new().with_string("badge_new", "New");
        let mut badge = sized(config(CornerGravity::TopStart), &ctx, 40.0, 40.0);

        badge.set_text_res("badge_new", &resources, &ctx).unwrap();
        assert_eq!(badge.text(), "New");

        let err = badge.set_text_res("missing", &resources, &ctx).unwrap_err();
        assert_eq!(err, ResourceError::NotFound("missing".into()));
        assert_eq!(badge.text(), "New");
    }

    // ── set_status_text_size ──────────────────────────────────────────────

    #[test]
    fn text_size_change_redraws_without_relayout() {
        let fonts = FakeText::default();
        let redraw = RedrawRequests::new();
        let ctx = LayoutCtx::new(&fonts, Some(&redraw));
        let mut badge = sized(config(CornerGravity::TopStart).text("NEW"), &ctx, 100.0, 100.0);
        redraw.take();
        let layouts = fonts.layouts.get();
        let layout = badge.text_layout().cloned();

        badge.set_status_text_size(20.0, &ctx);

        assert!(redraw.take());
        assert_eq!(fonts.layouts.get(), layouts);
        assert_eq!(badge.text_layout().cloned(), layout);
        assert_eq!(badge.text_size(), 20.0);

        // The next resize picks the new size up.
        resize(&mut badge, &ctx, Vec2::new(100.0, 100.0), Vec2::new(120.0, 100.0));
        assert_eq!(badge.text_layout().unwrap().width(), 36);
    }

    // ── size changes ──────────────────────────────────────────────────────

    #[test]
    fn resize_rebuilds_triangle_and_text() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let mut badge = sized(config(CornerGravity::BottomStart).text("NEW"), &ctx, 100.0, 100.0);
        let layouts = fonts.layouts.get();
        // diagonal ≈ 141.42, (141.42 - 18) / 2 ≈ 61.7
        assert_eq!(badge.text_origin(), TextOrigin { left: 61, top: 3 });

        resize(&mut badge, &ctx, Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));

        assert_eq!(
            badge.triangle().unwrap().vertices(),
            [Vec2::new(0.0, 0.0), Vec2::new(200.0, 100.0), Vec2::new(0.0, 100.0)]
        );
        assert_eq!(fonts.layouts.get(), layouts + 1);
        // diagonal ≈ 223.61, (223.61 - 18) / 2 ≈ 102.8
        assert_eq!(badge.text_origin(), TextOrigin { left: 102, top: 3 });
    }

    #[test]
    fn same_size_notification_rebuilds_only_the_triangle() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let mut badge = sized(config(CornerGravity::TopEnd).text("NEW"), &ctx, 80.0, 80.0);
        let layouts = fonts.layouts.get();

        resize(&mut badge, &ctx, Vec2::new(80.0, 80.0), Vec2::new(80.0, 80.0));

        assert_eq!(fonts.layouts.get(), layouts);
        assert!(badge.triangle().is_some());
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_rotates_then_offsets_text_and_restores_state() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let badge = sized(config(CornerGravity::TopStart).text("NEW"), &ctx, 100.0, 100.0);
        let rect = Rect::new(10.0, 20.0, 100.0, 100.0);

        let list = paint(&badge, &fonts, rect);

        assert_eq!(list.transform_depth(), 0);
        assert_eq!(list.clip_depth(), 0);
        assert_eq!(list.len(), 2);

        let fill = &list.items()[0];
        assert_eq!(fill.transform, Transform::translate(10.0, 20.0));
        assert_eq!(fill.clip_rect, Some(rect));
        match &fill.cmd {
            DrawCmd::Path(cmd) => assert_eq!(cmd.color, Color::from_srgb_u8(200, 0, 0, 255)),
            other => panic!("expected a path, got {other:?}"),
        }

        let text = &list.items()[1];
        let expected = Transform::translate(10.0, 20.0)
            .then(Transform::rotate_deg(-45.0))
            .then(Transform::translate(-9.0, 44.0));
        assert_eq!(text.transform, expected);
        match &text.cmd {
            DrawCmd::Text(cmd) => {
                assert_eq!(cmd.text, "NEW");
                assert_eq!(cmd.size, 10.0);
                assert_eq!(cmd.color, Color::white());
                assert_eq!(cmd.origin, Vec2::new(0.0, 0.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn paint_is_repeatable() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let badge = sized(config(CornerGravity::BottomEnd).text("Hot"), &ctx, 60.0, 60.0);
        let rect = Rect::new(0.0, 0.0, 60.0, 60.0);
        assert_eq!(paint(&badge, &fonts, rect).items(), paint(&badge, &fonts, rect).items());
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn measure_fills_the_available_space() {
        let fonts = FakeText::default();
        let ctx = LayoutCtx::new(&fonts, None);
        let badge = sized(config(CornerGravity::TopStart), &ctx, 30.0, 40.0);
        assert_eq!(badge.measure(Constraints::loose(Vec2::new(90.0, 70.0)), &ctx), Vec2::new(90.0, 70.0));
        assert_eq!(badge.measure(Constraints::unbounded(), &ctx), Vec2::new(30.0, 40.0));
    }
}

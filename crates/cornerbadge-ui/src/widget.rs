use cornerbadge_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The contract between a drawable component and its host.
///
/// Widgets are retained: they keep derived geometry between frames, rebuild
/// it from [`on_event`](Self::on_event) notifications, and only read it in
/// [`paint`](Self::paint).
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: calling `measure` twice with the same arguments
    /// returns the same result.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx<'_>) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// Takes `&self`: painting never changes widget state.
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);

    /// Handle a host notification. Return [`EventResult::Consumed`] to stop
    /// propagation.
    ///
    /// The default implementation ignores every event.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the unit the host owns.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx<'_>) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

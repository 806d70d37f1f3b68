use cornerbadge_engine::coords::Vec2;
use cornerbadge_engine::text::TextMeasure;

use crate::redraw::RedrawRequests;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from the host during measure.
///
/// A widget may return any size in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: the widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// `max` where it is finite, `fallback` elsewhere.
    #[inline]
    pub fn finite_max_or(self, fallback: Vec2) -> Vec2 {
        Vec2::new(
            if self.max.x.is_finite() { self.max.x } else { fallback.x },
            if self.max.y.is_finite() { self.max.y } else { fallback.y },
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Host services made available to [`Widget::measure`], [`Widget::on_event`]
/// and widget setters.
///
/// Passed down by the host so widgets can measure text and schedule redraws
/// without owning those resources.
///
/// [`Widget::measure`]: crate::widget::Widget::measure
/// [`Widget::on_event`]: crate::widget::Widget::on_event
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a dyn TextMeasure,
    /// Redraw scheduler. `None` in contexts that never redraw (one-shot
    /// renders, tests that do not care).
    pub redraw: Option<&'a RedrawRequests>,
}

impl<'a> LayoutCtx<'a> {
    #[inline]
    pub fn new(fonts: &'a dyn TextMeasure, redraw: Option<&'a RedrawRequests>) -> Self {
        Self { fonts, redraw }
    }

    /// Ask the host for a future draw pass.
    #[inline]
    pub fn request_redraw(&self) {
        if let Some(redraw) = self.redraw {
            redraw.request();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constraints::constrain ────────────────────────────────────────────

    #[test]
    fn constrain_clamps_into_range() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 300.0)), Vec2::new(10.0, 100.0));
        assert_eq!(c.constrain(Vec2::new(50.0, 60.0)), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn tight_forces_exact_size() {
        let size = Vec2::new(48.0, 32.0);
        assert_eq!(Constraints::tight(size).constrain(Vec2::zero()), size);
    }

    // ── Constraints::finite_max_or ────────────────────────────────────────

    #[test]
    fn finite_max_falls_back_per_axis() {
        let c = Constraints::loose(Vec2::new(80.0, f32::INFINITY));
        assert_eq!(c.finite_max_or(Vec2::new(1.0, 2.0)), Vec2::new(80.0, 2.0));
        assert_eq!(Constraints::unbounded().finite_max_or(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
    }
}

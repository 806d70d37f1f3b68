use crate::coords::{Rect, Transform, Vec2};
use crate::render::Pixmap;

/// Supersampling grid edge for anti-aliased path coverage (N × N samples).
pub(crate) const SUBSAMPLES: u32 = 4;

/// Half-open range of device pixels `[x0, x1) × [y0, y1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct PixelSpan {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelSpan {
    pub(crate) fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (self.y0..self.y1).flat_map(move |y| (self.x0..self.x1).map(move |x| (x, y)))
    }
}

/// Device pixels touched by `local` once mapped through `transform`,
/// limited to the pixmap and the optional device-space clip.
pub(crate) fn device_span(
    transform: &Transform,
    local: Rect,
    clip: Option<Rect>,
    pixmap: &Pixmap,
) -> Option<PixelSpan> {
    let max = local.max();
    let corners = [
        local.origin,
        Vec2::new(max.x, local.origin.y),
        max,
        Vec2::new(local.origin.x, max.y),
    ]
    .map(|p| transform.apply(p));

    let mut bounds = Rect::bounding(&corners)?;
    // Grow by one pixel so anti-aliased edges are not cut off.
    bounds = Rect::new(bounds.origin.x - 1.0, bounds.origin.y - 1.0, bounds.size.x + 2.0, bounds.size.y + 2.0);

    let surface = Rect::new(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32);
    let mut visible = bounds.intersect(surface)?;
    if let Some(clip) = clip {
        visible = visible.intersect(clip)?;
    }

    let max = visible.max();
    let span = PixelSpan {
        x0: visible.origin.x.floor().max(0.0) as u32,
        y0: visible.origin.y.floor().max(0.0) as u32,
        x1: (max.x.ceil() as u32).min(pixmap.width()),
        y1: (max.y.ceil() as u32).min(pixmap.height()),
    };
    (span.x0 < span.x1 && span.y0 < span.y1).then_some(span)
}

/// Center of device pixel (x, y).
#[inline]
pub(crate) fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

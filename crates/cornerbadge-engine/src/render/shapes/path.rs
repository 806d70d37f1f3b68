use crate::coords::{Path, Vec2};
use crate::render::RenderTarget;
use crate::scene::{DrawItem, PathCmd};

use super::common::{device_span, pixel_center, SUBSAMPLES};

/// Rasterizer for `DrawCmd::Path`.
///
/// Fills with the non-zero rule and `SUBSAMPLES²` coverage samples per pixel.
/// Each device sample is mapped back into the path's local frame, so the same
/// code handles rotated and translated paths.
#[derive(Debug, Default)]
pub struct PathRasterizer {
    // reused per command
    segments: Vec<(Vec2, Vec2)>,
}

impl PathRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, target: &mut RenderTarget<'_>, item: &DrawItem, cmd: &PathCmd) {
        let Some(bounds) = cmd.path.bounds() else { return };
        let Some(inverse) = item.transform.inverse() else {
            log::warn!("skipping path with a singular transform");
            return;
        };
        let Some(span) = device_span(&item.transform, bounds, item.clip_rect, target.pixmap) else {
            return;
        };

        self.segments.clear();
        self.segments.extend(cmd.path.segments());

        let step = 1.0 / SUBSAMPLES as f32;
        let total = (SUBSAMPLES * SUBSAMPLES) as f32;

        for (x, y) in span.pixels() {
            let corner = pixel_center(x, y) - Vec2::new(0.5, 0.5);
            let mut hits = 0u32;
            for sy in 0..SUBSAMPLES {
                for sx in 0..SUBSAMPLES {
                    let device = corner + Vec2::new((sx as f32 + 0.5) * step, (sy as f32 + 0.5) * step);
                    if Path::winding_number(&self.segments, inverse.apply(device)) != 0 {
                        hits += 1;
                    }
                }
            }
            if hits > 0 {
                target.pixmap.blend(x, y, cmd.color.with_coverage(hits as f32 / total));
            }
        }
    }
}

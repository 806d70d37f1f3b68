use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::coords::{Rect, Transform, Vec2};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawItem, TextCmd};

use super::common::{device_span, pixel_center};

/// Coverage bitmap of one rasterized glyph.
struct CachedGlyph {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

impl CachedGlyph {
    /// Nearest-neighbour coverage lookup in glyph-local pixels.
    #[inline]
    fn sample(&self, p: Vec2) -> u8 {
        if p.x < 0.0 || p.y < 0.0 {
            return 0;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[y * self.width + x]
    }
}

/// Rasterizer for `DrawCmd::Text`.
///
/// Glyphs are rasterized on first use via fontdue and cached for the
/// rasterizer's lifetime. The cache key is `GlyphRasterConfig`, which encodes
/// font identity, glyph index, and pixel size.
pub struct TextRasterizer {
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    // reusable fontdue layout
    layout: Layout<()>,
}

impl Default for TextRasterizer {
    fn default() -> Self {
        Self {
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, item: &DrawItem, cmd: &TextCmd) {
        let Some(font) = ctx.fonts.get(cmd.font) else {
            log::warn!("text command references unknown font {:?}", cmd.font);
            return;
        };
        let Some(inverse) = item.transform.inverse() else {
            log::warn!("skipping text with a singular transform");
            return;
        };

        self.layout.reset(&LayoutSettings {
            x: cmd.origin.x,
            y: cmd.origin.y,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

        for g in self.layout.glyphs() {
            if g.width == 0 || g.height == 0 {
                continue;
            }
            let glyph = self.glyph_cache.entry(g.key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(g.key);
                CachedGlyph { width: metrics.width, height: metrics.height, coverage }
            });

            blit(target, item, &inverse, glyph, Vec2::new(g.x, g.y), cmd.color);
        }
    }
}

/// Blends `glyph`, placed at `glyph_origin` in the item's local frame, into
/// the target through the item's transform and clip.
fn blit(
    target: &mut RenderTarget<'_>,
    item: &DrawItem,
    inverse: &Transform,
    glyph: &CachedGlyph,
    glyph_origin: Vec2,
    color: Color,
) {
    let local = Rect::from_origin_size(glyph_origin, Vec2::new(glyph.width as f32, glyph.height as f32));
    let Some(span) = device_span(&item.transform, local, item.clip_rect, target.pixmap) else {
        return;
    };

    for (x, y) in span.pixels() {
        let p = inverse.apply(pixel_center(x, y)) - glyph_origin;
        let a = glyph.sample(p);
        if a > 0 {
            target.pixmap.blend(x, y, color.with_coverage(a as f32 / 255.0));
        }
    }
}

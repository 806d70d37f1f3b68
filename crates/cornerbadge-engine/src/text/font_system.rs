use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings};

use crate::coords::Vec2;

use super::{TextLayout, TextLine, TextMeasure, TextStyle};

/// Line height used when a font is missing or the text is empty.
const FALLBACK_LINE_HEIGHT: f32 = 1.2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Handle for the `index`-th loaded font.
    ///
    /// Handles built this way are only meaningful for the `FontSystem` that
    /// loaded the font; unknown handles measure as empty text.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the host and
/// lent to widgets (through the [`TextMeasure`] trait) and to the rasterizer.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} bytes)", id, bytes.len());
        Ok(id)
    }

    /// Returns the underlying `fontdue::Font`, if `id` is valid.
    pub fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Width is the largest pen position after a glyph (`x - xmin + advance`)
    /// rather than the bitmap right edge, so feeding the result back as a wrap
    /// width never makes fontdue wrap the same text.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * FALLBACK_LINE_HEIGHT);
        };

        let layout = self.run_layout(font, text, size, max_width);
        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * FALLBACK_LINE_HEIGHT);
        }

        let w = glyphs
            .iter()
            .map(|g| pen_extent(font, g, size))
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }

    fn run_layout(&self, font: &fontdue::Font, text: &str, size: f32, max_width: Option<f32>) -> Layout<()> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &fontdue::layout::TextStyle::new(text, size, 0));
        layout
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontSystem {
    fn measure_width(&self, text: &str, style: TextStyle) -> f32 {
        self.measure_text(text, style.font, style.size, None).x
    }

    fn layout(&self, text: &str, style: TextStyle, max_width: f32) -> TextLayout {
        let block_width = max_width as i32;
        let Some(font) = self.get(style.font) else {
            let h = (style.size * FALLBACK_LINE_HEIGHT).ceil() as i32;
            return TextLayout::new(text, block_width, h, Vec::new());
        };

        let layout = self.run_layout(font, text, style.size, Some(max_width));
        let glyphs = layout.glyphs();

        let mut lines = Vec::new();
        if let (Some(positions), Some(last_glyph)) = (layout.lines(), glyphs.len().checked_sub(1)) {
            for pos in positions {
                let first = pos.glyph_start.min(last_glyph);
                let last = pos.glyph_end.min(last_glyph);
                if first > last {
                    continue;
                }
                let run = &glyphs[first..=last];
                let start = run[0].byte_offset;
                let end = run[run.len() - 1].byte_offset + run[run.len() - 1].parent.len_utf8();
                let width = run
                    .iter()
                    .map(|g| pen_extent(font, g, style.size))
                    .fold(0.0f32, f32::max);
                lines.push(TextLine { range: start..end, width, top: pos.baseline_y - pos.max_ascent });
            }
        }

        let height = if lines.is_empty() {
            style.size * FALLBACK_LINE_HEIGHT
        } else {
            layout.height()
        };
        TextLayout::new(text, block_width, height.ceil() as i32, lines)
    }
}

/// Pen position after `g`, relative to the start of its line.
fn pen_extent(font: &fontdue::Font, g: &GlyphPosition, size: f32) -> f32 {
    let m = font.metrics_indexed(g.key.glyph_index, size);
    (g.x - m.xmin as f32 + m.advance_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_font_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        let style = TextStyle::new(FontId::from_index(3), 10.0);
        assert_eq!(fonts.measure_width("NEW", style), 0.0);

        let layout = fonts.layout("NEW", style, 0.0);
        assert_eq!(layout.width(), 0);
        assert_eq!(layout.height(), (10.0 * FALLBACK_LINE_HEIGHT).ceil() as i32);
        assert!(layout.lines().is_empty());
    }
}

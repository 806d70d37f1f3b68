use core::ops::Range;

use super::FontId;

/// Font + size pair used to measure and lay out a text run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    #[inline]
    pub const fn new(font: FontId, size: f32) -> Self {
        Self { font, size }
    }
}

/// One laid-out line of a [`TextLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Byte range of the line inside the layout's text.
    pub range: Range<usize>,
    /// Advance width of the line in pixels.
    pub width: f32,
    /// Top of the line box relative to the top of the block.
    pub top: f32,
}

/// A measured, wrapped block of text ready to be drawn.
///
/// `width` and `height` are whole pixels: `width` is the wrap width the
/// block was built with (truncated), `height` is the block height rounded up.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    text: String,
    width: i32,
    height: i32,
    lines: Vec<TextLine>,
}

impl TextLayout {
    pub fn new(text: impl Into<String>, width: i32, height: i32, lines: Vec<TextLine>) -> Self {
        Self { text: text.into(), width, height, lines }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Text of `line`, or `""` if its range is out of bounds.
    pub fn line_text(&self, line: &TextLine) -> &str {
        self.text.get(line.range.clone()).unwrap_or("")
    }
}

/// Text measurement capability provided by the host.
pub trait TextMeasure {
    /// Advance width of `text` on a single line, in pixels.
    fn measure_width(&self, text: &str, style: TextStyle) -> f32;

    /// Lays `text` out with lines wrapped at `max_width` pixels.
    fn layout(&self, text: &str, style: TextStyle, max_width: f32) -> TextLayout;
}

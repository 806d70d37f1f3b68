//! Badge configuration and its construction from style attributes.

use std::fmt;

use cornerbadge_engine::paint::Color;
use cornerbadge_engine::text::FontId;
use cornerbadge_style::{Attr, BadgeStyle, Pos, Value};

use crate::resources::Resources;

/// Text size used when a style does not set `status_text_size`.
pub const DEFAULT_TEXT_SIZE: f32 = 10.0;

// ── CornerGravity ─────────────────────────────────────────────────────────

/// The viewport corner the ribbon is anchored to.
///
/// Start/end are resolved as left/right.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CornerGravity {
    #[default]
    TopStart,
    TopEnd,
    BottomStart,
    BottomEnd,
}

impl CornerGravity {
    pub const ALL: [CornerGravity; 4] = [
        CornerGravity::TopStart,
        CornerGravity::TopEnd,
        CornerGravity::BottomStart,
        CornerGravity::BottomEnd,
    ];

    /// Rotation applied to the text, in degrees. Positive turns clockwise.
    #[inline]
    pub fn text_angle(self) -> i32 {
        match self {
            CornerGravity::TopEnd | CornerGravity::BottomStart => 45,
            CornerGravity::TopStart | CornerGravity::BottomEnd => -45,
        }
    }

    /// Parses a style value. Accepts both the start/end and left/right names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top_start" | "top_left" => Some(CornerGravity::TopStart),
            "top_end" | "top_right" => Some(CornerGravity::TopEnd),
            "bottom_start" | "bottom_left" => Some(CornerGravity::BottomStart),
            "bottom_end" | "bottom_right" => Some(CornerGravity::BottomEnd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CornerGravity::TopStart => "top_start",
            CornerGravity::TopEnd => "top_end",
            CornerGravity::BottomStart => "bottom_start",
            CornerGravity::BottomEnd => "bottom_end",
        }
    }
}

impl fmt::Display for CornerGravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── ConfigError ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigErrorKind {
    WrongType { attr: String, expected: &'static str, found: &'static str },
    UnknownValue { attr: String, value: String },
    UnknownAttribute(String),
    UnresolvedReference(String),
}

/// A typed lookup failure while turning a [`BadgeStyle`] into a
/// [`BadgeConfig`]. Carries the 1-based position of the offending value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub line: usize,
    pub col: usize,
}

impl ConfigError {
    fn at(pos: Pos, kind: ConfigErrorKind) -> Self {
        Self { kind, line: pos.line, col: pos.col }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "badge config error at {}:{}: ", self.line, self.col)?;
        match &self.kind {
            ConfigErrorKind::WrongType { attr, expected, found } => {
                write!(f, "`{}` expects a {}, got a {}", attr, expected, found)
            }
            ConfigErrorKind::UnknownValue { attr, value } => {
                write!(f, "unknown value `{}` for `{}`", value, attr)
            }
            ConfigErrorKind::UnknownAttribute(attr) => write!(f, "unknown attribute `{}`", attr),
            ConfigErrorKind::UnresolvedReference(r) => write!(f, "unresolved reference `{}`", r),
        }
    }
}

impl std::error::Error for ConfigError {}

// ── BadgeConfig ───────────────────────────────────────────────────────────

/// Everything a [`CornerBadge`](crate::widgets::CornerBadge) is built from.
///
/// # Example
/// ```rust,ignore
/// BadgeConfig::new()
///     .background(Color::from_srgb_u8(0xe5, 0x39, 0x35, 0xff))
///     .text_color(Color::white())
///     .gravity(CornerGravity::TopEnd)
///     .text("Sale")
///     .font(font)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeConfig {
    pub background: Color,
    pub text_color: Color,
    /// Text size in pixels.
    pub text_size: f32,
    pub text_all_caps: bool,
    pub gravity: CornerGravity,
    pub text: Option<String>,
    /// Font used to measure and draw the text. Without one the badge draws
    /// only its triangle.
    pub font: Option<FontId>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            background: Color::transparent(),
            text_color: Color::transparent(),
            text_size: DEFAULT_TEXT_SIZE,
            text_all_caps: false,
            gravity: CornerGravity::default(),
            text: None,
            font: None,
        }
    }
}

impl BadgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, v: Color) -> Self { self.background = v; self }
    pub fn text_color(mut self, v: Color) -> Self { self.text_color = v; self }
    pub fn text_size(mut self, v: f32) -> Self { self.text_size = v; self }
    pub fn text_all_caps(mut self, v: bool) -> Self { self.text_all_caps = v; self }
    pub fn gravity(mut self, v: CornerGravity) -> Self { self.gravity = v; self }
    pub fn text(mut self, v: impl Into<String>) -> Self { self.text = Some(v.into()); self }
    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }

    /// Reads a `badge` block. Unset attributes keep their defaults; string
    /// references resolve through `resources`.
    pub fn from_style(style: &BadgeStyle, resources: &Resources) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for attr in &style.attrs {
            match attr.key.as_str() {
                "bg_color" => config.background = color(attr)?,
                "status_text_color" => config.text_color = color(attr)?,
                "status_text_size" => config.text_size = dimension_px(attr)? as f32,
                "status_text_all_caps" => config.text_all_caps = boolean(attr)?,
                "corner_gravity" => config.gravity = gravity(attr)?,
                "status_text" => config.text = Some(text(attr, resources)?),
                other => {
                    return Err(ConfigError::at(attr.pos, ConfigErrorKind::UnknownAttribute(other.to_string())));
                }
            }
        }
        log::debug!("badge `{}`: {:?}", style.name, config);
        Ok(config)
    }
}

// ── typed lookups ─────────────────────────────────────────────────────────

fn wrong_type(attr: &Attr, expected: &'static str) -> ConfigError {
    ConfigError::at(
        attr.pos,
        ConfigErrorKind::WrongType { attr: attr.key.clone(), expected, found: attr.value.kind_name() },
    )
}

fn color(attr: &Attr) -> Result<Color, ConfigError> {
    match attr.value {
        Value::Color([r, g, b, a]) => Ok(Color::from_srgb_u8(r, g, b, a)),
        _ => Err(wrong_type(attr, "color")),
    }
}

fn boolean(attr: &Attr) -> Result<bool, ConfigError> {
    match attr.value {
        Value::Bool(b) => Ok(b),
        _ => Err(wrong_type(attr, "bool")),
    }
}

fn dimension_px(attr: &Attr) -> Result<i32, ConfigError> {
    match attr.value {
        Value::Number(n) => Ok(round_dimension(n)),
        _ => Err(wrong_type(attr, "number")),
    }
}

fn gravity(attr: &Attr) -> Result<CornerGravity, ConfigError> {
    match &attr.value {
        Value::Ident(name) => CornerGravity::from_name(name).ok_or_else(|| {
            ConfigError::at(attr.pos, ConfigErrorKind::UnknownValue { attr: attr.key.clone(), value: name.clone() })
        }),
        _ => Err(wrong_type(attr, "identifier")),
    }
}

fn text(attr: &Attr, resources: &Resources) -> Result<String, ConfigError> {
    match &attr.value {
        Value::Str(s) => Ok(s.clone()),
        Value::Ref(r) if r.kind == "string" => resources
            .text(&r.name)
            .map(str::to_string)
            .map_err(|_| ConfigError::at(attr.pos, ConfigErrorKind::UnresolvedReference(format!("@string/{}", r.name)))),
        Value::Ref(r) => Err(ConfigError::at(
            attr.pos,
            ConfigErrorKind::UnresolvedReference(format!("@{}/{}", r.kind, r.name)),
        )),
        _ => Err(wrong_type(attr, "string")),
    }
}

/// Rounds a dimension to whole pixels, half away from zero. A non-zero value
/// never rounds to zero.
pub fn round_dimension(value: f32) -> i32 {
    let rounded = value.round() as i32;
    if rounded != 0 || value == 0.0 {
        rounded
    } else if value > 0.0 {
        1
    } else {
        -1
    }
}

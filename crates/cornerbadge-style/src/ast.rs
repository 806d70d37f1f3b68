// ── Pos ───────────────────────────────────────────────────────────────────

/// 1-based source position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

// ── Value ─────────────────────────────────────────────────────────────────

/// Reference to a resource defined elsewhere: `@string/badge_new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    /// Resource kind, e.g. `"string"`.
    pub kind: String,
    pub name: String,
}

/// A literal value in an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"Sale"`
    Str(String),
    /// Floating-point literal: `12` or `12.5`
    Number(f32),
    /// Color literal as straight-alpha bytes: `#rrggbb` (alpha 255) or `#rrggbbaa`
    Color([u8; 4]),
    /// `true` / `false`
    Bool(bool),
    /// Unquoted identifier, used for enum values: `top_end`
    Ident(String),
    /// Resource reference: `@string/name`
    Ref(ResourceRef),
}

impl Value {
    /// Short type name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Bool(_) => "bool",
            Value::Ident(_) => "identifier",
            Value::Ref(_) => "reference",
        }
    }
}

// ── Attr ──────────────────────────────────────────────────────────────────

/// A single `key: value` attribute inside a `badge` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
    /// Position of the value (where type errors are reported).
    pub pos: Pos,
}

// ── Blocks ────────────────────────────────────────────────────────────────

/// A named attribute set:
///
/// ```text
/// badge promo {
///     bg_color: #e53935ff
///     corner_gravity: top_end
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    pub name: String,
    pub attrs: Vec<Attr>,
    pub pos: Pos,
}

impl BadgeStyle {
    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.key == key)
    }
}

/// One entry of a `strings { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct StringEntry {
    pub name: String,
    pub value: String,
    pub pos: Pos,
}

// ── StyleSheet ────────────────────────────────────────────────────────────

/// A parsed `.badge` file: string resources plus named badge styles, in
/// source order. Multiple `strings` blocks are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub strings: Vec<StringEntry>,
    pub badges: Vec<BadgeStyle>,
}

impl StyleSheet {
    pub fn badge(&self, name: &str) -> Option<&BadgeStyle> {
        self.badges.iter().find(|b| b.name == name)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.iter().find(|s| s.name == name).map(|s| s.value.as_str())
    }
}

use std::fmt;

use crate::ast::Pos;

/// Why a `.badge` source was rejected, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Position of the offending character or token.
    pub pos: Pos,
    pub message: String,
}

impl ParseError {
    pub(crate) fn at(pos: Pos, message: impl Into<String>) -> Self {
        Self { pos, message: message.into() }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid badge style (line {}, column {}): {}", self.pos.line, self.pos.col, self.message)
    }
}

impl std::error::Error for ParseError {}

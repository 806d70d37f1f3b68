//! Lexer, parser, and AST for cornerbadge **style files** (`.badge`).
//!
//! A style file holds string resources and named badge attribute sets. It is
//! the construction-time configuration source for `CornerBadge` widgets;
//! turning attributes into typed values is the widget layer's job.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `StyleSheet`, `BadgeStyle`, `Attr`, `Value`, `StringEntry` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use cornerbadge_style::parse_str;
//!
//! let src = r#"
//!     strings { badge_new: "New" }
//!     badge promo {
//!         bg_color: #e53935ff
//!         corner_gravity: top_end
//!         status_text: @string/badge_new
//!     }
//! "#;
//!
//! let sheet = parse_str(src).unwrap();
//! assert_eq!(sheet.badge("promo").unwrap().attrs.len(), 3);
//! assert_eq!(sheet.string("badge_new"), Some("New"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Attr, BadgeStyle, Pos, ResourceRef, StringEntry, StyleSheet, Value};
pub use error::ParseError;
pub use parser::parse_str;

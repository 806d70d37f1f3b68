use crate::ast::{Attr, BadgeStyle, Pos, ResourceRef, StringEntry, StyleSheet, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> Pos {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| Pos::new(t.line, t.col))
            .unwrap_or(Pos::new(1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err_at(pos: Pos, msg: impl Into<String>) -> ParseError {
        ParseError::at(pos, msg)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        Self::err_at(self.current_pos(), msg)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        let at = self.current_pos();
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(Self::err_at(at, format!("expected identifier, got {:?}", tok))),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        let at = self.current_pos();
        let got = self.advance();
        if &got == expected {
            Ok(())
        } else {
            Err(Self::err_at(at, format!("expected {:?}, got {:?}", expected, got)))
        }
    }

    // ── Sheet ─────────────────────────────────────────────────────────────

    pub fn parse_sheet(&mut self) -> Result<StyleSheet, ParseError> {
        let mut sheet = StyleSheet::default();
        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Strings => self.parse_strings(&mut sheet)?,
                Token::Badge => {
                    let badge = self.parse_badge()?;
                    if sheet.badge(&badge.name).is_some() {
                        return Err(Self::err_at(badge.pos, format!("duplicate badge style `{}`", badge.name)));
                    }
                    sheet.badges.push(badge);
                }
                tok => {
                    return Err(self.err(format!("expected `strings` or `badge` at top level, got {:?}", tok)));
                }
            }
        }
        Ok(sheet)
    }

    // ── strings { name: "value" ... } ─────────────────────────────────────

    fn parse_strings(&mut self, sheet: &mut StyleSheet) -> Result<(), ParseError> {
        self.advance(); // `strings`
        self.expect_token(&Token::LBrace)?;
        loop {
            if self.peek() == &Token::RBrace {
                self.advance();
                return Ok(());
            }
            let at = self.current_pos();
            if self.peek() == &Token::Eof {
                return Err(self.err("unclosed `strings` block"));
            }
            let name = self.expect_ident()?;
            self.expect_token(&Token::Colon)?;
            let value_at = self.current_pos();
            let value = match self.advance() {
                Token::Str(s) => s,
                tok => return Err(Self::err_at(value_at, format!("string resources must be quoted, got {:?}", tok))),
            };
            if sheet.string(&name).is_some() {
                return Err(Self::err_at(at, format!("duplicate string resource `{}`", name)));
            }
            sheet.strings.push(StringEntry { name, value, pos: at });
        }
    }

    // ── badge name { key: value ... } ─────────────────────────────────────

    fn parse_badge(&mut self) -> Result<BadgeStyle, ParseError> {
        self.advance(); // `badge`
        let pos = self.current_pos();
        let name = self.expect_ident()?;
        self.expect_token(&Token::LBrace)?;

        let mut attrs: Vec<Attr> = Vec::new();
        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err(format!("unclosed block for badge `{}`", name))),
                _ => {
                    let key_at = self.current_pos();
                    let attr = self.parse_attr()?;
                    if attrs.iter().any(|a| a.key == attr.key) {
                        return Err(Self::err_at(key_at, format!("duplicate attribute `{}`", attr.key)));
                    }
                    attrs.push(attr);
                }
            }
        }

        Ok(BadgeStyle { name, attrs, pos })
    }

    fn parse_attr(&mut self) -> Result<Attr, ParseError> {
        let key = self.expect_ident()?;
        self.expect_token(&Token::Colon)?;
        let pos = self.current_pos();
        let value = self.parse_value()?;
        Ok(Attr { key, value, pos })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let at = self.current_pos();
        match self.advance() {
            Token::Str(s) => Ok(Value::Str(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Color(c) => Ok(Value::Color(c)),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Ident(s) => Ok(Value::Ident(s)),
            Token::Ref { kind, name } => Ok(Value::Ref(ResourceRef { kind, name })),
            tok => Err(Self::err_at(at, format!("expected a value, got {:?}", tok))),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.badge` source string into a [`StyleSheet`].
pub fn parse_str(src: &str) -> Result<StyleSheet, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_sheet()
}

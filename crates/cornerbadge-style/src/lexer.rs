use crate::ast::Pos;
use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes.
    Color([u8; 4]),
    /// `@kind/name`
    Ref { kind: String, name: String },
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Keywords
    Strings,
    Badge,
    True,
    False,
    // Sentinel
    Eof,
}

/// A token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    /// Splits the whole source into tokens, ending with `Token::Eof`.
    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn here(&self) -> Pos {
        Pos::new(self.line, self.col)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::at(self.here(), msg)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                let start = self.err("unterminated block comment");
                self.advance();
                self.advance();
                loop {
                    if self.rest().starts_with("*/") {
                        self.advance();
                        self.advance();
                        break;
                    }
                    if self.advance().is_none() {
                        return Err(start);
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(ch) = self.peek() else {
            return Ok(Token::Eof);
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(),
            '#' => self.lex_color(),
            '@' => self.lex_ref(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident_or_keyword()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn lex_string(&mut self) -> Result<Token, ParseError> {
        let start = self.err("unterminated string literal");
        self.advance(); // opening `"`
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(start),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('"') => s.push('"'),
                    Some('\\') => s.push('\\'),
                    Some(c) => return Err(self.err(format!("unknown escape sequence \\{}", c))),
                    None => return Err(start),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        let at = self.here();
        self.advance(); // `#`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
        }
        let hex = &self.src[start..self.pos];
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseError::at(
                at,
                format!("color literal must be #rrggbb or #rrggbbaa, got {} digits", hex.len()),
            ));
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let channels = (byte(0), byte(2), byte(4), if hex.len() == 8 { byte(6) } else { Ok(255) });
        match channels {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Token::Color([r, g, b, a])),
            _ => Err(ParseError::at(at, format!("invalid color literal #{}", hex))),
        }
    }

    fn lex_ref(&mut self) -> Result<Token, ParseError> {
        let at = self.here();
        self.advance(); // `@`
        let kind = self.take_word();
        if kind.is_empty() || self.peek() != Some('/') {
            return Err(ParseError::at(at, "expected a reference like @string/name"));
        }
        self.advance(); // `/`
        let name = self.take_word();
        if name.is_empty() {
            return Err(ParseError::at(at, format!("missing resource name after @{}/", kind)));
        }
        Ok(Token::Ref { kind, name })
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let at = self.here();
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| ParseError::at(at, format!("invalid number {:?}", s)))
    }

    fn take_word(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        self.src[start..self.pos].to_string()
    }

    fn lex_ident_or_keyword(&mut self) -> Token {
        let word = self.take_word();
        match word.as_str() {
            "strings" => Token::Strings,
            "badge" => Token::Badge,
            "true" => Token::True,
            "false" => Token::False,
            _ => Token::Ident(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn positions_are_one_based() {
        let toks = Lexer::new("badge a {\n  bg_color: #ff0000\n}").tokenize().unwrap();
        let color = toks.iter().find(|t| matches!(t.token, Token::Color(_))).unwrap();
        assert_eq!((color.line, color.col), (2, 13));
    }

    #[test]
    fn keywords_and_refs() {
        assert_eq!(
            kinds("strings true false @string/badge_new"),
            vec![
                Token::Strings,
                Token::True,
                Token::False,
                Token::Ref { kind: "string".into(), name: "badge_new".into() },
                Token::Eof,
            ]
        );
    }

    #[test]
    fn six_digit_color_is_opaque() {
        assert_eq!(kinds("#102030"), vec![Token::Color([0x10, 0x20, 0x30, 0xff]), Token::Eof]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("// one\n/* two */ 12.5"), vec![Token::Number(12.5), Token::Eof]);
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let err = Lexer::new("\n  /* open").tokenize().unwrap_err();
        assert_eq!(err.pos, Pos::new(2, 3));
    }

    #[test]
    fn bad_escape_is_an_error() {
        assert!(Lexer::new(r#""\q""#).tokenize().is_err());
    }
}

//! Byte-level lexer for Glyph source text.
//!
//! Turns a source string into a stream of [`Token`]s, one token of lookahead at a time. The
//! lexer never fails outright: bytes it cannot classify become [`TokenKind::Illegal`] tokens and
//! are left for the parser to reject.
mod token;

pub use token::{Token, TokenKind};

use once_cell::sync::Lazy;
use std::collections::HashMap;

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("fn", TokenKind::Function);
    m.insert("let", TokenKind::Let);
    m.insert("mut", TokenKind::Mut);
    m.insert("return", TokenKind::Return);
    m.insert("for", TokenKind::For);
    m.insert("true", TokenKind::True);
    m.insert("false", TokenKind::False);
    m.insert("if", TokenKind::If);
    m.insert("else", TokenKind::Else);
    m
});

fn lookup_identifier(identifier: &str) -> TokenKind {
    KEYWORDS
        .get(identifier)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Tokenises a byte stream one token at a time.
///
/// The lexer works on raw bytes, not `char`s: every token kind in this language lives in the
/// ASCII range, so byte-indexing keeps `next_token` simple and avoids pulling in a UTF-8 aware
/// cursor for no benefit.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\r' | b'\n') {
            self.read_char();
        }
    }

    /// Returns the next token, yielding `Eof` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Equal, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEqual, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'<' => Token::new(TokenKind::LessThan, "<"),
            b'>' => Token::new(TokenKind::GreaterThan, ">"),
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'.' => Token::new(TokenKind::Dot, "."),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::LParen, "("),
            b')' => Token::new(TokenKind::RParen, ")"),
            b'{' => Token::new(TokenKind::LBrace, "{"),
            b'}' => Token::new(TokenKind::RBrace, "}"),
            b'[' => Token::new(TokenKind::LBracket, "["),
            b']' => Token::new(TokenKind::RBracket, "]"),
            b'"' => return self.read_string(),
            0 => Token::eof(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.read_identifier(),
            b'0'..=b'9' => return self.read_integer(),
            other => Token::new(TokenKind::Illegal, (other as char).to_string()),
        };

        self.read_char();
        token
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while matches!(self.ch, b'a'..=b'z' | b'A'..=b'Z' | b'_') {
            self.read_char();
        }
        let literal = String::from_utf8_lossy(&self.input[start..self.position]).into_owned();
        let kind = lookup_identifier(&literal);
        Token::new(kind, literal)
    }

    fn read_integer(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        let literal = String::from_utf8_lossy(&self.input[start..self.position]).into_owned();
        Token::new(TokenKind::Integer, literal)
    }

    /// Reads a string literal body, resolving backslash escapes as it goes.
    ///
    /// The terminator is an unescaped `"` or the true end of input (byte 0). Earlier revisions
    /// of this lexer also terminated on the ASCII digit `'0'`, which was a bug; fixed here.
    ///
    /// Bytes are accumulated raw and decoded as UTF-8 once at the end, rather than pushed through
    /// `as char` one at a time — a multi-byte UTF-8 sequence isn't a sequence of Latin-1 code
    /// points, so decoding byte-by-byte corrupts any non-ASCII text in the literal.
    fn read_string(&mut self) -> Token {
        self.read_char(); // consume opening quote
        let mut bytes = Vec::new();

        loop {
            match self.ch {
                b'"' | 0 => break,
                b'\\' => {
                    self.read_char();
                    match self.ch {
                        b'n' => bytes.push(b'\n'),
                        b'\\' => bytes.push(b'\\'),
                        b'"' => bytes.push(b'"'),
                        0 => break,
                        other => bytes.push(other),
                    }
                    self.read_char();
                }
                other => {
                    bytes.push(other);
                    self.read_char();
                }
            }
        }

        if self.ch == b'"' {
            self.read_char();
        }

        let value = String::from_utf8_lossy(&bytes).into_owned();
        Token::new(TokenKind::String, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    #[test]
    fn lexes_two_char_operators() {
        let tokens = collect("== != = !");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::Assign,
                TokenKind::Bang,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_let_statement() {
        let tokens = collect("let mut a = 5;");
        let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Let,
                TokenKind::Mut,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Integer,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_string_escapes() {
        let tokens = collect(r#""a\nb\\c\"d""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, "a\nb\\c\"d");
    }

    #[test]
    fn keeps_returning_eof_after_input_exhausted() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn lexes_illegal_byte() {
        let tokens = collect("@");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].literal, "@");
    }

    #[test]
    fn identifier_run_stops_at_a_digit() {
        let tokens = collect("a2");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::Integer, "2"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn lexes_non_ascii_utf8_in_string_literals() {
        let tokens = collect(r#""héllo""#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, "héllo");
        assert_eq!(tokens[0].literal.chars().count(), 5);
    }

    #[test]
    fn lexes_array_and_member_access_punctuation() {
        let tokens = collect("a.b[0]");
        let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::LBracket,
                TokenKind::Integer,
                TokenKind::RBracket,
                TokenKind::Eof,
            ]
        );
    }
}

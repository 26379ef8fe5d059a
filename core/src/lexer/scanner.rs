use super::cursor::Cursor;
use super::token::{Literal, Span, Token, TokenKind};
use crate::diagnostics::Reporter;
use crate::errors::{ScanError, ScanErrorKind};

/// Scans source code into a sequence of tokens.
///
/// Lexical errors go to the reporter and scanning carries on, so the
/// returned list is always complete and always ends with `Eof`.
pub struct Scanner<'src, 'r> {
    pub(super) cursor: Cursor<'src>,
    reporter: &'r mut dyn Reporter,
    tokens: Vec<Token>,
}

impl<'src, 'r> Scanner<'src, 'r> {
    pub fn new(source: &'src str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            tokens: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.cursor.mark();
            self.scan_token();
        }

        let eof_pos = self.cursor.pos();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.cursor.line(),
            span: Span::new(eof_pos, eof_pos),
        });

        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.cursor.advance() else {
            return;
        };

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => {
                // The `/` is left in place and scanned as its own token.
                if self.cursor.peek() == Some('/') {
                    let start = self.cursor.start();
                    self.error(ScanErrorKind::UnopenedBlockComment, start, 2);
                    return;
                }
                TokenKind::Star
            }
            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.cursor.match_char('/') {
                    self.skip_line_comment();
                    return;
                }
                if self.cursor.match_char('*') {
                    self.skip_block_comment();
                    return;
                }
                TokenKind::Slash
            }
            ' ' | '\r' | '\t' | '\n' => return,
            '"' => {
                self.scan_string();
                return;
            }
            c if c.is_ascii_digit() => {
                self.scan_number();
                return;
            }
            c if is_ident_start(c) => {
                self.scan_identifier();
                return;
            }
            c => {
                let start = self.cursor.start();
                self.error(ScanErrorKind::UnexpectedCharacter, start, c.len_utf8());
                return;
            }
        };

        self.add_token(kind, None);
    }

    fn either(&mut self, next: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.match_char(next) {
            matched
        } else {
            single
        }
    }

    /// Push a token for the current lexeme.
    pub(super) fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let start = self.cursor.start();
        self.tokens.push(Token {
            kind,
            lexeme: self.cursor.lexeme().to_owned(),
            literal,
            line: self.cursor.start_line(),
            span: Span::new(start, self.cursor.pos()),
        });
    }

    /// Report an error on the current line.
    pub(super) fn error(&mut self, kind: ScanErrorKind, offset: usize, length: usize) {
        let line = self.cursor.line();
        self.error_at(kind, line, offset, length);
    }

    pub(super) fn error_at(
        &mut self,
        kind: ScanErrorKind,
        line: usize,
        offset: usize,
        length: usize,
    ) {
        self.reporter
            .report(ScanError::new(kind, line, offset, length));
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

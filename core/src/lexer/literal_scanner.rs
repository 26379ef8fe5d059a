use super::keywords;
use super::scanner::{Scanner, is_ident_continue};
use super::token::{Literal, TokenKind};
use crate::errors::ScanErrorKind;

impl Scanner<'_, '_> {
    /// Scan a string whose opening quote has already been consumed. There are
    /// no escapes; newlines are allowed.
    pub(super) fn scan_string(&mut self) {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            let start = self.cursor.start();
            let len = self.cursor.pos() - start;
            self.error(ScanErrorKind::UnterminatedString, start, len);
            return;
        }

        // closing quote
        self.cursor.advance();

        let lexeme = self.cursor.lexeme();
        let value = lexeme[1..lexeme.len() - 1].to_owned();
        self.add_token(TokenKind::String, Some(Literal::String(value)));
    }

    /// Scan a number whose first digit has already been consumed. The digit
    /// loops look at `current`, so that first digit is never read twice.
    pub(super) fn scan_number(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // A trailing '.' with no digit after it belongs to the next token.
        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let value: f64 = self
            .cursor
            .lexeme()
            .parse()
            .expect("scanned digits should parse as f64");
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    pub(super) fn scan_identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);

        let kind = keywords::lookup(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }
}

use super::scanner::Scanner;
use crate::errors::ScanErrorKind;

impl Scanner<'_, '_> {
    /// Skip to the end of the line. The newline itself is left for the main
    /// loop so the line count stays in one place.
    pub(super) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skip a `/* ... */` comment whose opener has already been consumed.
    /// Comments nest; each `/*` needs its own `*/`.
    pub(super) fn skip_block_comment(&mut self) {
        let open_line = self.cursor.start_line();
        let mut depth = 1usize;

        while depth > 0 {
            match (self.cursor.peek(), self.cursor.peek_next()) {
                (None, _) => {
                    let start = self.cursor.start();
                    let len = self.cursor.pos() - start;
                    self.error_at(ScanErrorKind::UnterminatedBlockComment, open_line, start, len);
                    return;
                }
                (Some('*'), Some('/')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth -= 1;
                }
                (Some('/'), Some('*')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth += 1;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }
}

/// Character-level reader over the source string.
///
/// Offsets are byte positions that always sit on a `char` boundary, so any
/// `start..pos` range can be sliced straight out of the source.
pub struct Cursor<'src> {
    source: &'src str,
    start: usize,
    pos: usize,
    line: usize,
    start_line: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Begin a new lexeme at the current position.
    pub fn mark(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    /// Byte offset where the current lexeme began.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Line on which the current lexeme began.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Peek at the next character (one ahead of current).
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    /// Advance one character and return it. Consuming `\n` bumps the line.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Advance if the current character matches `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Text of the current lexeme.
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

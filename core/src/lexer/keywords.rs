use super::token::TokenKind;

/// Reserved words, sorted by spelling so lookups can binary search.
pub static KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Keyword kind for `text`, if it is reserved.
pub fn lookup(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .binary_search_by(|(spelling, _)| (*spelling).cmp(text))
        .ok()
        .map(|idx| KEYWORDS[idx].1)
}

/// All reserved spellings in sorted order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|(spelling, _)| *spelling)
}

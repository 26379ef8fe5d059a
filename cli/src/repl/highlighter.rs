use std::borrow::Cow;

use loxscan::lexer;
use loxscan::{ScanError, Token, TokenKind};
use owo_colors::OwoColorize;

/// Colour the line using the scanner's own view of it. Errors are ignored;
/// anything the scanner skipped is copied through unchanged, except comments.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let mut ignore = |_: ScanError| {};
    let tokens = lexer::scan(line, &mut ignore);

    let mut out = String::with_capacity(line.len() * 2);
    let mut last = 0;
    for token in tokens.iter().filter(|t| !t.is_eof()) {
        push_gap(&mut out, &line[last..token.span.start]);
        push_token(&mut out, token);
        last = token.span.end;
    }
    push_gap(&mut out, &line[last..]);

    Cow::Owned(out)
}

fn push_gap(out: &mut String, gap: &str) {
    match gap.find('/') {
        Some(idx) => {
            let (code, comment) = gap.split_at(idx);
            out.push_str(code);
            out.push_str(&comment.bright_black().to_string());
        }
        None => out.push_str(gap),
    }
}

fn push_token(out: &mut String, token: &Token) {
    let text = token.lexeme.as_str();
    let painted = match token.kind {
        kind if kind.is_keyword() => text.blue().bold().to_string(),
        TokenKind::String => text.green().to_string(),
        TokenKind::Number => text.yellow().to_string(),
        _ => text.to_string(),
    };
    out.push_str(&painted);
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

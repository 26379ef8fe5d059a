use loxscan::lexer::{lex, scan, token::TokenKind};
use loxscan::{Diagnostics, ScanError, ScanErrorKind};

fn kinds_and_errors(source: &str) -> (Vec<TokenKind>, Diagnostics) {
    let (tokens, diagnostics) = lex(source);
    (tokens.into_iter().map(|t| t.kind).collect(), diagnostics)
}

fn error_summary(diagnostics: &Diagnostics) -> Vec<(ScanErrorKind, usize)> {
    diagnostics.errors().iter().map(|e| (e.kind, e.line)).collect()
}

#[test]
fn unexpected_character_is_reported_and_skipped() {
    let (kinds, diagnostics) = kinds_and_errors("a @ b");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(
        error_summary(&diagnostics),
        vec![(ScanErrorKind::UnexpectedCharacter, 1)]
    );
}

#[test]
fn each_bad_character_gets_one_report() {
    let (kinds, diagnostics) = kinds_and_errors("#\n$é%");
    assert_eq!(kinds, vec![TokenKind::Eof]);
    assert_eq!(
        error_summary(&diagnostics),
        vec![
            (ScanErrorKind::UnexpectedCharacter, 1),
            (ScanErrorKind::UnexpectedCharacter, 2),
            (ScanErrorKind::UnexpectedCharacter, 2),
            (ScanErrorKind::UnexpectedCharacter, 2),
        ]
    );
}

#[test]
fn error_display_matches_report_format() {
    let (_, diagnostics) = lex("\n\n?");
    let rendered: Vec<String> = diagnostics.errors().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["[line 3] Error: Unexpected character."]);
    assert_eq!(diagnostics.errors()[0].context, "");
    assert_eq!(diagnostics.errors()[0].message(), "Unexpected character.");
}

#[test]
fn unterminated_string_reports_once_without_token() {
    let (kinds, diagnostics) = kinds_and_errors("\"abc");
    assert_eq!(kinds, vec![TokenKind::Eof]);
    assert_eq!(
        error_summary(&diagnostics),
        vec![(ScanErrorKind::UnterminatedString, 1)]
    );
}

#[test]
fn unterminated_string_reports_line_where_scan_stopped() {
    let (kinds, diagnostics) = kinds_and_errors("var s = \"one\ntwo\nthree");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        error_summary(&diagnostics),
        vec![(ScanErrorKind::UnterminatedString, 3)]
    );
}

#[test]
fn unterminated_block_comment_reports_opening_line() {
    let (kinds, diagnostics) = kinds_and_errors("x\n/* open\n/* inner */\nstill open");
    assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(
        error_summary(&diagnostics),
        vec![(ScanErrorKind::UnterminatedBlockComment, 2)]
    );
}

#[test]
fn unclosed_inner_comment_keeps_outer_open() {
    let (kinds, diagnostics) = kinds_and_errors("/* a /* b */ c");
    assert_eq!(kinds, vec![TokenKind::Eof]);
    assert_eq!(diagnostics.errors().len(), 1);
    assert_eq!(
        diagnostics.errors()[0].kind,
        ScanErrorKind::UnterminatedBlockComment
    );
}

#[test]
fn stray_comment_closer_leaves_slash_for_next_token() {
    let (kinds, diagnostics) = kinds_and_errors("a */ b");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        error_summary(&diagnostics),
        vec![(ScanErrorKind::UnopenedBlockComment, 1)]
    );
}

#[test]
fn stray_closer_before_line_comment() {
    let (kinds, diagnostics) = kinds_and_errors("*// rest");
    assert_eq!(kinds, vec![TokenKind::Eof]);
    assert_eq!(diagnostics.errors().len(), 1);
}

#[test]
fn scanning_continues_after_errors() {
    let (kinds, diagnostics) = kinds_and_errors("@ print 1; ^ \"open");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Print,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        error_summary(&diagnostics),
        vec![
            (ScanErrorKind::UnexpectedCharacter, 1),
            (ScanErrorKind::UnexpectedCharacter, 1),
            (ScanErrorKind::UnterminatedString, 1),
        ]
    );
}

#[test]
fn error_spans_point_at_offending_text() {
    let (_, diagnostics) = lex("ab ~");
    let span = diagnostics.errors()[0].span;
    assert_eq!(span.offset(), 3);
    assert_eq!(span.len(), 1);
}

#[test]
fn closure_reporter_receives_errors() {
    let mut seen: Vec<ScanError> = Vec::new();
    let mut collect = |error: ScanError| seen.push(error);
    let tokens = scan("1 & 2", &mut collect);
    assert_eq!(tokens.len(), 3);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, ScanErrorKind::UnexpectedCharacter);
}

#[test]
fn each_run_starts_clean() {
    let bad = loxscan::run("@");
    assert!(bad.had_error());
    let good = loxscan::run("var ok;");
    assert!(!good.had_error());
    assert!(good.diagnostics.is_empty());
}

#[test]
fn unterminated_block_comment_message() {
    let (_, diagnostics) = lex("/* never closed");
    let rendered: Vec<String> = diagnostics.errors().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["[line 1] Error: Unterminated block comment"]);
}

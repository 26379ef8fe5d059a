use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// The lexical problems the scanner can run into. None of them stop a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("Unexpected character.")]
    UnexpectedCharacter,

    #[error("No beginning for block comment.")]
    UnopenedBlockComment,

    #[error("Unterminated string.")]
    UnterminatedString,

    #[error("Unterminated block comment")]
    UnterminatedBlockComment,
}

impl ScanErrorKind {
    fn help(self) -> &'static str {
        match self {
            ScanErrorKind::UnexpectedCharacter => "this character is not part of any token",
            ScanErrorKind::UnopenedBlockComment => "remove the `*/` or add a matching `/*`",
            ScanErrorKind::UnterminatedString => "add a closing `\"`",
            ScanErrorKind::UnterminatedBlockComment => {
                "every `/*`, including nested ones, needs its own `*/`"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("[line {line}] Error{context}: {kind}")]
#[diagnostic(code(loxscan::scan))]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    pub context: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: usize, offset: usize, length: usize) -> Self {
        Self {
            kind,
            line,
            context: String::new(),
            span: (offset, length).into(),
            help: Some(kind.help().to_owned()),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

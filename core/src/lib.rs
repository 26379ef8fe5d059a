pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use diagnostics::{Diagnostics, Reporter};
pub use errors::{LoxError, ScanError, ScanErrorKind};
pub use lexer::token::{Literal, Span, Token, TokenKind};

use std::fs;
use std::path::Path;

/// Tokens and diagnostics from scanning one source text.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl ScanResult {
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }
}

/// Scan one complete source text. Every run starts with a clean error state.
pub fn run(source: &str) -> ScanResult {
    let (tokens, diagnostics) = lexer::lex(source);
    ScanResult {
        tokens,
        diagnostics,
    }
}

/// Read a script from disk and scan it.
pub fn run_file<P: AsRef<Path>>(path: P) -> Result<(String, ScanResult), LoxError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoxError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let result = run(&source);
    Ok((source, result))
}

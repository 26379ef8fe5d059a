mod scan_error;

pub use scan_error::{ScanError, ScanErrorKind};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all loxscan errors.
#[derive(Debug, Error, Diagnostic)]
pub enum LoxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),

    #[error("could not read '{path}': {source}")]
    #[diagnostic(code(loxscan::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

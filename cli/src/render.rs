use loxscan::{Diagnostics, Token};
use miette::{NamedSource, Report};

pub fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{token}");
    }
}

/// Write every diagnostic to stderr, either as `[line N] Error: ...` or as a
/// labelled miette report over `source`.
pub fn print_errors(name: &str, source: &str, diagnostics: &Diagnostics, pretty: bool) {
    for error in diagnostics {
        if pretty {
            let report = Report::new(error.clone())
                .with_source_code(NamedSource::new(name, source.to_owned()));
            eprintln!("{report:?}");
        } else {
            eprintln!("{error}");
        }
    }
}

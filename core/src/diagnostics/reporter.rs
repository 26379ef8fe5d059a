use crate::errors::ScanError;

/// Receives lexical errors as the scanner finds them.
pub trait Reporter {
    fn report(&mut self, error: ScanError);
}

impl<F> Reporter for F
where
    F: FnMut(ScanError),
{
    fn report(&mut self, error: ScanError) {
        (*self)(error)
    }
}

/// Collects every error reported during one run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<ScanError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: ScanError) {
        self.errors.push(error);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ScanError;
    type IntoIter = std::slice::Iter<'a, ScanError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

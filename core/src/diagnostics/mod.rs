mod reporter;

pub use reporter::{Diagnostics, Reporter};

//! Common infrastructure shared by the lexer, presenter and driver

mod error;
mod span;

pub use error::{ClexError, ClexResult, DiagnosticReporter};
pub use span::Span;

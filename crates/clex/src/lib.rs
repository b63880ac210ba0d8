//! clex - lexical analyzer for C-like source text
//!
//! Turns a raw source buffer into an ordered list of classified tokens
//! (keywords, types, identifiers, literals, operators, punctuation and
//! preprocessor lines), each tagged with the line and column it starts at.
//!
//! ## Architecture
//!
//! - **Lexer** (`lexer/`): classification tables and the hand-written scanner
//! - **Source** (`source/`): reading a buffer from a file or an interactive prompt
//! - **Report** (`report/`): token listings and summary statistics
//! - **Driver** (`driver/`): the interactive menu and batch runs
//! - **Common** (`common/`): errors, spans and diagnostics
//!
//! ```
//! use c_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 42;");
//! assert_eq!(tokens[0].kind, TokenKind::Type);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub mod common;
pub mod driver;
pub mod lexer;
pub mod report;
pub mod source;

// Re-exports for convenience
pub use common::{ClexError, ClexResult, DiagnosticReporter, Span};
pub use driver::{DriverConfig, Session};
pub use lexer::{Lexer, LexerConfig, NumberSigns, OperatorClass, Token, TokenKind};
pub use report::Summary;

/// Tokenize `source` with the default configuration
///
/// Never fails: the result always ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize_all()
}

/// Tokenize `source` with explicit scanner options
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Vec<Token> {
    Lexer::with_config(source, *config).tokenize_all()
}

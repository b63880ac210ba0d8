//! Lexer module for tokenizing C-like source code

mod scanner;
pub mod tables;
mod token;

pub use scanner::{Lexer, LexerConfig, NumberSigns};
pub use token::{EOF_LEXEME, OperatorClass, Token, TokenKind};

//! Token definitions for the C lexer

use std::fmt;

use crate::common::Span;

/// Lexeme carried by the synthetic end-of-input token
pub const EOF_LEXEME: &str = "EOF";

/// Token with its text and source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text covered by the token
    pub lexeme: String,
    /// Byte range of `lexeme` in the source
    pub span: Span,
    /// 1-based line of the first character
    pub line: u32,
    /// 1-based column of the first character
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            line,
            column,
        }
    }

    /// End-of-input marker at the given cursor position
    pub fn eof(offset: usize, line: u32, column: u32) -> Self {
        Self::new(TokenKind::Eof, EOF_LEXEME, Span::point(offset), line, column)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Operator family of an `Operator` token, `None` for every other kind
    pub fn operator_class(&self) -> Option<OperatorClass> {
        match self.kind {
            TokenKind::Operator => OperatorClass::of(&self.lexeme),
            _ => None,
        }
    }
}

/// Token categories produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Type,
    Identifier,
    Integer,
    Float,
    String,
    Char,
    Operator,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Preprocessor,
    Unknown,
    Eof,
}

impl TokenKind {
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::Operator,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Preprocessor,
        TokenKind::Unknown,
        TokenKind::Eof,
    ];

    /// Upper-case name used in token listings
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Type => "TYPE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Eof => "EOF",
        }
    }

    /// Kind of a single-character punctuation token
    pub fn punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this is one of the bracket/separator kinds
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::Dot
        )
    }

    /// Check if this is a literal kind
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Char
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags work in listings
        f.pad(self.as_str())
    }
}

/// Families of operators recognised by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorClass {
    Arithmetic,
    IncDec,
    Comparison,
    Logical,
    Bitwise,
    Assignment,
}

impl OperatorClass {
    pub const ALL: [OperatorClass; 6] = [
        OperatorClass::Arithmetic,
        OperatorClass::IncDec,
        OperatorClass::Comparison,
        OperatorClass::Logical,
        OperatorClass::Bitwise,
        OperatorClass::Assignment,
    ];

    pub fn of(lexeme: &str) -> Option<OperatorClass> {
        let class = match lexeme {
            "+" | "-" | "*" | "/" | "%" => OperatorClass::Arithmetic,
            "++" | "--" => OperatorClass::IncDec,
            "==" | "!=" | "<" | ">" | "<=" | ">=" => OperatorClass::Comparison,
            "&&" | "||" | "!" => OperatorClass::Logical,
            "&" | "|" | "^" | "~" | "<<" | ">>" => OperatorClass::Bitwise,
            "=" | "+=" | "-=" | "*=" | "/=" | "%=" => OperatorClass::Assignment,
            _ => return None,
        };
        Some(class)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperatorClass::Arithmetic => "ARITHMETIC",
            OperatorClass::IncDec => "INCDEC",
            OperatorClass::Comparison => "COMPARISON",
            OperatorClass::Logical => "LOGICAL",
            OperatorClass::Bitwise => "BITWISE",
            OperatorClass::Assignment => "ASSIGNMENT",
        }
    }
}

impl fmt::Display for OperatorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

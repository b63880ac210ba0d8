//! Token listings and summary statistics

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use string_interner::DefaultStringInterner;

use crate::lexer::{OperatorClass, Token, TokenKind};

pub const SEPARATOR: &str = "==================================================";

/// One listing line: position, kind name and lexeme
pub fn format_token(token: &Token) -> String {
    format!(
        "Line {:3}, Col {:3}: {:<15} {}",
        token.line, token.column, token.kind, token.lexeme
    )
}

/// Write every token followed by the total count
pub fn write_listing(writer: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(writer, "{}", format_token(token))?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total tokens: {}", tokens.len())
}

/// Aggregate counts over a token sequence
pub struct Summary {
    total: usize,
    lines: u32,
    by_kind: BTreeMap<TokenKind, usize>,
    by_operator: BTreeMap<OperatorClass, usize>,
    /// Identifier names in order of first appearance
    identifiers: DefaultStringInterner,
}

impl Summary {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut by_kind = BTreeMap::new();
        let mut by_operator = BTreeMap::new();
        let mut identifiers = DefaultStringInterner::default();

        for token in tokens {
            *by_kind.entry(token.kind).or_insert(0) += 1;
            if let Some(class) = token.operator_class() {
                *by_operator.entry(class).or_insert(0) += 1;
            }
            if token.kind == TokenKind::Identifier {
                identifiers.get_or_intern(&token.lexeme);
            }
        }

        Self {
            total: tokens.len(),
            lines: tokens.last().map_or(0, source_lines),
            by_kind,
            by_operator,
            identifiers,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of source lines; a trailing newline does not open another one
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn operator_count(&self, class: OperatorClass) -> usize {
        self.by_operator.get(&class).copied().unwrap_or(0)
    }

    pub fn distinct_identifiers(&self) -> usize {
        self.identifiers.len()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(|(_, name)| name)
    }
}

/// Line count implied by the end-of-input token
///
/// The end token sits at column 1 only when the buffer is empty or ends
/// with a newline, and in the latter case its line has no content.
fn source_lines(eof: &Token) -> u32 {
    match (eof.span.start, eof.column) {
        (0, _) => 0,
        (_, 1) => eof.line - 1,
        _ => eof.line,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary ({} tokens, {} lines):", self.total, self.lines)?;
        for (kind, count) in &self.by_kind {
            writeln!(f, "  {:<15} {:>5}", kind, count)?;
        }
        if !self.by_operator.is_empty() {
            writeln!(f, "Operators:")?;
            for (class, count) in &self.by_operator {
                writeln!(f, "  {:<15} {:>5}", class, count)?;
            }
        }
        write!(f, "Distinct identifiers: {}", self.distinct_identifiers())
    }
}

//! Error types and diagnostic reporting

use std::io;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// Errors raised around the scanner: reading sources and talking to the user.
///
/// The scanner itself has no failure mode, so nothing here carries a span.
#[derive(Error, Debug)]
pub enum ClexError {
    #[error("Cannot open file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ClexError {
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

pub type ClexResult<T> = Result<T, ClexError>;

/// Diagnostic reporter for pretty warning and error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::with_color(ColorChoice::Auto)
    }

    pub fn with_color(choice: ColorChoice) -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(choice),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    /// Build a warning for every `Unknown` token in `tokens`
    pub fn unknown_token_diagnostics(&self, file_id: usize, tokens: &[Token]) -> Vec<Diagnostic<usize>> {
        tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Unknown)
            .map(|token| {
                Diagnostic::warning()
                    .with_message(format!("unrecognized character `{}`", token.lexeme.escape_debug()))
                    .with_labels(vec![
                        Label::primary(file_id, token.span.range())
                            .with_message(format!("line {}, column {}", token.line, token.column)),
                    ])
                    .with_notes(vec!["kept in the token stream as UNKNOWN".to_string()])
            })
            .collect()
    }

    /// Emit warnings for unrecognized characters to stderr, returning how many were reported
    pub fn report_unknown_tokens(&self, file_id: usize, tokens: &[Token]) -> usize {
        let diagnostics = self.unknown_token_diagnostics(file_id, tokens);
        let mut writer = self.writer.lock();
        for diagnostic in &diagnostics {
            let _ = self.emit_to(&mut writer, diagnostic);
        }
        diagnostics.len()
    }

    pub fn error_diagnostic(error: &ClexError) -> Diagnostic<usize> {
        match error {
            ClexError::FileRead { path, source } => Diagnostic::error()
                .with_message(format!("cannot open file {}", path.display()))
                .with_notes(vec![source.to_string()]),

            ClexError::Io(err) => Diagnostic::error().with_message(format!("IO error: {}", err)),
        }
    }

    /// Emit `error` to stderr
    pub fn report_error(&self, error: &ClexError) {
        let diagnostic = Self::error_diagnostic(error);
        let _ = self.emit_to(&mut self.writer.lock(), &diagnostic);
    }

    /// Render a single diagnostic into an arbitrary sink
    pub fn emit_to(
        &self,
        writer: &mut dyn WriteColor,
        diagnostic: &Diagnostic<usize>,
    ) -> Result<(), codespan_reporting::files::Error> {
        term::emit(writer, &self.config, &self.files, diagnostic)
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

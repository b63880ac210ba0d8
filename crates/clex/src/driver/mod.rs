//! Interactive menu and batch runs around the scanner

use std::io::{BufRead, Write};
use std::path::Path;

use codespan_reporting::term::termcolor::ColorChoice;
use tracing::{debug, info};

use crate::common::{ClexError, ClexResult, DiagnosticReporter};
use crate::lexer::{LexerConfig, Token};
use crate::report::{SEPARATOR, Summary, write_listing};
use crate::source::{read_file, read_line_lossy, read_until_sentinel};
use crate::tokenize_with;

const RULE: &str = "--------------------------------------------------";

/// Options shared by interactive and batch runs
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub lexer: LexerConfig,
    /// Print the source before its tokens
    pub echo_source: bool,
    /// Print per-kind statistics after the listing
    pub summary: bool,
    /// Report unrecognized characters as diagnostics on stderr
    pub warn_unknown: bool,
    pub color: ColorChoice,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            lexer: LexerConfig::default(),
            echo_source: true,
            summary: false,
            warn_unknown: false,
            color: ColorChoice::Auto,
        }
    }
}

/// Entries of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    EnterCode,
    LoadFile,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::EnterCode),
            2 => Some(MenuChoice::LoadFile),
            3 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive session reading commands from `input` and writing to `output`
pub struct Session<R, W> {
    input: R,
    output: W,
    config: DriverConfig,
    reporter: DiagnosticReporter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: DriverConfig) -> Self {
        let reporter = DiagnosticReporter::with_color(config.color);
        Self {
            input,
            output,
            config,
            reporter,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or the input stream ends
    pub fn run(&mut self) -> ClexResult<()> {
        writeln!(self.output, "\n*** Welcome to the C Lexical Analyzer ***")?;

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("input stream closed");
                break;
            };

            let Some(choice) = line.trim().parse::<i64>().ok() else {
                writeln!(self.output, "Invalid input!")?;
                continue;
            };

            let Some(choice) = MenuChoice::from_number(choice) else {
                writeln!(self.output, "Invalid choice! Please select 1, 2, or 3.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            let (name, source) = match choice {
                MenuChoice::EnterCode => match self.read_direct_input()? {
                    Some(source) => ("<input>".to_string(), source),
                    None => continue,
                },
                MenuChoice::LoadFile => match self.read_named_file()? {
                    Some(loaded) => loaded,
                    None => continue,
                },
                MenuChoice::Exit => {
                    writeln!(self.output, "\nThank you for using the C Lexical Analyzer!")?;
                    break;
                }
            };

            present(&mut self.output, &mut self.reporter, &name, &source, &self.config)?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> ClexResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{SEPARATOR}")?;
        writeln!(self.output, "          C LEXICAL ANALYZER (TOKENIZER)         ")?;
        writeln!(self.output, "{SEPARATOR}")?;
        writeln!(self.output, "1. Enter code directly")?;
        writeln!(self.output, "2. Load from file")?;
        writeln!(self.output, "3. Exit")?;
        writeln!(self.output, "{SEPARATOR}")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> ClexResult<Option<String>> {
        read_line_lossy(&mut self.input)
    }

    fn read_direct_input(&mut self) -> ClexResult<Option<String>> {
        writeln!(self.output, "\nEnter your C code (type 'END' on a new line to finish):")?;
        writeln!(self.output, "{RULE}")?;

        let source = read_until_sentinel(&mut self.input)?;
        if source.is_empty() {
            writeln!(self.output, "No code entered!")?;
            return Ok(None);
        }

        if self.config.echo_source {
            writeln!(self.output, "\n{RULE}")?;
            writeln!(self.output, "Source code received:")?;
            writeln!(self.output, "{source}")?;
        }
        Ok(Some(source))
    }

    fn read_named_file(&mut self) -> ClexResult<Option<(String, String)>> {
        write!(self.output, "Enter filename: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let name = line.trim_end_matches(['\n', '\r']).to_string();

        match read_file(&name) {
            Ok(source) => {
                if self.config.echo_source {
                    writeln!(self.output, "\nSource code from '{name}':")?;
                    writeln!(self.output, "{source}")?;
                }
                Ok(Some((name, source)))
            }
            Err(err @ ClexError::FileRead { .. }) => {
                info!(file = %name, "could not open source file");
                self.reporter.report_error(&err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// Tokenize `source`, print its listing and any requested extras
pub fn present(
    output: &mut impl Write,
    reporter: &mut DiagnosticReporter,
    name: &str,
    source: &str,
    config: &DriverConfig,
) -> ClexResult<Vec<Token>> {
    let tokens = tokenize_with(source, &config.lexer);

    writeln!(output, "\nTokens:")?;
    writeln!(output, "{SEPARATOR}")?;
    write_listing(output, &tokens)?;

    if config.summary {
        writeln!(output, "\n{}", Summary::from_tokens(&tokens))?;
    }

    if config.warn_unknown {
        let file_id = reporter.add_file(name, source);
        let reported = reporter.report_unknown_tokens(file_id, &tokens);
        debug!(file = name, reported, "reported unknown characters");
    }

    Ok(tokens)
}

/// Tokenize each file in turn, printing the same listing the menu prints
pub fn run_files<P: AsRef<Path>>(paths: &[P], config: &DriverConfig, output: &mut impl Write) -> ClexResult<()> {
    let mut reporter = DiagnosticReporter::with_color(config.color);

    for path in paths {
        let path = path.as_ref();
        let name = path.display().to_string();
        let source = read_file(path)?;

        if config.echo_source {
            writeln!(output, "\nSource code from '{name}':")?;
            writeln!(output, "{source}")?;
        }
        present(output, &mut reporter, &name, &source, config)?;
    }

    output.flush()?;
    Ok(())
}

//! clex - lexical analyzer for C-like source text
//!
//! Usage: clex [OPTIONS] [INPUT]...
//!
//! With no input files an interactive menu reads code from stdin.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use c_lexer::driver::{self, DriverConfig, Session};
use c_lexer::{DiagnosticReporter, LexerConfig, NumberSigns};
use clap::{Parser as ClapParser, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// How `+`/`-` are treated inside numeric literals
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum SignMode {
    /// Any sign adjacent to a number joins it (`1+2` is one token)
    #[default]
    Greedy,
    /// Signs join a number only right after an exponent marker
    ExponentOnly,
}

/// Diagnostic coloring
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Color {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(ClapParser, Debug)]
#[command(name = "clex")]
#[command(version)]
#[command(about = "Lexical analyzer for C-like source text", long_about = None)]
struct Args {
    /// Source files to tokenize (interactive menu when omitted)
    input: Vec<PathBuf>,

    /// Sign handling inside numeric literals
    #[arg(long, value_enum, default_value = "greedy")]
    number_signs: SignMode,

    /// Do not print the source before its tokens
    #[arg(long)]
    no_echo: bool,

    /// Print token statistics after each listing
    #[arg(short, long)]
    summary: bool,

    /// Report unrecognized characters as warnings
    #[arg(short = 'W', long)]
    warn_unknown: bool,

    /// Diagnostic coloring
    #[arg(long, value_enum, default_value = "auto")]
    color: Color,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn driver_config(&self) -> DriverConfig {
        let number_signs = match self.number_signs {
            SignMode::Greedy => NumberSigns::Greedy,
            SignMode::ExponentOnly => NumberSigns::ExponentOnly,
        };
        let color = match self.color {
            Color::Auto => ColorChoice::Auto,
            Color::Always => ColorChoice::Always,
            Color::Never => ColorChoice::Never,
        };

        DriverConfig {
            lexer: LexerConfig { number_signs },
            echo_source: !self.no_echo,
            summary: self.summary,
            warn_unknown: self.warn_unknown,
            color,
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.driver_config();
    tracing::debug!(?config, files = args.input.len(), "starting");

    if args.input.is_empty() {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        Session::new(stdin, stdout, config)
            .run()
            .context("interactive session failed")?;
        return Ok(());
    }

    let result = driver::run_files(&args.input, &config, &mut io::stdout().lock());
    if let Err(err) = result {
        DiagnosticReporter::with_color(config.color).report_error(&err);
        process::exit(1);
    }

    Ok(())
}

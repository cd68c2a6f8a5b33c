//! recolor - colorize lines of text by regular expression
//!
//! Reads lines from standard input and writes them to standard output,
//! coloring the parts matched by `COLOR=REGEX` rules.

mod cli;
mod cmdline;
mod config;
mod error;
mod markup;
mod terminal;

use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use error::{RecolorError, Result};
use markup::{Color, RuleSet};
use terminal::Painter;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "RECOLOR_LOG";

fn main() {
    match run() {
        Ok(()) => {}
        // Help and version also land here
        Err(RecolorError::CommandLine(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args(env::args())?;
    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load()?
    };

    let verbose = cli.verbose || config.verbose;
    init_logging(verbose);
    if verbose {
        cli.log_rules();
    }

    // Rules are compiled before any input is read
    let rules = RuleSet::from_rules(config.rules.iter().chain(&cli.rules), Color::ambient())?;
    debug!(count = rules.markers().len(), "rules ready");

    paint_lines(io::stdin().lock(), BufWriter::new(io::stdout().lock()), &rules)
}

/// Color every line of the input onto the output
fn paint_lines(mut input: impl BufRead, out: impl Write, rules: &RuleSet) -> Result<()> {
    let mut painter = Painter::new(out, rules.ambient());
    let mut buf = Vec::new();
    while let Some(line) = next_line(&mut input, &mut buf)? {
        let spans = rules.resolve(&line);
        painter.paint_line(&line, &spans)?;
        painter.flush()?;
    }
    Ok(())
}

/// Read the next line without its `\n` or `\r\n`. Bytes that are not
/// valid UTF-8 become replacement characters rather than ending the run.
fn next_line(input: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

//! arcseries command-line calculator
//!
//! Computes the arccosine of a value in [-1, 1] and prints it in radians and
//! degrees together with the time the computation took.
//!
//! # Usage
//!
//! ```bash
//! # One value
//! arcseries 0.5
//! arcseries -- -0.5
//!
//! # Interactive prompt, one value per line (quit with `exit` or Ctrl-D)
//! arcseries
//!
//! # Custom settings
//! arcseries --config ./arcseries.toml 0.25
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: warn)

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use arcseries::{ArccosEngine, Calculator, CalculatorConfig, DisplaySettings};

const PROMPT: &str = "Enter x [-1 to 1]: ";

/// Compute arccos(x) from a Taylor series.
#[derive(Parser, Debug)]
#[command(name = "arcseries", version)]
struct Args {
    /// Value to take the arccosine of. Starts an interactive prompt when omitted.
    #[arg(allow_negative_numbers = true)]
    value: Option<String>,
    /// TOML configuration file. Defaults to `arcseries.toml` in the working directory, if present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Leave out the computation time.
    #[arg(long)]
    no_timing: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CalculatorConfig::from_file(path)?,
        None => CalculatorConfig::from_default_location()?,
    };
    if args.no_timing {
        config.display.show_timing = false;
    }
    info!(?config, "loaded configuration");

    let calculator = Calculator::new(ArccosEngine::with_config(config.series)?);

    match args.value {
        Some(text) => {
            let succeeded = evaluate_once(&calculator, &config.display, &text, io::stdout(), io::stderr())?;
            Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        None => {
            interactive(&calculator, &config.display, io::stdin().lock(), io::stdout(), io::stderr())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Evaluates a single value, returning whether it succeeded.
fn evaluate_once<W: Write, E: Write>(
    calculator: &Calculator,
    display: &DisplaySettings,
    text: &str,
    mut out: W,
    mut err: E,
) -> io::Result<bool> {
    match calculator.evaluate_text(text) {
        Ok(evaluation) => {
            writeln!(out, "{}", evaluation.render(display))?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "Error: {}", e.user_message())?;
            Ok(false)
        }
    }
}

/// Prompts for one value per line until EOF, `quit` or `exit`.
/// Bad input is reported on `err` and the prompt continues.
fn interactive<R: BufRead, W: Write, E: Write>(
    calculator: &Calculator,
    display: &DisplaySettings,
    input: R,
    mut out: W,
    mut err: E,
) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            text => match calculator.evaluate_text(text) {
                Ok(evaluation) => writeln!(out, "{}\n", evaluation.render(display))?,
                Err(e) => writeln!(err, "Error: {}\n", e.user_message())?,
            },
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

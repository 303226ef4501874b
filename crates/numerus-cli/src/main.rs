//! Numerus CLI
//!
//! Command-line interface for Roman numeral conversion.
//!
//! ## Usage
//!
//! ```bash
//! # Numeral to value
//! numerus decode MCMXCIV
//!
//! # Value to canonical numeral
//! numerus encode 1994
//!
//! # Validity, with per-check detail
//! numerus check IIX --explain
//!
//! # JSON output
//! numerus decode XIV --format json
//!
//! # Interactive loop
//! numerus
//! ```
//!
//! ## Exit Codes
//!
//! - 0: success / numeral is valid
//! - 1: input rejected (invalid numeral or out-of-range value)
//! - 2: error
//!
//! Numeral arguments are trimmed and upper-cased here; the core only ever
//! sees uppercase ASCII candidates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use numerus_core::{decode, encode, run_checks, validate, NumeralError};

/// Numerus: Roman numerals to integers and back
#[derive(Parser)]
#[command(name = "numerus")]
#[command(version)]
#[command(about = "Convert between Roman numerals and integers", long_about = None)]
struct Cli {
    /// Command to run; starts the interactive loop when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Roman numeral to its integer value
    Decode {
        /// The numeral to convert (any case)
        numeral: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Convert an integer (1-3999) to its canonical Roman numeral
    Encode {
        /// The value to convert
        value: u16,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Check whether a string is a well-formed Roman numeral
    Check {
        /// The candidate string (any case)
        numeral: String,

        /// Show the outcome of every structural check
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Decode { numeral, format }) => decode_command(&numeral, format),
        Some(Commands::Encode { value, format }) => encode_command(value, format),
        Some(Commands::Check {
            numeral,
            explain,
            format,
        }) => check_command(&numeral, explain, format),
        None => repl(),
    }
}

/// Trim and upper-case raw numeral input before it reaches the core.
fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

fn decode_command(raw: &str, format: OutputFormat) -> Result<ExitCode> {
    let numeral = normalize(raw);

    match decode(&numeral) {
        Ok(value) => {
            match format {
                OutputFormat::Text => println!("{value}"),
                OutputFormat::Json => {
                    let payload = json!({ "numeral": numeral, "ok": true, "value": value });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
            Ok(ExitCode::from(0))
        }
        Err(err) => report_rejection(&numeral, &err, format),
    }
}

fn encode_command(value: u16, format: OutputFormat) -> Result<ExitCode> {
    match encode(value) {
        Ok(numeral) => {
            match format {
                OutputFormat::Text => println!("{numeral}"),
                OutputFormat::Json => {
                    let payload = json!({ "value": value, "ok": true, "numeral": numeral });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
            Ok(ExitCode::from(0))
        }
        Err(err) => {
            match format {
                OutputFormat::Text => eprintln!("{err}"),
                OutputFormat::Json => {
                    let payload = json!({
                        "value": value,
                        "ok": false,
                        "error": serde_json::to_value(&err)?,
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn report_rejection(numeral: &str, err: &NumeralError, format: OutputFormat) -> Result<ExitCode> {
    match format {
        OutputFormat::Text => eprintln!("{err}"),
        OutputFormat::Json => {
            let payload = json!({
                "numeral": numeral,
                "ok": false,
                "error": serde_json::to_value(err)?,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(ExitCode::from(1))
}

fn check_command(raw: &str, explain: bool, format: OutputFormat) -> Result<ExitCode> {
    let numeral = normalize(raw);
    let verdict = validate(&numeral);

    match format {
        OutputFormat::Json => {
            let checks: Vec<serde_json::Value> = if explain {
                run_checks(&numeral)
                    .iter()
                    .map(|outcome| match &outcome.result {
                        Ok(()) => json!({ "check": outcome.check, "status": "pass" }),
                        Err(e) => json!({
                            "check": outcome.check,
                            "status": "fail",
                            "detail": e.to_string(),
                        }),
                    })
                    .collect()
            } else {
                Vec::new()
            };

            let mut payload = json!({ "numeral": numeral, "valid": verdict.is_ok() });
            if let Err(e) = &verdict {
                payload["reason"] = serde_json::to_value(e)?;
            }
            if explain {
                payload["checks"] = serde_json::Value::Array(checks);
            }
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            match &verdict {
                Ok(()) => println!("VALID"),
                Err(e) => {
                    println!("INVALID");
                    println!();
                    println!("Reason: {e}");
                }
            }

            if explain {
                println!();
                println!("--- Structural Checks ---");
                println!();
                for outcome in run_checks(&numeral) {
                    match &outcome.result {
                        Ok(()) => println!("{}: PASS", outcome.check),
                        Err(e) => println!("{}: FAIL ({e})", outcome.check),
                    }
                }
            }
        }
    }

    Ok(ExitCode::from(if verdict.is_ok() { 0 } else { 1 }))
}

/// The interactive loop the binary starts with no subcommand.
///
/// Reads one command per line. `decode`, `encode` and `check` take an
/// argument; bare input is encoded when it is all digits and decoded
/// otherwise. `clear` wipes the screen, `quit` or end-of-input leaves.
fn repl() -> Result<ExitCode> {
    println!("Roman numerals <=> integer values ({}..={})", numerus_core::MIN_VALUE, numerus_core::MAX_VALUE);
    println!("Commands: decode <numeral>, encode <value>, check <numeral>, clear, help, quit");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("\n>>> ");
        io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            break; // end of input
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, argument) = match input.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (input, ""),
        };

        match (command.to_ascii_lowercase().as_str(), argument) {
            ("quit" | "exit", _) => break,
            ("help", _) => print_repl_help(),
            ("clear", _) => {
                // ANSI clear screen, cursor to home
                print!("\x1b[2J\x1b[H");
                io::stdout().flush().context("failed to flush stdout")?;
            }
            ("decode" | "encode" | "check", "") => {
                println!("usage: {command} <argument>");
            }
            ("decode", numeral) => repl_decode(numeral),
            ("encode", value) => repl_encode(value),
            ("check", numeral) => repl_check(numeral),
            _ => {
                // Bare input: digits encode, anything else decodes.
                if input.chars().all(|c| c.is_ascii_digit()) {
                    repl_encode(input);
                } else {
                    repl_decode(input);
                }
            }
        }
    }

    Ok(ExitCode::from(0))
}

fn print_repl_help() {
    println!("decode <numeral>   numeral to integer value");
    println!("encode <value>     integer value to canonical numeral");
    println!("check <numeral>    report whether the numeral is well-formed");
    println!("clear              clear the screen");
    println!("quit               leave the loop");
    println!("Bare input is encoded when it is all digits, decoded otherwise.");
}

fn repl_decode(raw: &str) {
    let numeral = normalize(raw);
    match decode(&numeral) {
        Ok(value) => println!("{numeral} = {value}"),
        Err(err) => println!("{err}"),
    }
}

fn repl_encode(raw: &str) {
    // Explicit parse result: malformed numeric text never reaches encode.
    match raw.trim().parse::<u16>() {
        Ok(value) => match encode(value) {
            Ok(numeral) => println!("{value} = {numeral}"),
            Err(err) => println!("{err}"),
        },
        Err(_) => println!("{raw:?} is not a whole number"),
    }
}

fn repl_check(raw: &str) {
    let numeral = normalize(raw);
    match validate(&numeral) {
        Ok(()) => println!("{numeral} is a well-formed Roman numeral"),
        Err(err) => println!("{numeral} is not well-formed: {err}"),
    }
}

#![allow(dead_code)]
pub mod config;
pub mod error;
pub mod math;
pub mod rpn;

use clap::Parser;
use config::Config;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Evaluate one Reverse Polish Notation expression read from stdin
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the per-user one
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug)]
enum InputError {
    Eof,
    TooLong(usize),
    Io(io::Error),
}

/// One line, without its trailing newline, of at most `max_len` bytes.
fn read_expression<R: BufRead>(input: R, max_len: usize) -> Result<String, InputError> {
    let mut line = Vec::new();
    // one extra byte for the newline
    let limit = max_len.saturating_add(1) as u64;
    let read = input
        .take(limit)
        .read_until(b'\n', &mut line)
        .map_err(InputError::Io)?;
    if read == 0 {
        return Err(InputError::Eof);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.len() > max_len {
        return Err(InputError::TooLong(max_len));
    }
    String::from_utf8(line).map_err(|e| InputError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    init_tracing(&config);
    debug!(?config, "loaded config");

    let expression = match read_expression(io::stdin().lock(), config.max_input_len) {
        Ok(expression) => expression,
        Err(e) => {
            debug!(?e, "could not read expression");
            match e {
                InputError::TooLong(max) => eprintln!("Input exceeds {max} bytes"),
                InputError::Eof | InputError::Io(_) => eprintln!("Failed to read input"),
            }
            return ExitCode::from(2);
        }
    };

    match rpn::evaluate(&expression) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(position = ?e.position(), "evaluation failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

//! qrgif
//!
//! Ships a JSON document to an offline companion app as an animated GIF of
//! QR codes, and decodes collected frame texts back into the document.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use qrgif_core::diagnostics::error_to_string;

mod decode;
mod encode;
mod logging;

/// QR GIF transport for JSON documents
#[derive(Parser, Debug)]
#[command(name = "qrgif")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "QRGIF_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (plain, json)
    #[arg(long, global = true, env = "QRGIF_LOG_FORMAT", default_value = "plain")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a document into fast and slow QR GIFs
    Encode(encode::EncodeArgs),
    /// Reassemble a document from scanned frame texts
    Decode(decode::DecodeArgs),
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Encode(args) => encode::run(args),
        Command::Decode(args) => decode::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(&cli.log_level, &cli.log_format) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let text = match error_to_string(err) {
                Ok(text) => text,
                Err(err) => format!("{:#}", err),
            };
            eprintln!("error: {}", text);
            ExitCode::FAILURE
        }
    }
}

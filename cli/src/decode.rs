//! `qrgif decode`: frame texts (as scanned) → original payload.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use qrgif_core::reassembly::{Accepted, Collector};
use qrgif_core::telemetry::{Stage, TelemetryTimer};
use qrgif_core::utils::lines_to_frames;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File with one frame text per line; any order, repeats allowed
    pub frames: PathBuf,

    /// Write the payload here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &DecodeArgs) -> Result<()> {
    let mut timer = TelemetryTimer::new();

    let content = timer
        .time(Stage::Read, || fs::read_to_string(&args.frames))
        .with_context(|| format!("failed to read {}", args.frames.display()))?;

    let mut collector = Collector::new();
    timer.time(Stage::Decode, || -> Result<()> {
        for (n, text) in lines_to_frames(&content).into_iter().enumerate() {
            match collector
                .accept(text)
                .with_context(|| format!("rejected frame #{}", n + 1))?
            {
                Accepted::New { index, remaining } => debug!(index, remaining, "frame accepted"),
                Accepted::Repeat { index } => debug!(index, "repeat ignored"),
            }
        }
        Ok(())
    })?;

    info!(
        received = collector.received(),
        expected = collector.expected().unwrap_or(0),
        progress = %collector.progress_map(),
        "frames collected"
    );

    let payload = timer
        .time(Stage::Decompress, || collector.finish())
        .context("failed to reassemble payload")?;

    match &args.output {
        Some(path) => {
            timer
                .time(Stage::Write, || fs::write(path, &payload))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = payload.len(), "payload written");
        }
        None => {
            timer
                .time(Stage::Write, || -> std::io::Result<()> {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&payload)?;
                    stdout.flush()
                })
                .context("failed to write payload to stdout")?;
        }
    }

    for (stage, dur) in timer.stage_times.iter() {
        debug!(%stage, ms = dur.as_secs_f64() * 1_000.0, "stage time");
    }

    Ok(())
}

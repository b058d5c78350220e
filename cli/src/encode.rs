//! `qrgif encode`: JSON document → fast and slow QR GIFs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Args, ValueEnum};
use tracing::{info, warn};

use qrgif_core::constants::{pace_ms, DEFAULT_BORDER, DEFAULT_BOX_SIZE, DEFAULT_LEVEL, WIRE_CHUNK_SIZE};
use qrgif_core::render::{render_gifs, Pace, RenderConfig};
use qrgif_core::telemetry::{Stage, TelemetrySnapshot, TelemetryTimer};
use qrgif_core::utils::{check_json, frames_to_lines};
use qrgif_core::{frame_with, reassemble, FramerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Plain,
    Json,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON document to encode
    #[arg(default_value = "log_lookup.json")]
    pub input: PathBuf,

    /// Directory for the generated GIFs
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output file stem (defaults to the input file stem)
    #[arg(long)]
    pub stem: Option<String>,

    /// Maximum chunk bytes per frame
    #[arg(long, default_value_t = WIRE_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// zlib compression level (0-9)
    #[arg(long, default_value_t = DEFAULT_LEVEL)]
    pub level: u32,

    /// Pixels per QR module
    #[arg(long, default_value_t = DEFAULT_BOX_SIZE)]
    pub box_size: u32,

    /// Quiet zone around each code, in modules
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    pub border: u32,

    /// Per-frame delay of the fast GIF, in milliseconds
    #[arg(long, default_value_t = pace_ms::FAST)]
    pub fast_ms: u32,

    /// Per-frame delay of the slow GIF, in milliseconds
    #[arg(long, default_value_t = pace_ms::SLOW)]
    pub slow_ms: u32,

    /// Skip frame numbers and the title card
    #[arg(long)]
    pub no_labels: bool,

    /// Also write the frame texts, one per line
    #[arg(long)]
    pub frames_out: Option<PathBuf>,

    /// Reassemble the frames before rendering and compare with the input
    #[arg(long)]
    pub verify: bool,

    /// Summary format on stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub report: ReportFormat,
}

impl EncodeArgs {
    pub fn framer_config(&self) -> FramerConfig {
        FramerConfig { chunk_size: self.chunk_size, level: self.level }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            box_size: self.box_size,
            border: self.border,
            fast_delay_ms: self.fast_ms,
            slow_delay_ms: self.slow_ms,
            labels: !self.no_labels,
        }
    }

    fn stem(&self) -> String {
        self.stem.clone().unwrap_or_else(|| {
            self.input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "qrgif".to_owned())
        })
    }
}

pub fn gif_path(out_dir: &Path, stem: &str, pace: Pace) -> PathBuf {
    out_dir.join(format!("{}_{}.gif", stem, pace))
}

pub fn run(args: &EncodeArgs) -> Result<()> {
    let framer_config = args.framer_config();
    let render_config = args.render_config();
    framer_config.validate()?;
    render_config.validate()?;
    if !framer_config.is_wire_default() {
        warn!(
            chunk_size = framer_config.chunk_size,
            level = framer_config.level,
            "non-default framing; output differs from the standard wire format"
        );
    }

    let mut timer = TelemetryTimer::new();

    let payload = timer
        .time(Stage::Read, || fs::read(&args.input))
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    if let Err(e) = check_json(&payload) {
        warn!(input = %args.input.display(), error = %e, "input is not valid JSON; encoding it verbatim");
    }

    let framed = timer.time(Stage::Frame, || frame_with(&payload, &framer_config))?;
    let texts = framed.texts()?;
    info!(raw_size = framed.stats.raw_size, comp_size = framed.stats.comp_size, frames = framed.len(), "payload framed");

    if args.verify {
        let back = timer.time(Stage::Decode, || reassemble(&texts))?;
        ensure!(back == payload, "round trip produced {} bytes that differ from the input", back.len());
        info!("round trip verified");
    }

    let gifs = timer.time(Stage::Render, || render_gifs(&framed, &render_config))?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let stem = args.stem();
    for pace in Pace::ALL {
        let path = gif_path(&args.out_dir, &stem, pace);
        timer
            .time(Stage::Write, || fs::write(&path, gifs.get(pace)))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), delay_ms = render_config.delay_ms(pace), "wrote gif");
    }

    if let Some(path) = &args.frames_out {
        fs::write(path, frames_to_lines(&texts))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote frame texts");
    }

    let stats = framed.stats.clone().with_qr_version(gifs.version);
    match args.report {
        ReportFormat::Plain => println!("{}", stats),
        ReportFormat::Json => println!("{}", TelemetrySnapshot::from(&stats, &timer).to_json()?),
    }

    Ok(())
}

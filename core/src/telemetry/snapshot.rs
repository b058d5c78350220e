//! telemetry/snapshot.rs
//!
//! Immutable size statistics and report snapshot.
//!
//! Design notes:
//! - `FrameStats` replaces the process-wide counters of the framing run; it
//!   is returned by value from `frame()` and never mutated afterwards except
//!   to attach the QR version once rendering has chosen one.
//! - `TelemetrySnapshot` adds stage timings for the `--report` output.

use std::fmt;
use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Payload bytes before compression.
    pub raw_size: usize,
    /// Compressed bytes including the 4-byte size header.
    pub comp_size: usize,
    /// Number of frames (chunk count).
    pub frames: usize,
    /// Highest frame index.
    pub total: u8,
    /// QR symbol version shared by the rendered codes, once known.
    pub qr_version: Option<u8>,
    /// `comp_size / raw_size * 100`, rounded to two decimals.
    pub ratio_pct: f64,
}

impl FrameStats {
    pub fn new(raw_size: usize, comp_size: usize, frames: usize) -> Self {
        debug_assert!(frames >= 1);
        Self {
            raw_size,
            comp_size,
            frames,
            total: frames.saturating_sub(1).min(u8::MAX as usize) as u8,
            qr_version: None,
            ratio_pct: ratio_pct(raw_size, comp_size),
        }
    }

    pub fn with_qr_version(mut self, version: u8) -> Self {
        self.qr_version = Some(version);
        self
    }
}

/// Percentage of `comp` over `raw`, two decimals; 0.0 for an empty payload.
pub fn ratio_pct(raw: usize, comp: usize) -> f64 {
    if raw == 0 {
        return 0.0;
    }
    let pct = comp as f64 / raw as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Operator-facing summary printed after an encode run.
impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QR Gif")?;
        match self.qr_version {
            Some(v) => writeln!(f, "Version {}", v)?,
            None => writeln!(f, "Version n/a")?,
        }
        writeln!(f, "Bytes {} / {} : {}%", self.comp_size, self.raw_size, self.ratio_pct)?;
        write!(f, "Wait for #{}", self.total)
    }
}

/// Stats plus timings, serialized for `--report json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub stats: FrameStats,
    pub stage_times: StageTimes,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(stats: &FrameStats, timer: &TelemetryTimer) -> Self {
        Self {
            stats: stats.clone(),
            stage_times: timer.stage_times.clone(),
            elapsed: timer.elapsed(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

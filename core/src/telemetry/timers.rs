//! telemetry/timers.rs
//! Stage timers for the encode / decode pipeline.

use std::fmt;
use std::time::{Duration, Instant};
use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Read,
    Frame,
    Render,
    Write,
    Decode,
    Decompress,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read       => "read",
            Stage::Frame      => "frame",
            Stage::Render     => "render",
            Stage::Write      => "write",
            Stage::Decode     => "decode",
            Stage::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

/// Accumulated wall time per stage. Ordered so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: BTreeMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    /// Duration in milliseconds (f64).
    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    pub fn total(&self) -> Duration {
        self.times.values().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        self.times.iter().map(|(s, d)| (*s, *d))
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Wall-clock timer that feeds `StageTimes`.
#[derive(Debug)]
pub struct TelemetryTimer {
    start: Instant,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { start: Instant::now(), stage_times: StageTimes::default() }
    }

    /// Run `f`, charge its wall time to `stage` and pass its result through.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = f();
        self.stage_times.add(stage, t0.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

use std::fmt;

use crate::constants::{pace_ms, DEFAULT_BORDER, DEFAULT_BOX_SIZE};

/// GIF timing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pace {
    /// Short per-frame delay for receivers that record a video.
    Fast,
    /// Long per-frame delay for receivers that scan one code at a time.
    Slow,
}

impl Pace {
    pub const ALL: [Pace; 2] = [Pace::Fast, Pace::Slow];

    /// File name suffix, e.g. `log_lookup_fast.gif`.
    pub fn suffix(self) -> &'static str {
        match self {
            Pace::Fast => "fast",
            Pace::Slow => "slow",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per QR module.
    pub box_size: u32,
    /// Quiet zone, in modules.
    pub border: u32,
    pub fast_delay_ms: u32,
    pub slow_delay_ms: u32,
    /// Draw frame numbers and the title card.
    pub labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            fast_delay_ms: pace_ms::FAST,
            slow_delay_ms: pace_ms::SLOW,
            labels: true,
        }
    }
}

impl RenderConfig {
    /// GIF delays are u16 centiseconds.
    pub const MAX_DELAY_MS: u32 = u16::MAX as u32 * 10;
    pub const MAX_BOX_SIZE: u32 = 32;
    pub const MAX_BORDER: u32 = 40;

    pub fn delay_ms(&self, pace: Pace) -> u32 {
        match pace {
            Pace::Fast => self.fast_delay_ms,
            Pace::Slow => self.slow_delay_ms,
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.box_size == 0 || self.box_size > Self::MAX_BOX_SIZE {
            return Err(RenderError::InvalidConfig(format!(
                "box size {} outside 1..={}", self.box_size, Self::MAX_BOX_SIZE
            )));
        }
        if self.border > Self::MAX_BORDER {
            return Err(RenderError::InvalidConfig(format!(
                "border {} exceeds {}", self.border, Self::MAX_BORDER
            )));
        }
        for (name, ms) in [("fast", self.fast_delay_ms), ("slow", self.slow_delay_ms)] {
            if ms < 10 || ms > Self::MAX_DELAY_MS {
                return Err(RenderError::InvalidConfig(format!(
                    "{} delay {} ms outside 10..={}", name, ms, Self::MAX_DELAY_MS
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    InvalidConfig(String),
    NoFrames,
    DataTooLong { index: usize, msg: String },
    CanvasTooLarge { width: u32, height: u32 },
    Gif(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RenderError::*;
        match self {
            InvalidConfig(msg) =>
                write!(f, "invalid render config: {}", msg),
            NoFrames =>
                write!(f, "nothing to render"),
            DataTooLong { index, msg } =>
                write!(f, "frame {} does not fit in a QR symbol: {}", index, msg),
            CanvasTooLarge { width, height } =>
                write!(f, "canvas {}x{} exceeds GIF limits", width, height),
            Gif(msg) =>
                write!(f, "gif encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<gif::EncodingError> for RenderError {
    fn from(e: gif::EncodingError) -> Self {
        RenderError::Gif(e.to_string())
    }
}

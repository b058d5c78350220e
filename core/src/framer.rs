//! framer.rs
//!
//! Payload → frames.
//!
//! Steps:
//! 1. `raw_size = payload.len()`
//! 2. zlib-compress at the configured level (9 for the wire format)
//! 3. prepend `raw_size` as u32 LE
//! 4. split into chunks of at most `chunk_size` bytes
//! 5. `total = chunk_count - 1`
//! 6. prefix each chunk with `[total, index]`; base64 on the way out
//!
//! All sizes travel in the returned `FramedPayload`; nothing is global.

use tracing::debug;

use crate::compression::create_compressor;
use crate::constants::{DEFAULT_LEVEL, MAX_CHUNK_SIZE, WIRE_CHUNK_SIZE};
use crate::framing::{encode_frame, Frame, FrameError};
use crate::segmenting::split_chunks;
use crate::telemetry::FrameStats;
use crate::types::{QrGifError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramerConfig {
    /// Maximum chunk bytes per frame.
    pub chunk_size: usize,
    /// zlib level, 0..=9.
    pub level: u32,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self { chunk_size: WIRE_CHUNK_SIZE, level: DEFAULT_LEVEL }
    }
}

impl FramerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(QrGifError::Config(format!(
                "chunk size {} outside 1..={}", self.chunk_size, MAX_CHUNK_SIZE
            )));
        }
        if self.level > 9 {
            return Err(QrGifError::Config(format!("compression level {} outside 0..=9", self.level)));
        }
        Ok(())
    }

    /// True when this configuration produces the standard wire format.
    pub fn is_wire_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of one framing run.
#[derive(Debug, Clone, PartialEq)]
pub struct FramedPayload {
    /// Frames in ascending index order.
    pub frames: Vec<Frame>,
    pub stats: FrameStats,
}

impl FramedPayload {
    pub fn total(&self) -> u8 {
        self.stats.total
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Base64 texts, one per frame, in index order.
    pub fn texts(&self) -> std::result::Result<Vec<String>, FrameError> {
        self.frames.iter().map(encode_frame).collect()
    }
}

/// Frame `payload` with the wire defaults.
pub fn frame(payload: &[u8]) -> Result<FramedPayload> {
    frame_with(payload, &FramerConfig::default())
}

/// Frame `payload` with an explicit configuration.
pub fn frame_with(payload: &[u8], config: &FramerConfig) -> Result<FramedPayload> {
    config.validate()?;
    if payload.is_empty() {
        return Err(QrGifError::EmptyPayload);
    }

    let mut compressor = create_compressor(config.level)?;
    let mut compressed = Vec::new();
    compressor.compress(payload, &mut compressed)?;

    let frames: Vec<Frame> = split_chunks(&compressed, config.chunk_size)?
        .into_iter()
        .map(Frame::from)
        .collect();

    let stats = FrameStats::new(payload.len(), compressed.len(), frames.len());
    debug!(
        codec = compressor.name(),
        raw_size = stats.raw_size,
        comp_size = stats.comp_size,
        frames = stats.frames,
        "payload framed"
    );

    Ok(FramedPayload { frames, stats })
}

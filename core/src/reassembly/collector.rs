//! reassembly/collector.rs
//!
//! Incremental frame collection for a receiver that scans codes one at a
//! time.
//!
//! Design notes:
//! - The first accepted frame fixes `total`; every later frame must agree.
//! - Re-scanning a code is normal (the slow GIF loops), so an identical
//!   repeat is reported, not rejected. A repeat with different bytes means
//!   two payloads got mixed and is an error.
//! - Nothing is decompressed until `finish()`.

use tracing::trace;

use crate::framing::{decode_frame, Frame, FrameError};
use crate::reassembly::batch::{assemble, missing_indices};
use crate::reassembly::types::{Accepted, ReassemblyError};

#[derive(Debug, Default, Clone)]
pub struct Collector {
    total: Option<u8>,
    slots: Vec<Option<Vec<u8>>>,
    received: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and accept one scanned frame text.
    pub fn accept(&mut self, text: &str) -> Result<Accepted, ReassemblyError> {
        let frame = decode_frame(text)?;
        self.accept_frame(frame)
    }

    /// Accept an already decoded frame.
    ///
    /// A rejected frame leaves the collector unchanged.
    pub fn accept_frame(&mut self, frame: Frame) -> Result<Accepted, ReassemblyError> {
        if frame.index > frame.total {
            return Err(FrameError::IndexOutOfRange { index: frame.index, total: frame.total }.into());
        }
        if frame.chunk.is_empty() {
            return Err(FrameError::EmptyChunk { index: frame.index }.into());
        }
        match self.total {
            Some(t) if t != frame.total => {
                return Err(ReassemblyError::TotalMismatch { expected: t, found: frame.total });
            }
            Some(_) => {}
            None => {
                self.total = Some(frame.total);
                self.slots = vec![None; frame.frame_count()];
            }
        }

        let index = frame.index;
        let slot = &mut self.slots[usize::from(index)];
        match slot {
            Some(existing) if *existing == frame.chunk => {
                trace!(index, "repeat frame");
                Ok(Accepted::Repeat { index })
            }
            Some(_) => Err(ReassemblyError::ConflictingChunk { index }),
            None => {
                *slot = Some(frame.chunk);
                self.received += 1;
                let remaining = self.slots.len() - self.received;
                trace!(index, remaining, "new frame");
                Ok(Accepted::New { index, remaining })
            }
        }
    }

    /// `total` of the set being collected, once the first frame arrived.
    pub fn total(&self) -> Option<u8> {
        self.total
    }

    /// Number of distinct indices received.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Size of the set, once known.
    pub fn expected(&self) -> Option<usize> {
        self.total.map(|t| usize::from(t) + 1)
    }

    pub fn is_complete(&self) -> bool {
        self.total.is_some() && self.received == self.slots.len()
    }

    /// Indices still outstanding, ascending. Empty before the first frame.
    pub fn missing(&self) -> Vec<u8> {
        missing_indices(&self.slots)
    }

    /// One character per index: `#` received, `.` outstanding.
    pub fn progress_map(&self) -> String {
        self.slots
            .iter()
            .map(|s| if s.is_some() { '#' } else { '.' })
            .collect()
    }

    /// Reassemble the payload. Fails with `Incomplete` while indices are
    /// outstanding.
    pub fn finish(self) -> Result<Vec<u8>, ReassemblyError> {
        let total = self.total.ok_or(ReassemblyError::NoFrames)?;
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ReassemblyError::Incomplete { total, missing });
        }
        assemble(self.slots.iter().flatten().map(Vec::as_slice))
    }
}

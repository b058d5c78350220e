use std::fmt;

use crate::compression::CompressionError;
use crate::framing::FrameError;

/// Outcome of feeding one frame to a `Collector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// First time this index was seen.
    New { index: u8, remaining: usize },
    /// Same index and identical chunk as before; nothing changed.
    Repeat { index: u8 },
}

#[derive(Debug)]
pub enum ReassemblyError {
    NoFrames,
    Frame(FrameError),
    Compression(CompressionError),
    TotalMismatch { expected: u8, found: u8 },
    DuplicateIndex { index: u8 },
    ConflictingChunk { index: u8 },
    Incomplete { total: u8, missing: Vec<u8> },
}

impl ReassemblyError {
    /// Missing indices if this is an incomplete-set failure.
    pub fn missing(&self) -> Option<&[u8]> {
        match self {
            ReassemblyError::Incomplete { missing, .. } => Some(missing),
            _ => None,
        }
    }
}

impl From<FrameError> for ReassemblyError {
    fn from(e: FrameError) -> Self {
        ReassemblyError::Frame(e)
    }
}

impl From<CompressionError> for ReassemblyError {
    fn from(e: CompressionError) -> Self {
        ReassemblyError::Compression(e)
    }
}

impl fmt::Display for ReassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ReassemblyError::*;
        match self {
            NoFrames =>
                write!(f, "no frames received"),
            Frame(e) =>
                write!(f, "bad frame: {}", e),
            Compression(e) =>
                write!(f, "payload does not decompress: {}", e),
            TotalMismatch { expected, found } =>
                write!(f, "frame total {} does not match set total {}", found, expected),
            DuplicateIndex { index } =>
                write!(f, "frame index {} appears more than once", index),
            ConflictingChunk { index } =>
                write!(f, "frame index {} received twice with different contents", index),
            Incomplete { total, missing } =>
                write!(f, "incomplete frame set: {} of {} missing {:?}", missing.len(), usize::from(*total) + 1, missing),
        }
    }
}

impl std::error::Error for ReassemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReassemblyError::Frame(e) => Some(e),
            ReassemblyError::Compression(e) => Some(e),
            _ => None,
        }
    }
}

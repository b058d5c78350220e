use std::fmt;

use crate::constants::WIRE_FRAME_PREFIX_LEN;
use crate::segmenting::Chunk;

/// One frame: a chunk plus its addressing bytes.
///
/// Wire layout before base64:
///
/// ```text
/// [ total (1) ]
/// [ index (1) ]
/// [ chunk (N) ]   1 <= N <= chunk size
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub total: u8,
    pub index: u8,
    pub chunk: Vec<u8>,
}

impl Frame {
    pub const PREFIX_LEN: usize = WIRE_FRAME_PREFIX_LEN;

    pub fn new(total: u8, index: u8, chunk: Vec<u8>) -> Self {
        Self { total, index, chunk }
    }

    /// Number of frames in the set this frame belongs to.
    #[inline]
    pub fn frame_count(&self) -> usize {
        usize::from(self.total) + 1
    }

    /// Length of the unencoded wire buffer.
    #[inline]
    pub fn wire_len(&self) -> usize {
        Self::PREFIX_LEN + self.chunk.len()
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView { total: self.total, index: self.index, chunk: &self.chunk }
    }
}

impl From<Chunk<'_>> for Frame {
    fn from(c: Chunk<'_>) -> Self {
        Self::new(c.total, c.index, c.bytes.to_vec())
    }
}

/// Borrowed frame over an already-decoded wire buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    pub total: u8,
    pub index: u8,
    pub chunk: &'a [u8],
}

impl FrameView<'_> {
    pub fn to_owned_frame(&self) -> Frame {
        Frame::new(self.total, self.index, self.chunk.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    InvalidBase64(String),
    Truncated { have: usize },
    EmptyChunk { index: u8 },
    IndexOutOfRange { index: u8, total: u8 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FrameError::*;
        match self {
            InvalidBase64(msg) =>
                write!(f, "frame text is not valid base64: {}", msg),
            Truncated { have } =>
                write!(f, "truncated frame: {} bytes, need at least {}", have, WIRE_FRAME_PREFIX_LEN + 1),
            EmptyChunk { index } =>
                write!(f, "frame {} carries no chunk bytes", index),
            IndexOutOfRange { index, total } =>
                write!(f, "frame index {} exceeds total {}", index, total),
        }
    }
}

impl std::error::Error for FrameError {}

use thiserror::Error;

use crate::{
    compression::CompressionError,
    framing::FrameError,
    reassembly::ReassemblyError,
    render::RenderError,
    segmenting::SegmentError,
};

/// Unified error covering every layer of the encode and decode paths.
/// - `From<T>` impls enable `?` across layers.
/// - Messages stay stable so they can be grepped in logs.
#[derive(Debug, Error)]
pub enum QrGifError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("segment error: {0}")]
    Segment(#[from] SegmentError),

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("reassembly error: {0}")]
    Reassembly(#[from] ReassemblyError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("payload is empty")]
    EmptyPayload,

    /// Generic configuration validation with a descriptive message.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = QrGifError> = std::result::Result<T, E>;

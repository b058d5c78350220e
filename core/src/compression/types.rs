//! compression/types.rs
//! Codec traits and the compression error type.
use std::fmt;

#[derive(Debug)]
pub enum CompressionError {
    InvalidLevel { level: u32 },
    PayloadTooLarge { len: usize },
    Truncated { have: usize, need: usize },
    CodecProcessFailed { codec: String, msg: String },
    LengthMismatch { declared: usize, actual: usize },
    StateError(String),
}

impl From<std::io::Error> for CompressionError {
    fn from(e: std::io::Error) -> Self {
        CompressionError::StateError(e.to_string())
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            InvalidLevel { level } =>
                write!(f, "invalid compression level: {} (expected 0..=9)", level),
            PayloadTooLarge { len } =>
                write!(f, "payload too large for a u32 size header: {} bytes", len),
            Truncated { have, need } =>
                write!(f, "compressed buffer truncated: {} < {}", have, need),
            CodecProcessFailed { codec, msg } =>
                write!(f, "codec {} process failed: {}", codec, msg),
            LengthMismatch { declared, actual } =>
                write!(f, "decoded size {} != declared {}", actual, declared),
            StateError(msg) =>
                write!(f, "compression state error: {}", msg),
        }
    }
}

impl std::error::Error for CompressionError {}

// Require Send so trait objects can cross thread boundaries.
pub trait Compressor: Send {
    /// Compress a whole payload into `out`, header first.
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;

    /// Short codec name for logs.
    fn name(&self) -> &'static str;
}

pub trait Decompressor: Send {
    /// Decompress a header-prefixed buffer into `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

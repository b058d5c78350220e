//! compression/codecs/mod.rs
//! Concrete codecs and their factories.

pub mod deflate;

pub use deflate::*;

use crate::compression::types::{Compressor, Decompressor, CompressionError};

/// Build the wire compressor (zlib) at `level`.
pub fn create_compressor(level: u32) -> Result<Box<dyn Compressor + Send>, CompressionError> {
    DeflateCompressor::new(level)
}

/// Build the wire decompressor (zlib).
pub fn create_decompressor() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
    DeflateDecompressor::new()
}

//! Deflate (zlib wrapper) via flate2.

use std::io::{Read, Write};
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use flate2::{Compression, write::ZlibEncoder, read::ZlibDecoder};

use crate::compression::types::{Compressor, Decompressor, CompressionError};
use crate::constants::WIRE_LENGTH_PREFIX_LEN;

/// Preallocation cap; the declared size comes off the wire and is untrusted.
const MAX_PREALLOC: usize = 1 << 20;

pub struct DeflateCompressor {
    level: Compression,
}

impl DeflateCompressor {
    pub fn new(level: u32) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        if level > 9 {
            return Err(CompressionError::InvalidLevel { level });
        }
        Ok(Box::new(Self { level: Compression::new(level) }))
    }
}

impl Compressor for DeflateCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let raw_size = u32::try_from(input.len())
            .map_err(|_| CompressionError::PayloadTooLarge { len: input.len() })?;

        let mut enc = ZlibEncoder::new(Vec::new(), self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "deflate".into(), msg: e.to_string() })?;
        let compressed = enc.finish()
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "deflate".into(), msg: e.to_string() })?;

        out.reserve(WIRE_LENGTH_PREFIX_LEN + compressed.len());
        out.write_u32::<LittleEndian>(raw_size)?;
        out.extend_from_slice(&compressed);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "deflate"
    }
}

pub struct DeflateDecompressor;

impl DeflateDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        Ok(Box::new(Self))
    }
}

impl Decompressor for DeflateDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.len() < WIRE_LENGTH_PREFIX_LEN {
            return Err(CompressionError::Truncated {
                have: input.len(),
                need: WIRE_LENGTH_PREFIX_LEN,
            });
        }

        let declared = LittleEndian::read_u32(&input[..WIRE_LENGTH_PREFIX_LEN]) as usize;

        // One byte past the declared size is enough to prove a mismatch.
        let limit = declared as u64 + 1;
        let mut dec = ZlibDecoder::new(&input[WIRE_LENGTH_PREFIX_LEN..]).take(limit);
        let mut decompressed = Vec::with_capacity(declared.min(MAX_PREALLOC));
        dec.read_to_end(&mut decompressed)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "deflate".into(), msg: e.to_string() })?;

        if decompressed.len() != declared {
            return Err(CompressionError::LengthMismatch {
                declared,
                actual: decompressed.len(),
            });
        }

        out.extend_from_slice(&decompressed);
        Ok(())
    }
}

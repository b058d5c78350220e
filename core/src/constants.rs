//! Wire constants shared by the framer, the collector and the renderer.
//!
//! Changing any of the `WIRE_*` values breaks compatibility with receivers
//! already in the field.

/// Maximum chunk bytes carried by one frame.
pub const WIRE_CHUNK_SIZE: usize = 200;

/// `[total, index]` prefix in front of every chunk.
pub const WIRE_FRAME_PREFIX_LEN: usize = 2;

/// Little-endian `u32` raw size in front of the compressed stream.
pub const WIRE_LENGTH_PREFIX_LEN: usize = 4;

/// Index and total are single bytes, so a payload can span at most 256 frames.
pub const MAX_FRAMES: usize = u8::MAX as usize + 1;

/// Upper bound accepted for a custom chunk size.
pub const MAX_CHUNK_SIZE: usize = 4096;

/// zlib level used for the wire format (maximum ratio).
pub const DEFAULT_LEVEL: u32 = 9;

/// Frame delays in milliseconds.
pub mod pace_ms {
    pub const FAST: u32 = 100;
    pub const SLOW: u32 = 1400;
}

/// QR raster defaults.
pub const DEFAULT_BOX_SIZE: u32 = 10;
pub const DEFAULT_BORDER: u32 = 10;

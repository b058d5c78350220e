//! Wire framing for scannable codes.
//!
//! Responsibilities:
//! - Define the frame record and its 2-byte `[total, index]` prefix
//! - Encode frames into base64 text (the exact string put into a QR symbol)
//! - Decode scanned text with strict validation
//!
//! Non-responsibilities:
//! - Compression
//! - Chunk ordering / completeness
//! - Rendering

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    Frame,
    FrameView,
    FrameError,
};
pub use encode::{
    encode_frame,
    encode_frame_wire,
};
pub use decode::{
    decode_frame,
    decode_frame_wire,
};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::framing::types::{Frame, FrameError};

/// Encode a frame into its raw wire bytes (`[total][index][chunk]`).
pub fn encode_frame_wire(frame: &Frame) -> Result<Vec<u8>, FrameError> {
    if frame.chunk.is_empty() {
        return Err(FrameError::EmptyChunk { index: frame.index });
    }
    if frame.index > frame.total {
        return Err(FrameError::IndexOutOfRange { index: frame.index, total: frame.total });
    }

    let mut out = Vec::with_capacity(frame.wire_len());
    out.push(frame.total);
    out.push(frame.index);
    out.extend_from_slice(&frame.chunk);

    debug_assert_eq!(out.len(), frame.wire_len());
    Ok(out)
}

/// Encode a frame into the padded standard-alphabet base64 text that ends up
/// inside one QR symbol.
pub fn encode_frame(frame: &Frame) -> Result<String, FrameError> {
    let wire = encode_frame_wire(frame)?;
    Ok(STANDARD.encode(wire))
}

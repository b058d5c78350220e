use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::framing::types::{Frame, FrameError, FrameView};

/// Parse raw wire bytes into a borrowed view.
///
/// Zero-copy: the chunk slice points into `wire`.
#[inline]
pub fn decode_frame_wire(wire: &[u8]) -> Result<FrameView<'_>, FrameError> {
    let [total, index, chunk @ ..] = wire else {
        return Err(FrameError::Truncated { have: wire.len() });
    };
    if chunk.is_empty() {
        return Err(FrameError::Truncated { have: wire.len() });
    }
    if index > total {
        return Err(FrameError::IndexOutOfRange { index: *index, total: *total });
    }

    Ok(FrameView { total: *total, index: *index, chunk })
}

/// Decode one scanned frame text.
///
/// Surrounding whitespace (trailing newlines from scanners or files) is
/// ignored; anything else outside the base64 alphabet is an error.
pub fn decode_frame(text: &str) -> Result<Frame, FrameError> {
    let wire = STANDARD
        .decode(text.trim())
        .map_err(|e| FrameError::InvalidBase64(e.to_string()))?;
    decode_frame_wire(&wire).map(|v| v.to_owned_frame())
}

use tracing::debug;

use crate::compression::create_decompressor;
use crate::framing::{decode_frame, Frame, FrameError};
use crate::reassembly::types::ReassemblyError;
use crate::segmenting::join_chunks;

/// Reassemble a complete set of frame texts, in any order.
pub fn reassemble<S: AsRef<str>>(texts: &[S]) -> Result<Vec<u8>, ReassemblyError> {
    let frames = texts
        .iter()
        .map(|t| decode_frame(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    reassemble_frames(&frames)
}

/// Reassemble a complete set of decoded frames, in any order.
///
/// Every index in `0..=total` must appear exactly once and all frames must
/// agree on `total`.
pub fn reassemble_frames(frames: &[Frame]) -> Result<Vec<u8>, ReassemblyError> {
    let first = frames.first().ok_or(ReassemblyError::NoFrames)?;
    let total = first.total;

    let mut slots: Vec<Option<&[u8]>> = vec![None; usize::from(total) + 1];
    for f in frames {
        if f.total != total {
            return Err(ReassemblyError::TotalMismatch { expected: total, found: f.total });
        }
        if f.index > total {
            return Err(FrameError::IndexOutOfRange { index: f.index, total }.into());
        }
        if f.chunk.is_empty() {
            return Err(FrameError::EmptyChunk { index: f.index }.into());
        }
        let slot = &mut slots[usize::from(f.index)];
        if slot.is_some() {
            return Err(ReassemblyError::DuplicateIndex { index: f.index });
        }
        *slot = Some(f.chunk.as_slice());
    }

    let missing = missing_indices(&slots);
    if !missing.is_empty() {
        return Err(ReassemblyError::Incomplete { total, missing });
    }

    // All slots are filled at this point.
    assemble(slots.into_iter().flatten())
}

/// Indices of empty slots, ascending.
pub(crate) fn missing_indices<T>(slots: &[Option<T>]) -> Vec<u8> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_none())
        .map(|(i, _)| i as u8)
        .collect()
}

/// Join ordered chunks and undo compression, checking the size header.
pub(crate) fn assemble<'a, I>(ordered: I) -> Result<Vec<u8>, ReassemblyError>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let joined = join_chunks(ordered);
    let mut decompressor = create_decompressor()?;
    let mut out = Vec::new();
    decompressor.decompress(&joined, &mut out)?;
    debug!(comp_size = joined.len(), raw_size = out.len(), "payload reassembled");
    Ok(out)
}

use crate::constants::{MAX_CHUNK_SIZE, MAX_FRAMES};
use crate::segmenting::types::{Chunk, SegmentError};

/// Number of chunks `len` bytes occupy at `chunk_size`.
#[inline]
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    len.div_ceil(chunk_size)
}

/// Split `buf` into consecutive chunks of at most `chunk_size` bytes.
///
/// Only the last chunk may be shorter. Fails instead of wrapping when the
/// chunk count exceeds what a one-byte index can address.
pub fn split_chunks(buf: &[u8], chunk_size: usize) -> Result<Vec<Chunk<'_>>, SegmentError> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(SegmentError::InvalidChunkSize { size: chunk_size, max: MAX_CHUNK_SIZE });
    }
    if buf.is_empty() {
        return Err(SegmentError::Empty);
    }

    let count = chunk_count(buf.len(), chunk_size);
    if count > MAX_FRAMES {
        return Err(SegmentError::TooManyChunks { count, max: MAX_FRAMES });
    }

    // count is in 1..=256 here, so both casts are lossless.
    let total = (count - 1) as u8;
    Ok(buf
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, bytes)| Chunk { index: i as u8, total, bytes })
        .collect())
}

/// Concatenate chunk bytes in the order given.
pub fn join_chunks<'a, I>(chunks: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    chunks.into_iter().flatten().copied().collect()
}

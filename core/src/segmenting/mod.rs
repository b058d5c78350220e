//! Chunk segmenting.
//!
//! Responsibilities:
//! - Partition the header-prefixed compressed buffer into fixed-size chunks
//! - Assign `index` / `total` and enforce the single-byte addressing ceiling
//! - Join ordered chunks back into one buffer
//!
//! Non-responsibilities:
//! - Compression
//! - Text encoding
//! - Ordering of received frames (see `reassembly`)

pub mod types;
pub mod split;

pub use types::{
    Chunk,
    SegmentError,
};
pub use split::{
    split_chunks,
    join_chunks,
    chunk_count,
};

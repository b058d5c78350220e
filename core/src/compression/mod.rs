//! compression/mod.rs
//! Whole-payload compression with a raw-size header.
//!
//! Design notes:
//! - Output layout is `[raw_size: u32 LE][zlib stream]`; the header is part of
//!   the compressed buffer and gets chunked along with it.
//! - Decompression trusts the header: output must match it exactly.
//! - Codecs sit behind `Compressor` / `Decompressor` so the framer never
//!   names flate2 directly.

pub mod types;
pub mod codecs;

pub use types::*;
pub use codecs::{create_compressor, create_decompressor};

//! qrgif-core
//!
//! Turns a payload into a sequence of scannable frames and back.
//! No process-level side effects: callers own file IO and logging setup.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Wire layers
pub mod compression;
pub mod segmenting;
pub mod framing;

// Pipelines
pub mod framer;
pub mod reassembly;
pub mod render;

pub mod telemetry;
pub mod diagnostics;

pub use framer::{frame, frame_with, FramedPayload, FramerConfig};
pub use reassembly::{reassemble, reassemble_frames, Collector};
pub use types::{QrGifError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::framer::{frame, frame_with, FramedPayload, FramerConfig};
    pub use crate::framing::{decode_frame, encode_frame, Frame};
    pub use crate::reassembly::{reassemble, Accepted, Collector, ReassemblyError};
    pub use crate::render::{render_gifs, Pace, RenderConfig};
    pub use crate::telemetry::FrameStats;
    pub use crate::types::QrGifError;
}

//! Frames → payload.
//!
//! Two entry points:
//! - `reassemble` / `reassemble_frames`: one-shot, for a complete set where
//!   every index appears exactly once.
//! - `Collector`: incremental, for a receiver scanning codes one at a time
//!   in arbitrary order and possibly more than once.

pub mod types;
pub mod batch;
pub mod collector;

pub use types::{Accepted, ReassemblyError};
pub use batch::{reassemble, reassemble_frames};
pub use collector::Collector;

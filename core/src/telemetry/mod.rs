//! telemetry/mod.rs
//! Size statistics, stage timers and report snapshots.
//!
//! Notes:
//! - The compression ratio is reported as compressed / raw, in percent.
//! - Snapshots are immutable and serde-serializable.

pub mod timers;
pub mod snapshot;

pub use timers::*;
pub use snapshot::*;

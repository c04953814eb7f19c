//! Strata Trace Replay
//!
//! Feeds recorded canvas sessions through the LOD engine, the way a live
//! canvas would: one [`strata_lod::ElementLod`] per element, zoom samples in
//! temporal order, ring and calm changes applied as they were recorded.
//!
//! # Architecture
//!
//! - **Trace**: JSON recording of elements and sampled frames
//! - **Replay**: Steps frames in order, producing per-element decisions
//! - **Summary**: Tier transitions, rejected samples and overlay time per element
//!
//! # Usage
//!
//! ```ignore
//! let trace = Trace::load("session.json")?;
//! let mut replay = Replay::new(trace);
//! while let Some(report) = replay.step() {
//!     println!("{}", serde_json::to_string(&report)?);
//! }
//! ```

mod error;
mod replay;
mod trace;

pub use error::{Error, Result};
pub use replay::{ElementReport, ElementSummary, FrameReport, Replay, ReplaySummary};
pub use trace::{ElementId, Trace, TraceElement, TraceFrame};

//! Strata Level-of-Detail Engine
//!
//! Decides how much of each canvas element to render as the camera zooms.
//!
//! # Pipeline
//!
//! For every element, every sampled frame:
//!
//! ```text
//! zoom + previous tier ──► ZoomLadder::resolve ──► camera tier
//!                                                      │
//!                 ring ──► depth of field ─┐           │
//!          calm offset ──► calm demotion ──┴─► effective tier
//!                                                      │
//!                          VisibilityFlags ◄───────────┤
//!              load ──►    LoadGate        ◄───────────┘
//! ```
//!
//! # Hysteresis
//!
//! Zoom is continuous, tiers are not. Each boundary on the zoom axis has a
//! dead zone; while the zoom stays inside it the tier does not change, so an
//! element never flickers as the camera hovers near a boundary. The resolver
//! is pure in `(zoom, previous_tier)`; callers keep the previous tier per
//! element, typically in an [`ElementLod`].
//!
//! # Demotion
//!
//! Depth of field and calm mode only ever remove detail and saturate at
//! `UltraFar`. They share one step operation, so they commute and compose by
//! summing steps.

mod calm;
mod config;
mod decision;
mod depth_of_field;
mod element;
mod error;
mod load_gate;
mod tier;
mod visibility;
mod zoom;

pub use calm::resolve_calm_offset;
pub use config::LodConfig;
pub use decision::{effective_tier, evaluate, LodDecision, LodInputs};
pub use depth_of_field::{resolve_depth_of_field, Ring, DISCONNECTED_STEPS, MAX_RING};
pub use element::ElementLod;
pub use error::{Error, Result};
pub use load_gate::{resolve_load_gate, CognitiveLoad, LoadGateConfig, LoadGateDecision, DEFAULT_LOAD_THRESHOLD};
pub use tier::{Tier, TIER_COUNT};
pub use visibility::{resolve_visibility, VisibilityFlags, FLAG_COUNT};
pub use zoom::{resolve_tier, Zoom, ZoomLadder, BOUNDARY_COUNT, DEFAULT_BANDS, DEFAULT_THRESHOLDS};

// One boundary between each pair of adjacent tiers.
const _: () = assert!(BOUNDARY_COUNT + 1 == TIER_COUNT);

// Disconnected elements always land on the least detailed tier.
const _: () = assert!(DISCONNECTED_STEPS as usize + 1 >= TIER_COUNT);

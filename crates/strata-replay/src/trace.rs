//! Recorded zoom/focus traces.
//!
//! A trace is what a host would capture from a session: the elements on the
//! canvas with their distance from focus, then one entry per sampled frame.
//!
//! ```json
//! {
//!   "config": { "calmOffset": 1 },
//!   "elements": [
//!     { "id": "note-1" },
//!     { "id": "task-7", "ring": { "hops": 2 } }
//!   ],
//!   "frames": [
//!     { "zoom": 0.42, "load": 0.3 },
//!     { "zoom": 1.2, "rings": { "task-7": "disconnected" } }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_lod::{CognitiveLoad, LodConfig, Ring};

use crate::error::{Error, Result};

/// Identifier of a canvas element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An element as it first appears on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceElement {
    pub id: ElementId,
    /// Distance from focus at the start of the trace
    #[serde(default)]
    pub ring: Ring,
}

/// One sampled frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFrame {
    /// Raw camera zoom. Not validated here; invalid samples hold each element's tier.
    pub zoom: f64,
    /// Cognitive load for this frame
    #[serde(default)]
    pub load: f64,
    /// Overrides the configured calm offset from this frame on
    #[serde(default)]
    pub calm_offset: Option<u32>,
    /// Ring changes, e.g. after the focus moved
    #[serde(default)]
    pub rings: BTreeMap<ElementId, Ring>,
}

/// A full recorded session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub config: LodConfig,
    pub elements: Vec<TraceElement>,
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    /// Parse and validate a trace from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let trace: Self = serde_json::from_str(json)?;
        trace.validate()?;
        Ok(trace)
    }

    /// Read and validate a trace file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check the trace is replayable.
    ///
    /// Zoom samples are deliberately left alone: out-of-range zoom is part
    /// of what a replay exercises.
    pub fn validate(&self) -> Result<()> {
        if self.frames.is_empty() {
            return Err(Error::EmptyTrace);
        }
        self.config.validate()?;

        let mut seen = HashSet::new();
        for element in &self.elements {
            if !seen.insert(&element.id) {
                return Err(Error::DuplicateElement(element.id.0.clone()));
            }
        }

        for (index, frame) in self.frames.iter().enumerate() {
            CognitiveLoad::new(frame.load)?;
            if let Some(id) = frame.rings.keys().find(|id| !seen.contains(id)) {
                return Err(Error::UnknownElement {
                    frame: index,
                    id: id.0.clone(),
                });
            }
        }

        Ok(())
    }
}

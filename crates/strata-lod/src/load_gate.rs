//! Visibility gate for the cognitive-load overlay indicator.
//!
//! Independent of the flag matrix; it drives exactly one indicator.
//!
//! - `UltraFar`: always visible
//! - `Far`, `Mid`: visible when load is strictly above the threshold (0.7)
//! - `Close`, `UltraClose`: never visible

use crate::{Error, Result, Tier};

/// Default strict threshold for the intermediate tiers.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.7;

/// A cognitive-load reading normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CognitiveLoad(f64);

impl CognitiveLoad {
    /// Validate a reading.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidLoad(value))
        }
    }

    /// Clamp a reading into range. NaN reads as no load.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Outcome of the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LoadGateDecision {
    pub is_visible: bool,
    /// Diagnostic text. Not meant to be matched on.
    pub reason: String,
}

/// Gate configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LoadGateRepr", into = "LoadGateRepr")
)]
pub struct LoadGateConfig {
    threshold: f64,
}

impl LoadGateConfig {
    /// Gate with a custom strict threshold in [0, 1].
    pub fn new(threshold: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&threshold) {
            Ok(Self { threshold })
        } else {
            Err(Error::InvalidLoadThreshold(threshold))
        }
    }

    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decide whether the load indicator is shown for an element at `tier`.
    pub fn resolve(&self, tier: Tier, load: f64) -> LoadGateDecision {
        match tier {
            Tier::UltraFar => LoadGateDecision {
                is_visible: true,
                reason: format!("{} tier always shows the load indicator", tier),
            },
            Tier::Far | Tier::Mid => {
                let is_visible = load > self.threshold;
                let relation = if is_visible { "above" } else { "not above" };
                LoadGateDecision {
                    is_visible,
                    reason: format!(
                        "load {:.2} is {} {:.2} at {} tier",
                        load, relation, self.threshold, tier
                    ),
                }
            }
            Tier::Close | Tier::UltraClose => LoadGateDecision {
                is_visible: false,
                reason: format!("{} tier never shows the load indicator", tier),
            },
        }
    }
}

impl Default for LoadGateConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LOAD_THRESHOLD,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LoadGateRepr {
    threshold: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LoadGateRepr> for LoadGateConfig {
    type Error = Error;

    fn try_from(repr: LoadGateRepr) -> Result<Self> {
        Self::new(repr.threshold)
    }
}

#[cfg(feature = "serde")]
impl From<LoadGateConfig> for LoadGateRepr {
    fn from(gate: LoadGateConfig) -> Self {
        Self {
            threshold: gate.threshold,
        }
    }
}

/// Gate against the default threshold.
pub fn resolve_load_gate(tier: Tier, load: f64) -> LoadGateDecision {
    LoadGateConfig::default().resolve(tier, load)
}

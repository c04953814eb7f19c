//! Engine configuration.

use crate::{LoadGateConfig, Result, Tier, ZoomLadder};

/// Everything a host can tune about LOD decisions.
///
/// `LodConfig::default()` is the standard canvas behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LodConfig {
    /// Zoom thresholds and hysteresis bands
    pub ladder: ZoomLadder,
    /// Load indicator gate
    pub load_gate: LoadGateConfig,
    /// Tier an element starts at when it first becomes visible
    pub initial_tier: Tier,
    /// Default calm-mode demotion. `evaluate` reads the per-frame value in
    /// `LodInputs`; use `LodInputs::from_config` to start from this one.
    pub calm_offset: u32,
}

impl LodConfig {
    /// Re-check invariants that deserialization cannot enforce on its own.
    pub fn validate(&self) -> Result<()> {
        ZoomLadder::new(self.ladder.thresholds(), self.ladder.bands())?;
        LoadGateConfig::new(self.load_gate.threshold())?;
        Ok(())
    }
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            ladder: ZoomLadder::DEFAULT,
            load_gate: LoadGateConfig::default(),
            initial_tier: Tier::Mid,
            calm_offset: 0,
        }
    }
}

//! Full per-element evaluation: camera tier, demotions, flags and load gate.

use crate::{LoadGateDecision, LodConfig, Ring, Tier, VisibilityFlags};

/// Everything the host knows about one element on this frame, beyond zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodInputs {
    /// Tier resolved from the camera with hysteresis
    pub camera_tier: Tier,
    /// Distance from the focused element
    pub ring: Ring,
    /// Calm-mode demotion for this frame. This is what `evaluate` applies;
    /// `LodConfig::calm_offset` only seeds it through [`LodInputs::from_config`].
    pub calm_offset: u32,
    /// Current cognitive load, normalized
    pub load: f64,
}

impl LodInputs {
    /// Inputs using the configured calm offset.
    pub const fn from_config(camera_tier: Tier, ring: Ring, load: f64, config: &LodConfig) -> Self {
        Self {
            camera_tier,
            ring,
            calm_offset: config.calm_offset,
            load,
        }
    }
}

/// What the renderer needs for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LodDecision {
    pub flags: VisibilityFlags,
    pub load_indicator: LoadGateDecision,
}

impl LodDecision {
    pub const fn effective_tier(&self) -> Tier {
        self.flags.effective_tier
    }
}

/// Demote the camera tier by depth of field and calm mode together.
///
/// Both demotions use the same saturating step, so applying them as one
/// summed step count matches applying them one after the other, in either
/// order.
pub const fn effective_tier(camera_tier: Tier, ring: Ring, calm_offset: u32) -> Tier {
    camera_tier.demote(ring.demotion_steps().saturating_add(calm_offset))
}

/// Evaluate one element.
///
/// Calm demotion comes from `inputs.calm_offset` alone. Of `config`, only
/// the load gate is read.
pub fn evaluate(inputs: &LodInputs, config: &LodConfig) -> LodDecision {
    let effective = effective_tier(inputs.camera_tier, inputs.ring, inputs.calm_offset);
    LodDecision {
        flags: VisibilityFlags::composed(inputs.camera_tier, effective),
        load_indicator: config.load_gate.resolve(effective, inputs.load),
    }
}

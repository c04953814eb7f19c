//! Per-element LOD state.
//!
//! The resolver is pure; the only thing that must survive between frames is
//! each element's previous tier. `ElementLod` is that state, meant to live on
//! the element's own view-model. It is created when the element first becomes
//! visible and dropped when it leaves the canvas.

use tracing::{debug, warn};

use crate::{LodConfig, Tier, Zoom, ZoomLadder};

/// Caller-side hysteresis memory for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLod {
    camera_tier: Tier,
    transitions: u64,
    rejected_samples: u64,
    /// Set while a run of rejected samples is being held through
    holding: bool,
}

impl ElementLod {
    /// Start at `initial_tier`.
    pub const fn new(initial_tier: Tier) -> Self {
        Self {
            camera_tier: initial_tier,
            transitions: 0,
            rejected_samples: 0,
            holding: false,
        }
    }

    /// Start at the configured initial tier.
    pub const fn with_config(config: &LodConfig) -> Self {
        Self::new(config.initial_tier)
    }

    /// Tier last resolved from the camera, before any demotion.
    pub const fn camera_tier(&self) -> Tier {
        self.camera_tier
    }

    /// How many times the camera tier changed.
    pub const fn transitions(&self) -> u64 {
        self.transitions
    }

    /// How many zoom samples were rejected as out of range.
    pub const fn rejected_samples(&self) -> u64 {
        self.rejected_samples
    }

    /// Whether the last sample was rejected and the tier is being held.
    pub const fn is_holding(&self) -> bool {
        self.holding
    }

    /// Feed the next zoom sample for this element.
    ///
    /// Samples must arrive in temporal order. A sample that is not a finite
    /// positive number is dropped and the previous tier is held. Only the
    /// first rejection of a run is logged at `warn`; the rest go to `debug`
    /// and are still counted.
    pub fn observe_zoom(&mut self, ladder: &ZoomLadder, zoom: f64) -> Tier {
        match Zoom::new(zoom) {
            Ok(zoom) => self.observe(ladder, zoom),
            Err(e) => {
                self.rejected_samples += 1;
                if self.holding {
                    debug!("Still holding {} tier: {}", self.camera_tier, e);
                } else {
                    warn!("Holding {} tier: {}", self.camera_tier, e);
                    self.holding = true;
                }
                self.camera_tier
            }
        }
    }

    /// Feed an already validated zoom sample.
    pub fn observe(&mut self, ladder: &ZoomLadder, zoom: Zoom) -> Tier {
        self.holding = false;
        let next = ladder.resolve(zoom, self.camera_tier);
        if next != self.camera_tier {
            debug!(
                "Tier {} -> {} at zoom {:.3}",
                self.camera_tier,
                next,
                zoom.get()
            );
            self.camera_tier = next;
            self.transitions += 1;
        }
        next
    }
}

impl Default for ElementLod {
    fn default() -> Self {
        Self::with_config(&LodConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_tier() {
        assert_eq!(ElementLod::default().camera_tier(), Tier::Mid);
        assert_eq!(ElementLod::new(Tier::Far).camera_tier(), Tier::Far);
    }

    #[test]
    fn threads_previous_tier_between_samples() {
        let ladder = ZoomLadder::DEFAULT;
        let mut element = ElementLod::new(Tier::UltraFar);

        assert_eq!(element.observe_zoom(&ladder, 0.18), Tier::Far);
        assert_eq!(element.observe_zoom(&ladder, 0.14), Tier::Far);
        assert_eq!(element.observe_zoom(&ladder, 0.12), Tier::UltraFar);
        assert_eq!(element.transitions(), 2);
    }

    #[test]
    fn hovering_does_not_count_transitions() {
        let ladder = ZoomLadder::DEFAULT;
        let mut element = ElementLod::new(Tier::Mid);
        for sample in [0.31, 0.29, 0.31, 0.29, 0.31, 0.29] {
            element.observe_zoom(&ladder, sample);
        }
        assert_eq!(element.camera_tier(), Tier::Mid);
        assert_eq!(element.transitions(), 0);
    }

    #[test]
    fn invalid_samples_hold_tier() {
        let ladder = ZoomLadder::DEFAULT;
        let mut element = ElementLod::new(Tier::Close);
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert_eq!(element.observe_zoom(&ladder, bad), Tier::Close);
        }
        assert_eq!(element.rejected_samples(), 4);
        assert_eq!(element.transitions(), 0);
        assert_eq!(element.observe_zoom(&ladder, 2.0), Tier::UltraClose);
    }

    #[test]
    fn rejection_runs_end_on_valid_sample() {
        let ladder = ZoomLadder::DEFAULT;
        let mut element = ElementLod::new(Tier::Mid);
        assert!(!element.is_holding());

        for _ in 0..1_000 {
            element.observe_zoom(&ladder, f64::NAN);
        }
        assert!(element.is_holding());
        assert_eq!(element.rejected_samples(), 1_000);

        element.observe_zoom(&ladder, 0.40);
        assert!(!element.is_holding());

        element.observe_zoom(&ladder, -1.0);
        assert!(element.is_holding());
        assert_eq!(element.rejected_samples(), 1_001);
        assert_eq!(element.camera_tier(), Tier::Mid);
    }

    #[test]
    fn elements_are_independent() {
        let ladder = ZoomLadder::DEFAULT;
        let mut a = ElementLod::new(Tier::Mid);
        let mut b = ElementLod::new(Tier::Far);

        // Same zoom, different history, both inside the Far/Mid dead zone.
        assert_eq!(a.observe_zoom(&ladder, 0.30), Tier::Mid);
        assert_eq!(b.observe_zoom(&ladder, 0.30), Tier::Far);
    }
}

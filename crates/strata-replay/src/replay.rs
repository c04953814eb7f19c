//! Frame-by-frame replay of a trace through the LOD engine.
//!
//! Each element gets its own [`ElementLod`], so hysteresis state is carried
//! exactly as a live canvas would carry it. Frames are applied strictly in
//! order; hysteresis depends on history, so there is no random seeking.

use serde::{Deserialize, Serialize};
use strata_lod::{evaluate, ElementLod, LodConfig, LodDecision, LodInputs, Ring, Tier};
use tracing::debug;

use crate::trace::{ElementId, Trace, TraceFrame};

/// Decision for one element on one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementReport {
    pub id: ElementId,
    pub ring: Ring,
    #[serde(flatten)]
    pub decision: LodDecision,
}

/// Everything decided on one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: usize,
    pub zoom: f64,
    pub load: f64,
    pub calm_offset: u32,
    pub elements: Vec<ElementReport>,
}

impl FrameReport {
    /// Report for a single element.
    pub fn element(&self, id: &ElementId) -> Option<&ElementReport> {
        self.elements.iter().find(|e| &e.id == id)
    }
}

/// Per-element totals over the frames replayed so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSummary {
    pub id: ElementId,
    pub camera_tier: Tier,
    pub effective_tier: Option<Tier>,
    pub transitions: u64,
    pub rejected_samples: u64,
    pub overlay_frames: usize,
}

/// Totals over the frames replayed so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub frames_played: usize,
    pub total_frames: usize,
    pub elements: Vec<ElementSummary>,
}

#[derive(Debug, Clone)]
struct TrackedElement {
    id: ElementId,
    ring: Ring,
    lod: ElementLod,
    last_effective: Option<Tier>,
    overlay_frames: usize,
}

/// Replays a validated trace.
#[derive(Debug, Clone)]
pub struct Replay {
    config: LodConfig,
    frames: Vec<TraceFrame>,
    initial: Vec<(ElementId, Ring)>,
    elements: Vec<TrackedElement>,
    calm_offset: u32,
    current_frame: usize,
}

impl Replay {
    /// Set up a replay. The trace should already be validated by
    /// [`Trace::from_json`] or [`Trace::load`].
    pub fn new(trace: Trace) -> Self {
        let initial: Vec<_> = trace
            .elements
            .into_iter()
            .map(|e| (e.id, e.ring))
            .collect();
        let elements = Self::fresh_elements(&initial, &trace.config);

        Self {
            calm_offset: trace.config.calm_offset,
            config: trace.config,
            frames: trace.frames,
            initial,
            elements,
            current_frame: 0,
        }
    }

    fn fresh_elements(initial: &[(ElementId, Ring)], config: &LodConfig) -> Vec<TrackedElement> {
        initial
            .iter()
            .map(|(id, ring)| TrackedElement {
                id: id.clone(),
                ring: *ring,
                lod: ElementLod::with_config(config),
                last_effective: None,
                overlay_frames: 0,
            })
            .collect()
    }

    /// Index of the next frame to play.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_frame >= self.frames.len()
    }

    /// Fraction of frames played (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.frames.is_empty() {
            0.0
        } else {
            self.current_frame as f64 / self.frames.len() as f64
        }
    }

    /// Forget all hysteresis state and start over.
    pub fn reset(&mut self) {
        self.elements = Self::fresh_elements(&self.initial, &self.config);
        self.calm_offset = self.config.calm_offset;
        self.current_frame = 0;
    }

    /// Play the next frame.
    pub fn step(&mut self) -> Option<FrameReport> {
        let frame = self.frames.get(self.current_frame)?;
        let index = self.current_frame;

        if let Some(offset) = frame.calm_offset {
            self.calm_offset = offset;
        }

        let mut reports = Vec::with_capacity(self.elements.len());
        for element in &mut self.elements {
            if let Some(ring) = frame.rings.get(&element.id) {
                element.ring = *ring;
            }

            let camera_tier = element.lod.observe_zoom(&self.config.ladder, frame.zoom);
            let decision = evaluate(
                &LodInputs {
                    camera_tier,
                    ring: element.ring,
                    calm_offset: self.calm_offset,
                    load: frame.load,
                },
                &self.config,
            );

            element.last_effective = Some(decision.effective_tier());
            if decision.load_indicator.is_visible {
                element.overlay_frames += 1;
            }

            reports.push(ElementReport {
                id: element.id.clone(),
                ring: element.ring,
                decision,
            });
        }

        debug!(
            "Frame {} at zoom {:.3}: {} elements",
            index,
            frame.zoom,
            reports.len()
        );

        let report = FrameReport {
            frame: index,
            zoom: frame.zoom,
            load: frame.load,
            calm_offset: self.calm_offset,
            elements: reports,
        };
        self.current_frame += 1;
        Some(report)
    }

    /// Play every remaining frame.
    pub fn run_to_end(&mut self) -> Vec<FrameReport> {
        std::iter::from_fn(|| self.step()).collect()
    }

    /// Totals over the frames played so far.
    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            frames_played: self.current_frame,
            total_frames: self.frames.len(),
            elements: self
                .elements
                .iter()
                .map(|e| ElementSummary {
                    id: e.id.clone(),
                    camera_tier: e.lod.camera_tier(),
                    effective_tier: e.last_effective,
                    transitions: e.lod.transitions(),
                    rejected_samples: e.lod.rejected_samples(),
                    overlay_frames: e.overlay_frames,
                })
                .collect(),
        }
    }
}

//! Zoom-to-tier resolution with directional hysteresis.
//!
//! The zoom axis is cut by four increasing boundaries. Each boundary carries
//! a dead zone of `threshold ± band`:
//!
//! ```text
//!  UltraFar | Far | Mid | Close | UltraClose
//!         0.15  0.30  0.55    1.00
//!         ±.02  ±.02  ±.02    ±.03
//! ```
//!
//! Resolution is a five-state machine keyed by the previous tier. Moving to a
//! more detailed tier requires the zoom to exceed that tier's lower boundary
//! *plus* its band; moving to a less detailed tier requires the zoom to drop
//! below that tier's upper boundary *minus* its band. Every tier is tested,
//! not just the neighbours, so a large zoom jump can skip several tiers in a
//! single call. Inside a dead zone nothing changes, which is what keeps an
//! element from flickering while the camera hovers near a boundary.

use crate::{Error, Result, Tier};

/// Number of boundaries on the zoom axis.
pub const BOUNDARY_COUNT: usize = 4;

/// Default boundaries, ascending: UltraFar/Far, Far/Mid, Mid/Close, Close/UltraClose.
pub const DEFAULT_THRESHOLDS: [f64; BOUNDARY_COUNT] = [0.15, 0.30, 0.55, 1.00];

/// Default dead-zone half-widths. The top one is wider since users linger at 100%.
pub const DEFAULT_BANDS: [f64; BOUNDARY_COUNT] = [0.02, 0.02, 0.02, 0.03];

/// A validated camera zoom: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    /// Validate a raw zoom sample.
    ///
    /// Zero, negative, NaN and infinite values are rejected rather than fed
    /// into threshold comparisons whose outcome would be meaningless.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidZoom(value))
        }
    }

    /// The raw zoom scalar.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Zoom {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Boundary index a tier must clear to be entered from below.
const fn lower_boundary(tier: Tier) -> Option<usize> {
    match tier {
        Tier::UltraFar => None,
        Tier::Far => Some(0),
        Tier::Mid => Some(1),
        Tier::Close => Some(2),
        Tier::UltraClose => Some(3),
    }
}

/// Boundary index a zoom must fall under to enter a tier from above.
const fn upper_boundary(tier: Tier) -> Option<usize> {
    match tier {
        Tier::UltraFar => Some(0),
        Tier::Far => Some(1),
        Tier::Mid => Some(2),
        Tier::Close => Some(3),
        Tier::UltraClose => None,
    }
}

/// Default zoom above which each tier is entered from below, Far through UltraClose.
const DEFAULT_PROMOTE_ABOVE: [f64; BOUNDARY_COUNT] = [0.17, 0.32, 0.57, 1.03];

/// Default zoom below which each tier is entered from above, UltraFar through Close.
const DEFAULT_DEMOTE_BELOW: [f64; BOUNDARY_COUNT] = [0.13, 0.28, 0.53, 0.97];

/// Dead-zone edges are kept to this many steps per unit of zoom, so that
/// `0.55 + 0.02` lands on the same edge as a literal `0.57`.
const EDGE_SCALE: f64 = 1e9;

fn edge(value: f64) -> f64 {
    (value * EDGE_SCALE).round() / EDGE_SCALE
}

/// Zoom thresholds and their hysteresis bands.
///
/// The dead-zone edges are derived once on construction; every boundary is
/// then crossed by the same strict comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LadderRepr", into = "LadderRepr")
)]
pub struct ZoomLadder {
    thresholds: [f64; BOUNDARY_COUNT],
    bands: [f64; BOUNDARY_COUNT],
    promote_above: [f64; BOUNDARY_COUNT],
    demote_below: [f64; BOUNDARY_COUNT],
}

impl ZoomLadder {
    /// The canvas' standard ladder.
    pub const DEFAULT: Self = Self {
        thresholds: DEFAULT_THRESHOLDS,
        bands: DEFAULT_BANDS,
        promote_above: DEFAULT_PROMOTE_ABOVE,
        demote_below: DEFAULT_DEMOTE_BELOW,
    };

    /// Build a custom ladder.
    ///
    /// Thresholds must be positive and strictly increasing, bands finite and
    /// non-negative, and neighbouring dead zones must not overlap.
    pub fn new(thresholds: [f64; BOUNDARY_COUNT], bands: [f64; BOUNDARY_COUNT]) -> Result<Self> {
        let ordered = thresholds.iter().all(|t| t.is_finite() && *t > 0.0)
            && thresholds.windows(2).all(|w| w[0] < w[1]);
        if !ordered {
            return Err(Error::UnorderedThresholds(thresholds));
        }

        for (index, &value) in bands.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidBand { index, value });
            }
        }

        let promote_above: [f64; BOUNDARY_COUNT] =
            std::array::from_fn(|b| edge(thresholds[b] + bands[b]));
        let demote_below: [f64; BOUNDARY_COUNT] =
            std::array::from_fn(|b| edge(thresholds[b] - bands[b]));

        for lower in 0..BOUNDARY_COUNT - 1 {
            let upper = lower + 1;
            if promote_above[lower] > demote_below[upper] {
                return Err(Error::OverlappingBands { lower, upper });
            }
        }

        Ok(Self {
            thresholds,
            bands,
            promote_above,
            demote_below,
        })
    }

    /// Boundaries, ascending.
    pub const fn thresholds(&self) -> [f64; BOUNDARY_COUNT] {
        self.thresholds
    }

    /// Dead-zone half-widths, one per boundary.
    pub const fn bands(&self) -> [f64; BOUNDARY_COUNT] {
        self.bands
    }

    /// Zoom that must be exceeded to enter `tier` from a less detailed tier.
    ///
    /// `None` for `UltraFar`, which is never entered by zooming in.
    pub fn promote_above(&self, tier: Tier) -> Option<f64> {
        lower_boundary(tier).map(|b| self.promote_above[b])
    }

    /// Zoom that must be undercut to enter `tier` from a more detailed tier.
    ///
    /// `None` for `UltraClose`, which is never entered by zooming out.
    pub fn demote_below(&self, tier: Tier) -> Option<f64> {
        upper_boundary(tier).map(|b| self.demote_below[b])
    }

    /// Plain thresholding with no memory of the previous tier.
    ///
    /// Only meaningful as a first guess or a reference; per-frame resolution
    /// should go through [`ZoomLadder::resolve`].
    pub fn classify(&self, zoom: Zoom) -> Tier {
        let z = zoom.get();
        match self.thresholds.iter().position(|&t| z < t) {
            Some(0) => Tier::UltraFar,
            Some(1) => Tier::Far,
            Some(2) => Tier::Mid,
            Some(_) => Tier::Close,
            None => Tier::UltraClose,
        }
    }

    /// Resolve the next tier from the current zoom and the previous tier.
    ///
    /// A boundary only counts as crossed once the zoom is strictly past its
    /// band; sitting exactly on a dead-zone edge changes nothing. Pure in
    /// `(zoom, previous)`. Callers keep `previous` per element and must feed
    /// samples for one element in temporal order.
    pub fn resolve(&self, zoom: Zoom, previous: Tier) -> Tier {
        let z = zoom.get();
        let current = previous.index();

        // Toward more detail: the most detailed tier whose entry edge is passed.
        for &tier in &Tier::ALL[..current] {
            if self.promote_above(tier).is_some_and(|enter| z > enter) {
                return tier;
            }
        }

        // Toward less detail: the least detailed tier whose entry edge is undercut.
        for &tier in Tier::ALL[current + 1..].iter().rev() {
            if self.demote_below(tier).is_some_and(|enter| z < enter) {
                return tier;
            }
        }

        previous
    }
}

impl Default for ZoomLadder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LadderRepr {
    thresholds: [f64; BOUNDARY_COUNT],
    bands: [f64; BOUNDARY_COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<LadderRepr> for ZoomLadder {
    type Error = Error;

    fn try_from(repr: LadderRepr) -> Result<Self> {
        Self::new(repr.thresholds, repr.bands)
    }
}

#[cfg(feature = "serde")]
impl From<ZoomLadder> for LadderRepr {
    fn from(ladder: ZoomLadder) -> Self {
        Self {
            thresholds: ladder.thresholds,
            bands: ladder.bands,
        }
    }
}

/// Resolve a tier against the default ladder.
///
/// ```
/// use strata_lod::{resolve_tier, Tier, Zoom};
///
/// let zoom = Zoom::new(2.0).unwrap();
/// assert_eq!(resolve_tier(zoom, Tier::UltraFar), Tier::UltraClose);
/// ```
pub fn resolve_tier(zoom: Zoom, previous: Tier) -> Tier {
    ZoomLadder::DEFAULT.resolve(zoom, previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn z(value: f64) -> Zoom {
        Zoom::new(value).unwrap()
    }

    #[test]
    fn zoom_rejects_out_of_range() {
        for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Zoom::new(bad).is_err(), "{} should be rejected", bad);
        }
        assert_eq!(Zoom::new(0.5).map(Zoom::get), Ok(0.5));
        assert!(Zoom::try_from(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn lowest_boundary_with_dead_zone() {
        assert_eq!(resolve_tier(z(0.05), Tier::UltraFar), Tier::UltraFar);
        assert_eq!(resolve_tier(z(0.18), Tier::UltraFar), Tier::Far);
        assert_eq!(resolve_tier(z(0.14), Tier::Far), Tier::Far);
        assert_eq!(resolve_tier(z(0.12), Tier::Far), Tier::UltraFar);
    }

    #[test]
    fn single_call_can_jump_several_tiers() {
        assert_eq!(resolve_tier(z(2.0), Tier::UltraFar), Tier::UltraClose);
        assert_eq!(resolve_tier(z(0.05), Tier::UltraClose), Tier::UltraFar);
        assert_eq!(resolve_tier(z(0.7), Tier::UltraFar), Tier::Close);
        assert_eq!(resolve_tier(z(0.2), Tier::UltraClose), Tier::Far);
    }

    #[test]
    fn jump_stops_short_of_a_dead_zone() {
        // 0.56 sits inside the Mid/Close dead zone: the jump lands on Mid.
        assert_eq!(resolve_tier(z(0.56), Tier::UltraFar), Tier::Mid);
        // 0.99 sits inside the Close/UltraClose dead zone coming down.
        assert_eq!(resolve_tier(z(0.99), Tier::UltraClose), Tier::UltraClose);
        assert_eq!(resolve_tier(z(0.99), Tier::Far), Tier::Close);
    }

    #[test]
    fn oscillation_inside_band_is_stable() {
        let mut tier = Tier::Mid;
        for sample in [0.31, 0.29, 0.31, 0.29, 0.31, 0.29] {
            tier = resolve_tier(z(sample), tier);
            assert_eq!(tier, Tier::Mid, "flickered at {}", sample);
        }
    }

    #[test]
    fn top_band_is_wider() {
        // 1.025 clears a 0.02 band but not the 0.03 one.
        assert_eq!(resolve_tier(z(1.025), Tier::Close), Tier::Close);
        assert_eq!(resolve_tier(z(1.04), Tier::Close), Tier::UltraClose);
        assert_eq!(resolve_tier(z(0.975), Tier::UltraClose), Tier::UltraClose);
        assert_eq!(resolve_tier(z(0.96), Tier::UltraClose), Tier::Close);
    }

    #[test]
    fn stays_put_between_boundaries() {
        for tier in Tier::ALL {
            let centre = match tier {
                Tier::UltraFar => 0.05,
                Tier::Far => 0.22,
                Tier::Mid => 0.42,
                Tier::Close => 0.75,
                Tier::UltraClose => 3.0,
            };
            assert_eq!(resolve_tier(z(centre), tier), tier);
        }
    }

    #[test]
    fn entry_points() {
        let ladder = ZoomLadder::DEFAULT;
        assert_eq!(ladder.promote_above(Tier::UltraFar), None);
        assert_eq!(ladder.demote_below(Tier::UltraClose), None);
        assert_eq!(ladder.promote_above(Tier::Close), Some(0.57));
        assert_eq!(ladder.promote_above(Tier::UltraClose), Some(1.03));
        assert_eq!(ladder.demote_below(Tier::UltraFar), Some(0.13));
    }

    #[test]
    fn exact_edges_hold_on_every_boundary() {
        // (previous, edge, just past the edge, target)
        let promotions = [
            (Tier::UltraFar, 0.17, 0.1701, Tier::Far),
            (Tier::Far, 0.32, 0.3201, Tier::Mid),
            (Tier::Mid, 0.57, 0.5701, Tier::Close),
            (Tier::Close, 1.03, 1.0301, Tier::UltraClose),
        ];
        for (previous, at, past, target) in promotions {
            assert_eq!(resolve_tier(z(at), previous), previous, "promoted on edge {}", at);
            assert_eq!(resolve_tier(z(past), previous), target, "held past edge {}", at);
        }

        let demotions = [
            (Tier::Far, 0.13, 0.1299, Tier::UltraFar),
            (Tier::Mid, 0.28, 0.2799, Tier::Far),
            (Tier::Close, 0.53, 0.5299, Tier::Mid),
            (Tier::UltraClose, 0.97, 0.9699, Tier::Close),
        ];
        for (previous, at, past, target) in demotions {
            assert_eq!(resolve_tier(z(at), previous), previous, "demoted on edge {}", at);
            assert_eq!(resolve_tier(z(past), previous), target, "held past edge {}", at);
        }
    }

    #[test]
    fn computed_edges_match_literal_edges() {
        let built = ZoomLadder::new(DEFAULT_THRESHOLDS, DEFAULT_BANDS).unwrap();
        assert_eq!(built, ZoomLadder::DEFAULT);
        for tier in Tier::ALL {
            assert_eq!(built.promote_above(tier), ZoomLadder::DEFAULT.promote_above(tier));
            assert_eq!(built.demote_below(tier), ZoomLadder::DEFAULT.demote_below(tier));
        }
        assert_eq!(built.resolve(z(0.57), Tier::Mid), Tier::Mid);
    }

    #[test]
    fn classify_plain_thresholds() {
        let ladder = ZoomLadder::default();
        assert_eq!(ladder.classify(z(0.1)), Tier::UltraFar);
        assert_eq!(ladder.classify(z(0.15)), Tier::Far);
        assert_eq!(ladder.classify(z(0.3)), Tier::Mid);
        assert_eq!(ladder.classify(z(0.6)), Tier::Close);
        assert_eq!(ladder.classify(z(1.0)), Tier::UltraClose);
    }

    #[test]
    fn ladder_validation() {
        assert_eq!(
            ZoomLadder::new(DEFAULT_THRESHOLDS, DEFAULT_BANDS),
            Ok(ZoomLadder::DEFAULT)
        );
        assert!(matches!(
            ZoomLadder::new([0.3, 0.15, 0.55, 1.0], DEFAULT_BANDS),
            Err(Error::UnorderedThresholds(_))
        ));
        assert!(matches!(
            ZoomLadder::new([0.0, 0.3, 0.55, 1.0], DEFAULT_BANDS),
            Err(Error::UnorderedThresholds(_))
        ));
        assert_eq!(
            ZoomLadder::new(DEFAULT_THRESHOLDS, [0.02, -0.01, 0.02, 0.03]),
            Err(Error::InvalidBand { index: 1, value: -0.01 })
        );
        assert_eq!(
            ZoomLadder::new(DEFAULT_THRESHOLDS, [0.02, 0.02, 0.25, 0.03]),
            Err(Error::OverlappingBands { lower: 1, upper: 2 })
        );
    }

    #[test]
    fn custom_ladder_resolves() {
        let ladder = ZoomLadder::new([1.0, 2.0, 3.0, 4.0], [0.0; 4]).unwrap();
        assert_eq!(ladder.resolve(z(2.5), Tier::UltraFar), Tier::Mid);
        assert_eq!(ladder.resolve(z(1.5), Tier::UltraFar), Tier::Far);
        assert_eq!(ladder.resolve(z(4.0), Tier::Mid), Tier::Close);
        assert_eq!(ladder.resolve(z(4.5), Tier::Mid), Tier::UltraClose);
        assert_eq!(ladder.resolve(z(0.5), Tier::UltraClose), Tier::UltraFar);
    }

    fn any_tier() -> impl Strategy<Value = Tier> {
        (0usize..5).prop_map(Tier::from_index)
    }

    fn outside_every_band(value: f64) -> bool {
        DEFAULT_THRESHOLDS
            .iter()
            .zip(DEFAULT_BANDS.iter())
            .all(|(t, b)| (value - t).abs() > b + 1e-9)
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent(value in 0.001f64..5.0, previous in any_tier()) {
            let zoom = z(value);
            let once = resolve_tier(zoom, previous);
            prop_assert_eq!(resolve_tier(zoom, once), once);
        }

        #[test]
        fn outside_bands_history_is_irrelevant(value in 0.001f64..5.0, previous in any_tier()) {
            prop_assume!(outside_every_band(value));
            let zoom = z(value);
            prop_assert_eq!(resolve_tier(zoom, previous), ZoomLadder::DEFAULT.classify(zoom));
        }

        #[test]
        fn result_never_strays_far_from_plain_threshold(value in 0.001f64..5.0, previous in any_tier()) {
            // Hysteresis may hold a neighbouring tier, never one two steps away.
            let zoom = z(value);
            let held = resolve_tier(zoom, previous).index() as i64;
            let plain = ZoomLadder::DEFAULT.classify(zoom).index() as i64;
            prop_assert!((held - plain).abs() <= 1);
        }

        #[test]
        fn zooming_in_never_loses_detail(
            a in 0.001f64..5.0,
            b in 0.001f64..5.0,
            previous in any_tier(),
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let at_lo = resolve_tier(z(lo), previous);
            let at_hi = resolve_tier(z(hi), previous);
            prop_assert!(!at_lo.is_more_detailed_than(at_hi));
        }
    }
}

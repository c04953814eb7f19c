//! Depth-of-field demotion by graph distance from focus.
//!
//! Elements further from the focused element lose detail:
//!
//! | ring         | steps |
//! |--------------|-------|
//! | 0 (focus)    | 0     |
//! | 1            | 1     |
//! | 2            | 2     |
//! | 3            | 4     |
//! | disconnected | 4     |
//!
//! Four steps from any tier lands on `UltraFar`. Distances beyond 3 are not
//! expected from the ring producer; they are treated as disconnected.

use std::fmt;

use crate::Tier;

/// Largest ring the graph-distance producer reports.
pub const MAX_RING: u8 = 3;

/// Demotion applied to anything outside the rings.
pub const DISCONNECTED_STEPS: u32 = 4;

/// Graph distance from the focused element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RingRepr", into = "RingRepr")
)]
pub enum Ring {
    /// Hops from focus. Values above [`MAX_RING`] demote like `Disconnected`.
    Hops(u8),
    /// Not reachable from focus.
    Disconnected,
}

impl Ring {
    /// The focused element itself.
    pub const FOCUS: Self = Self::Hops(0);

    /// Ring from an optional hop count, `None` meaning unreachable.
    pub fn from_hops(hops: Option<usize>) -> Self {
        match hops {
            Some(h) => u8::try_from(h).map_or(Self::Disconnected, Self::Hops),
            None => Self::Disconnected,
        }
    }

    /// Tiers to demote by.
    pub const fn demotion_steps(self) -> u32 {
        match self {
            Self::Hops(0) => 0,
            Self::Hops(1) => 1,
            Self::Hops(2) => 2,
            Self::Hops(3) => 4,
            Self::Hops(_) | Self::Disconnected => DISCONNECTED_STEPS,
        }
    }

    /// Whether the element is within the reported rings.
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Hops(h) if h <= MAX_RING)
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::FOCUS
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hops(h) => write!(f, "ring {}", h),
            Self::Disconnected => f.write_str("disconnected"),
        }
    }
}

/// Wire form of [`Ring`]. Hop counts that do not fit a `u8`, negative ones
/// included, read as `Disconnected` instead of failing the whole document.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RingRepr {
    Hops(i64),
    Disconnected,
}

#[cfg(feature = "serde")]
impl From<RingRepr> for Ring {
    fn from(repr: RingRepr) -> Self {
        match repr {
            RingRepr::Hops(h) => Self::from_hops(usize::try_from(h).ok()),
            RingRepr::Disconnected => Self::Disconnected,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Ring> for RingRepr {
    fn from(ring: Ring) -> Self {
        match ring {
            Ring::Hops(h) => Self::Hops(i64::from(h)),
            Ring::Disconnected => Self::Disconnected,
        }
    }
}

/// Demote `base` according to its distance from focus.
///
/// ```
/// use strata_lod::{resolve_depth_of_field, Ring, Tier};
///
/// assert_eq!(resolve_depth_of_field(Tier::UltraClose, Ring::Hops(1)), Tier::Close);
/// assert_eq!(resolve_depth_of_field(Tier::UltraClose, Ring::Disconnected), Tier::UltraFar);
/// ```
pub const fn resolve_depth_of_field(base: Tier, ring: Ring) -> Tier {
    base.demote(ring.demotion_steps())
}

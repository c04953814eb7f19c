//! Discrete detail tiers.
//!
//! Tiers form a closed scale ordered from most detail to least:
//!
//! ```text
//! UltraClose > Close > Mid > Far > UltraFar
//! index:  0      1      2     3      4
//! ```
//!
//! The only arithmetic defined on the scale is saturating demotion: move
//! N steps toward `UltraFar` and stop there.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// How much of an element to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Tier {
    /// Full detail with the expanded toolbar
    UltraClose,
    /// Full content and controls
    Close,
    /// Header, title and summary blurb
    Mid,
    /// Header, title and badges only
    Far,
    /// Element folds into its cluster summary
    UltraFar,
}

/// Number of tiers on the scale.
pub const TIER_COUNT: usize = 5;

impl Tier {
    /// All tiers, most detail first.
    pub const ALL: [Self; TIER_COUNT] = [
        Self::UltraClose,
        Self::Close,
        Self::Mid,
        Self::Far,
        Self::UltraFar,
    ];

    /// The tier with the most detail.
    pub const MOST_DETAIL: Self = Self::UltraClose;

    /// The tier with the least detail. Demotion saturates here.
    pub const LEAST_DETAIL: Self = Self::UltraFar;

    /// Position on the scale, 0 for `UltraClose` through 4 for `UltraFar`.
    pub const fn index(self) -> usize {
        match self {
            Self::UltraClose => 0,
            Self::Close => 1,
            Self::Mid => 2,
            Self::Far => 3,
            Self::UltraFar => 4,
        }
    }

    /// Tier at a scale position, clamping past the end to `UltraFar`.
    pub const fn from_index(index: usize) -> Self {
        if index >= TIER_COUNT {
            Self::LEAST_DETAIL
        } else {
            Self::ALL[index]
        }
    }

    /// Move `steps` tiers toward `UltraFar`, saturating at the end.
    ///
    /// ```
    /// use strata_lod::Tier;
    ///
    /// assert_eq!(Tier::UltraClose.demote(1), Tier::Close);
    /// assert_eq!(Tier::Far.demote(10), Tier::UltraFar);
    /// assert_eq!(Tier::Mid.demote(0), Tier::Mid);
    /// ```
    pub const fn demote(self, steps: u32) -> Self {
        // Anything beyond the scale saturates, so no need to widen first.
        let steps = if steps as usize >= TIER_COUNT {
            TIER_COUNT
        } else {
            steps as usize
        };
        Self::from_index(self.index() + steps)
    }

    /// Whether `self` renders strictly more detail than `other`.
    pub const fn is_more_detailed_than(self, other: Self) -> bool {
        self.index() < other.index()
    }

    /// Number of steps from `self` down to `other`, zero if `other` is more detailed.
    pub const fn steps_to(self, other: Self) -> u32 {
        other.index().saturating_sub(self.index()) as u32
    }

    /// Stable kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::UltraClose => "ultra-close",
            Self::Close => "close",
            Self::Mid => "mid",
            Self::Far => "far",
            Self::UltraFar => "ultra-far",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "ultraclose" => Ok(Self::UltraClose),
            "close" => Ok(Self::Close),
            "mid" => Ok(Self::Mid),
            "far" => Ok(Self::Far),
            "ultrafar" => Ok(Self::UltraFar),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_all() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(Tier::from_index(i), *tier);
        }
    }

    #[test]
    fn from_index_clamps() {
        assert_eq!(Tier::from_index(5), Tier::UltraFar);
        assert_eq!(Tier::from_index(usize::MAX), Tier::UltraFar);
    }

    #[test]
    fn demote_saturates() {
        assert_eq!(Tier::UltraClose.demote(4), Tier::UltraFar);
        assert_eq!(Tier::UltraClose.demote(5), Tier::UltraFar);
        assert_eq!(Tier::Close.demote(u32::MAX), Tier::UltraFar);
        assert_eq!(Tier::UltraFar.demote(1), Tier::UltraFar);
    }

    #[test]
    fn detail_ordering() {
        assert!(Tier::UltraClose.is_more_detailed_than(Tier::Close));
        assert!(Tier::Far.is_more_detailed_than(Tier::UltraFar));
        assert!(!Tier::Mid.is_more_detailed_than(Tier::Mid));
        assert!(!Tier::UltraFar.is_more_detailed_than(Tier::UltraClose));
    }

    #[test]
    fn steps_between_tiers() {
        assert_eq!(Tier::UltraClose.steps_to(Tier::UltraFar), 4);
        assert_eq!(Tier::Mid.steps_to(Tier::Far), 1);
        assert_eq!(Tier::Far.steps_to(Tier::Mid), 0);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("ultra-close".parse::<Tier>(), Ok(Tier::UltraClose));
        assert_eq!("ultra_far".parse::<Tier>(), Ok(Tier::UltraFar));
        assert_eq!("UltraFar".parse::<Tier>(), Ok(Tier::UltraFar));
        assert_eq!(" Mid ".parse::<Tier>(), Ok(Tier::Mid));
        assert!(matches!("medium".parse::<Tier>(), Err(Error::UnknownTier(_))));
    }

    #[test]
    fn display_matches_name() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string(), tier.name());
            assert_eq!(tier.name().parse::<Tier>(), Ok(tier));
        }
    }
}

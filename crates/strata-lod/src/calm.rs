//! Calm-mode demotion.
//!
//! A user preference that drops every element by a fixed number of tiers.
//! Uses the same saturating step as depth of field, so the two compose by
//! adding their step counts in either order.

use crate::Tier;

/// Demote `base` by the user's calm offset. An offset of 0 is the identity.
pub const fn resolve_calm_offset(base: Tier, offset: u32) -> Tier {
    base.demote(offset)
}

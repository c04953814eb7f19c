//! Tier to render-flag matrix.
//!
//! | Flag                 | UltraFar | Far | Mid | Close | UltraClose |
//! |----------------------|:--------:|:---:|:---:|:-----:|:----------:|
//! | cluster_summary      | ✓        |     |     |       |            |
//! | header               |          | ✓   | ✓   | ✓     | ✓          |
//! | title                |          | ✓   | ✓   | ✓     | ✓          |
//! | badges               |          | ✓   | ✓   | ✓     | ✓          |
//! | lede                 |          |     | ✓   |       |            |
//! | footer               |          |     | ✓   | ✓     | ✓          |
//! | content              |          |     |     | ✓     | ✓          |
//! | embedded_content     |          |     |     | ✓     | ✓          |
//! | interactive_controls |          |     |     | ✓     | ✓          |
//! | expanded_toolbar     |          |     |     |       | ✓          |
//!
//! Every flag except `lede` is non-decreasing with detail. The lede is a
//! summary blurb that only exists at `Mid`; once full content is shown it
//! goes away again.

use crate::Tier;

/// Which parts of an element the renderer should mount.
///
/// A pure function of tier; holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VisibilityFlags {
    /// Tier the camera resolved before any demotion
    pub tier: Tier,
    /// Tier the flags were derived from
    pub effective_tier: Tier,
    pub content: bool,
    pub title: bool,
    pub badges: bool,
    pub lede: bool,
    pub cluster_summary: bool,
    pub embedded_content: bool,
    pub expanded_toolbar: bool,
    pub interactive_controls: bool,
    pub footer: bool,
    pub header: bool,
}

/// Number of boolean flags in [`VisibilityFlags`].
pub const FLAG_COUNT: usize = 10;

impl VisibilityFlags {
    /// Flags for a tier with no demotion applied: both tier fields echo `tier`.
    pub const fn for_tier(tier: Tier) -> Self {
        Self::composed(tier, tier)
    }

    /// Flags derived from `effective_tier`, remembering the camera's own tier.
    pub const fn composed(camera_tier: Tier, effective_tier: Tier) -> Self {
        let (cluster_summary, header, title, badges, lede, footer, content, embedded, controls, toolbar) =
            match effective_tier {
                Tier::UltraFar => (true, false, false, false, false, false, false, false, false, false),
                Tier::Far => (false, true, true, true, false, false, false, false, false, false),
                Tier::Mid => (false, true, true, true, true, true, false, false, false, false),
                Tier::Close => (false, true, true, true, false, true, true, true, true, false),
                Tier::UltraClose => (false, true, true, true, false, true, true, true, true, true),
            };

        Self {
            tier: camera_tier,
            effective_tier,
            content,
            title,
            badges,
            lede,
            cluster_summary,
            embedded_content: embedded,
            expanded_toolbar: toolbar,
            interactive_controls: controls,
            footer,
            header,
        }
    }

    /// Whether some demotion moved the flags away from the camera's tier.
    pub fn is_demoted(&self) -> bool {
        self.tier != self.effective_tier
    }

    /// The ten flags by name, in declaration order.
    pub fn named(&self) -> [(&'static str, bool); FLAG_COUNT] {
        [
            ("content", self.content),
            ("title", self.title),
            ("badges", self.badges),
            ("lede", self.lede),
            ("cluster-summary", self.cluster_summary),
            ("embedded-content", self.embedded_content),
            ("expanded-toolbar", self.expanded_toolbar),
            ("interactive-controls", self.interactive_controls),
            ("footer", self.footer),
            ("header", self.header),
        ]
    }

    /// Number of flags set.
    pub fn visible_count(&self) -> usize {
        self.named().iter().filter(|(_, on)| *on).count()
    }
}

impl From<Tier> for VisibilityFlags {
    fn from(tier: Tier) -> Self {
        Self::for_tier(tier)
    }
}

/// Render flags for a tier.
pub fn resolve_visibility(tier: Tier) -> VisibilityFlags {
    VisibilityFlags::for_tier(tier)
}

//! Noble tiles.
//!
//! Nobles are never bought. A noble visits a player whose permanent bonuses
//! meet every one of its requirements; gems in hand do not count.

use serde::{Deserialize, Serialize};

use crate::core::gems::ColorCounts;

/// Unique identifier for a noble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NobleId(pub u8);

impl NobleId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for NobleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Noble({})", self.0)
    }
}

/// Static noble definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Noble {
    pub id: NobleId,

    /// Bonus count required per color.
    pub requirements: ColorCounts,

    /// Prestige granted when the noble visits.
    pub prestige: u32,
}

impl Noble {
    #[must_use]
    pub fn new(id: NobleId, requirements: ColorCounts, prestige: u32) -> Self {
        Self {
            id,
            requirements,
            prestige,
        }
    }

    /// Check if a set of permanent bonuses attracts this noble.
    #[must_use]
    pub fn is_attracted_by(&self, bonuses: &ColorCounts) -> bool {
        bonuses.covers(&self.requirements)
    }
}

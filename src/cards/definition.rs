//! Development card definitions - static card data.
//!
//! A `DevelopmentCard` never changes once built. Games refer to cards by
//! `CardId` and look the definition up in the `CardRegistry`; the id is what
//! moves between deck, market, reserve and tableau.

use serde::{Deserialize, Serialize};

use crate::core::gems::{ColorCounts, GemColor};

/// Unique identifier for a development card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card strength level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// All tiers, cheapest first.
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Zero-based position, for indexing per-tier arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The printed level, 1 to 3.
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8 + 1
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.level())
    }
}

/// Static development card definition.
///
/// ## Example
///
/// ```
/// use rust_splendor::cards::{CardId, DevelopmentCard, Tier};
/// use rust_splendor::core::{ColorCounts, GemColor};
///
/// let card = DevelopmentCard::new(
///     CardId::new(1),
///     Tier::One,
///     ColorCounts::zero().with(GemColor::Emerald, 3),
///     GemColor::Onyx,
/// )
/// .with_prestige(1);
///
/// assert_eq!(card.cost[GemColor::Emerald], 3);
/// assert_eq!(card.prestige, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DevelopmentCard {
    /// Unique identifier.
    pub id: CardId,

    /// Strength level.
    pub tier: Tier,

    /// Printed cost per color, before bonuses.
    pub cost: ColorCounts,

    /// Color of the permanent bonus granted on purchase.
    pub bonus: GemColor,

    /// Prestige points granted on purchase (0 to 5).
    pub prestige: u32,
}

impl DevelopmentCard {
    /// Create a card worth no prestige.
    #[must_use]
    pub fn new(id: CardId, tier: Tier, cost: ColorCounts, bonus: GemColor) -> Self {
        Self {
            id,
            tier,
            cost,
            bonus,
            prestige: 0,
        }
    }

    /// Set prestige (builder pattern).
    #[must_use]
    pub fn with_prestige(mut self, prestige: u32) -> Self {
        self.prestige = prestige;
        self
    }
}

//! Gem currencies and per-gem count containers.
//!
//! ## Types
//!
//! - `GemColor`: the five colored currencies cards cost and grant as bonuses
//! - `GemType`: a color or the gold wildcard
//! - `ColorCounts`: per-color counts (card costs, bonuses, noble requirements)
//! - `GemCollection`: per-gem counts including gold (bank, hands, payments)
//!
//! Both containers index by their key type and serialize as named fields so
//! snapshots read naturally in JSON.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the five colored currencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemColor {
    Diamond,
    Sapphire,
    Emerald,
    Ruby,
    Onyx,
}

impl GemColor {
    /// All colors in canonical order.
    pub const ALL: [GemColor; 5] = [
        GemColor::Diamond,
        GemColor::Sapphire,
        GemColor::Emerald,
        GemColor::Ruby,
        GemColor::Onyx,
    ];

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Widen to a `GemType`.
    #[must_use]
    pub const fn gem(self) -> GemType {
        match self {
            GemColor::Diamond => GemType::Diamond,
            GemColor::Sapphire => GemType::Sapphire,
            GemColor::Emerald => GemType::Emerald,
            GemColor::Ruby => GemType::Ruby,
            GemColor::Onyx => GemType::Onyx,
        }
    }
}

impl std::fmt::Display for GemColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GemColor::Diamond => "diamond",
            GemColor::Sapphire => "sapphire",
            GemColor::Emerald => "emerald",
            GemColor::Ruby => "ruby",
            GemColor::Onyx => "onyx",
        };
        f.write_str(name)
    }
}

/// A gem currency: one of the five colors, or gold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemType {
    Diamond,
    Sapphire,
    Emerald,
    Ruby,
    Onyx,
    Gold,
}

impl GemType {
    /// All gem types, colors first, gold last.
    pub const ALL: [GemType; 6] = [
        GemType::Diamond,
        GemType::Sapphire,
        GemType::Emerald,
        GemType::Ruby,
        GemType::Onyx,
        GemType::Gold,
    ];

    /// Narrow to a color. Gold has none.
    #[must_use]
    pub const fn color(self) -> Option<GemColor> {
        match self {
            GemType::Diamond => Some(GemColor::Diamond),
            GemType::Sapphire => Some(GemColor::Sapphire),
            GemType::Emerald => Some(GemColor::Emerald),
            GemType::Ruby => Some(GemColor::Ruby),
            GemType::Onyx => Some(GemColor::Onyx),
            GemType::Gold => None,
        }
    }

    #[must_use]
    pub const fn is_gold(self) -> bool {
        matches!(self, GemType::Gold)
    }
}

impl From<GemColor> for GemType {
    fn from(color: GemColor) -> Self {
        color.gem()
    }
}

impl std::fmt::Display for GemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Some(color) => std::fmt::Display::fmt(&color, f),
            None => f.write_str("gold"),
        }
    }
}

/// Per-color counts with no gold slot.
///
/// Used for card costs, permanent bonuses, and noble requirements, none of
/// which can involve gold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorCounts {
    pub diamond: u8,
    pub sapphire: u8,
    pub emerald: u8,
    pub ruby: u8,
    pub onyx: u8,
}

impl ColorCounts {
    /// All zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            diamond: 0,
            sapphire: 0,
            emerald: 0,
            ruby: 0,
            onyx: 0,
        }
    }

    /// Build from counts in `GemColor::ALL` order.
    #[must_use]
    pub const fn from_array(counts: [u8; 5]) -> Self {
        Self {
            diamond: counts[0],
            sapphire: counts[1],
            emerald: counts[2],
            ruby: counts[3],
            onyx: counts[4],
        }
    }

    /// Set one color (builder pattern).
    #[must_use]
    pub fn with(mut self, color: GemColor, count: u8) -> Self {
        self[color] = count;
        self
    }

    /// Iterate over (color, count) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (GemColor, u8)> + '_ {
        GemColor::ALL.into_iter().map(move |c| (c, self[c]))
    }

    /// Sum across colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, n)| u32::from(n)).sum()
    }

    /// Check if every color is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, n)| n == 0)
    }

    /// Check if every color is at least the other's count.
    #[must_use]
    pub fn covers(&self, required: &ColorCounts) -> bool {
        self.iter().all(|(c, n)| n >= required[c])
    }
}

impl Index<GemColor> for ColorCounts {
    type Output = u8;

    fn index(&self, color: GemColor) -> &Self::Output {
        match color {
            GemColor::Diamond => &self.diamond,
            GemColor::Sapphire => &self.sapphire,
            GemColor::Emerald => &self.emerald,
            GemColor::Ruby => &self.ruby,
            GemColor::Onyx => &self.onyx,
        }
    }
}

impl IndexMut<GemColor> for ColorCounts {
    fn index_mut(&mut self, color: GemColor) -> &mut Self::Output {
        match color {
            GemColor::Diamond => &mut self.diamond,
            GemColor::Sapphire => &mut self.sapphire,
            GemColor::Emerald => &mut self.emerald,
            GemColor::Ruby => &mut self.ruby,
            GemColor::Onyx => &mut self.onyx,
        }
    }
}

/// Per-gem counts including gold.
///
/// The bank, every player's hand, and any payment or discard are
/// `GemCollection`s. Tokens only ever move between collections, so the sum
/// over the bank and all hands is constant for the life of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemCollection {
    pub diamond: u8,
    pub sapphire: u8,
    pub emerald: u8,
    pub ruby: u8,
    pub onyx: u8,
    pub gold: u8,
}

impl GemCollection {
    /// All zero.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            diamond: 0,
            sapphire: 0,
            emerald: 0,
            ruby: 0,
            onyx: 0,
            gold: 0,
        }
    }

    /// Same count of every color, plus a separate gold count.
    #[must_use]
    pub const fn uniform(colored: u8, gold: u8) -> Self {
        Self {
            diamond: colored,
            sapphire: colored,
            emerald: colored,
            ruby: colored,
            onyx: colored,
            gold,
        }
    }

    /// Set one gem type (builder pattern).
    #[must_use]
    pub fn with(mut self, gem: impl Into<GemType>, count: u8) -> Self {
        self[gem.into()] = count;
        self
    }

    /// Iterate over (gem, count) pairs, colors first then gold.
    pub fn iter(&self) -> impl Iterator<Item = (GemType, u8)> + '_ {
        GemType::ALL.into_iter().map(move |g| (g, self[g]))
    }

    /// Total tokens held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, n)| u32::from(n)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The colored part, without gold.
    #[must_use]
    pub fn colors(&self) -> ColorCounts {
        ColorCounts {
            diamond: self.diamond,
            sapphire: self.sapphire,
            emerald: self.emerald,
            ruby: self.ruby,
            onyx: self.onyx,
        }
    }

    /// Check if every gem type is at least the other's count.
    #[must_use]
    pub fn contains(&self, other: &GemCollection) -> bool {
        self.iter().all(|(g, n)| n >= other[g])
    }

    /// Add every count of `other` into this collection.
    pub fn add(&mut self, other: &GemCollection) {
        for gem in GemType::ALL {
            self[gem] += other[gem];
        }
    }

    /// Remove every count of `other` from this collection.
    ///
    /// Returns false (leaving `self` untouched) if any count would go negative.
    #[must_use]
    pub fn try_remove(&mut self, other: &GemCollection) -> bool {
        if !self.contains(other) {
            return false;
        }
        for gem in GemType::ALL {
            self[gem] -= other[gem];
        }
        true
    }
}

impl Index<GemType> for GemCollection {
    type Output = u8;

    fn index(&self, gem: GemType) -> &Self::Output {
        match gem {
            GemType::Diamond => &self.diamond,
            GemType::Sapphire => &self.sapphire,
            GemType::Emerald => &self.emerald,
            GemType::Ruby => &self.ruby,
            GemType::Onyx => &self.onyx,
            GemType::Gold => &self.gold,
        }
    }
}

impl IndexMut<GemType> for GemCollection {
    fn index_mut(&mut self, gem: GemType) -> &mut Self::Output {
        match gem {
            GemType::Diamond => &mut self.diamond,
            GemType::Sapphire => &mut self.sapphire,
            GemType::Emerald => &mut self.emerald,
            GemType::Ruby => &mut self.ruby,
            GemType::Onyx => &mut self.onyx,
            GemType::Gold => &mut self.gold,
        }
    }
}

impl Index<GemColor> for GemCollection {
    type Output = u8;

    fn index(&self, color: GemColor) -> &Self::Output {
        &self[color.gem()]
    }
}

impl IndexMut<GemColor> for GemCollection {
    fn index_mut(&mut self, color: GemColor) -> &mut Self::Output {
        &mut self[color.gem()]
    }
}

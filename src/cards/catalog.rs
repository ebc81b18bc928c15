//! The standard card and noble catalog.
//!
//! Costs are listed in `GemColor::ALL` order:
//! diamond, sapphire, emerald, ruby, onyx.

use super::definition::{CardId, DevelopmentCard, Tier};
use super::noble::{Noble, NobleId};
use super::registry::CardRegistry;
use crate::core::gems::{ColorCounts, GemColor};

use crate::core::gems::GemColor::{Diamond as W, Emerald as G, Onyx as K, Ruby as R, Sapphire as B};

/// (bonus, prestige, cost)
type CardRow = (GemColor, u32, [u8; 5]);

const TIER_ONE: [CardRow; 40] = [
    (K, 0, [1, 1, 1, 1, 0]),
    (K, 0, [1, 2, 1, 1, 0]),
    (K, 0, [2, 2, 0, 1, 0]),
    (K, 0, [0, 0, 1, 3, 1]),
    (K, 0, [0, 0, 2, 1, 0]),
    (K, 0, [2, 0, 2, 0, 0]),
    (K, 0, [0, 0, 3, 0, 0]),
    (K, 1, [0, 4, 0, 0, 0]),
    (B, 0, [1, 0, 1, 1, 1]),
    (B, 0, [1, 0, 1, 2, 1]),
    (B, 0, [1, 0, 2, 2, 0]),
    (B, 0, [0, 1, 3, 1, 0]),
    (B, 0, [1, 0, 0, 0, 2]),
    (B, 0, [0, 0, 2, 0, 2]),
    (B, 0, [0, 0, 0, 0, 3]),
    (B, 1, [0, 0, 0, 4, 0]),
    (W, 0, [0, 1, 1, 1, 1]),
    (W, 0, [0, 1, 2, 1, 1]),
    (W, 0, [0, 2, 2, 0, 1]),
    (W, 0, [3, 1, 0, 0, 1]),
    (W, 0, [0, 0, 0, 2, 1]),
    (W, 0, [0, 2, 0, 0, 2]),
    (W, 0, [0, 3, 0, 0, 0]),
    (W, 1, [0, 0, 4, 0, 0]),
    (G, 0, [1, 1, 0, 1, 1]),
    (G, 0, [1, 1, 0, 1, 2]),
    (G, 0, [0, 1, 0, 2, 2]),
    (G, 0, [1, 3, 1, 0, 0]),
    (G, 0, [2, 1, 0, 0, 0]),
    (G, 0, [0, 2, 0, 2, 0]),
    (G, 0, [0, 0, 0, 3, 0]),
    (G, 1, [0, 0, 0, 0, 4]),
    (R, 0, [1, 1, 1, 0, 1]),
    (R, 0, [2, 1, 1, 0, 1]),
    (R, 0, [2, 0, 1, 0, 2]),
    (R, 0, [1, 0, 0, 1, 3]),
    (R, 0, [0, 2, 1, 0, 0]),
    (R, 0, [2, 0, 0, 2, 0]),
    (R, 0, [3, 0, 0, 0, 0]),
    (R, 1, [4, 0, 0, 0, 0]),
];

const TIER_TWO: [CardRow; 30] = [
    (K, 1, [3, 2, 2, 0, 0]),
    (K, 1, [3, 0, 3, 0, 2]),
    (K, 2, [0, 1, 4, 2, 0]),
    (K, 2, [0, 0, 5, 3, 0]),
    (K, 2, [5, 0, 0, 0, 0]),
    (K, 3, [0, 0, 0, 0, 6]),
    (B, 1, [0, 2, 2, 3, 0]),
    (B, 1, [0, 2, 3, 0, 3]),
    (B, 2, [5, 3, 0, 0, 0]),
    (B, 2, [2, 0, 0, 1, 4]),
    (B, 2, [0, 5, 0, 0, 0]),
    (B, 3, [0, 6, 0, 0, 0]),
    (W, 1, [0, 0, 3, 2, 2]),
    (W, 1, [2, 3, 0, 3, 0]),
    (W, 2, [0, 0, 1, 4, 2]),
    (W, 2, [0, 0, 0, 5, 3]),
    (W, 2, [0, 0, 0, 5, 0]),
    (W, 3, [6, 0, 0, 0, 0]),
    (G, 1, [3, 0, 2, 3, 0]),
    (G, 1, [2, 3, 0, 0, 2]),
    (G, 2, [4, 2, 0, 0, 1]),
    (G, 2, [0, 5, 3, 0, 0]),
    (G, 2, [0, 0, 5, 0, 0]),
    (G, 3, [0, 0, 6, 0, 0]),
    (R, 1, [2, 0, 0, 2, 3]),
    (R, 1, [0, 3, 0, 2, 3]),
    (R, 2, [1, 4, 2, 0, 0]),
    (R, 2, [3, 0, 0, 0, 5]),
    (R, 2, [0, 0, 0, 0, 5]),
    (R, 3, [0, 0, 0, 6, 0]),
];

const TIER_THREE: [CardRow; 20] = [
    (K, 3, [3, 3, 5, 3, 0]),
    (K, 4, [0, 0, 0, 7, 0]),
    (K, 4, [0, 0, 3, 6, 3]),
    (K, 5, [0, 0, 0, 7, 3]),
    (B, 3, [3, 0, 3, 3, 5]),
    (B, 4, [7, 0, 0, 0, 0]),
    (B, 4, [6, 3, 0, 0, 3]),
    (B, 5, [7, 3, 0, 0, 0]),
    (W, 3, [0, 3, 3, 5, 3]),
    (W, 4, [0, 0, 0, 0, 7]),
    (W, 4, [3, 0, 0, 3, 6]),
    (W, 5, [3, 0, 0, 0, 7]),
    (G, 3, [5, 3, 0, 3, 3]),
    (G, 4, [0, 7, 0, 0, 0]),
    (G, 4, [3, 6, 3, 0, 0]),
    (G, 5, [0, 7, 3, 0, 0]),
    (R, 3, [3, 5, 3, 0, 3]),
    (R, 4, [0, 0, 7, 0, 0]),
    (R, 4, [0, 3, 6, 3, 0]),
    (R, 5, [0, 0, 7, 3, 0]),
];

/// Bonus requirements in `GemColor::ALL` order.
const NOBLES: [[u8; 5]; 10] = [
    [0, 0, 4, 4, 0],
    [0, 0, 0, 4, 4],
    [0, 4, 4, 0, 0],
    [4, 4, 0, 0, 0],
    [4, 0, 0, 0, 4],
    [3, 3, 0, 0, 3],
    [3, 0, 0, 3, 3],
    [0, 3, 3, 3, 0],
    [0, 0, 3, 3, 3],
    [3, 3, 3, 0, 0],
];

/// Prestige every standard noble grants.
const NOBLE_PRESTIGE: u32 = 3;

/// Build the standard 90-card, 10-noble registry.
///
/// Card IDs run 1..=40 for tier one, 41..=70 for tier two and 71..=90 for
/// tier three; noble IDs run 1..=10.
#[must_use]
pub fn standard_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    let mut next_id = 1u16;

    let tiers: [(Tier, &[CardRow]); 3] = [
        (Tier::One, &TIER_ONE),
        (Tier::Two, &TIER_TWO),
        (Tier::Three, &TIER_THREE),
    ];

    for (tier, rows) in tiers {
        for &(bonus, prestige, cost) in rows {
            let card = DevelopmentCard::new(CardId::new(next_id), tier, ColorCounts::from_array(cost), bonus)
                .with_prestige(prestige);
            registry.register_card(card);
            next_id += 1;
        }
    }

    for (i, requirements) in NOBLES.iter().enumerate() {
        registry.register_noble(Noble::new(
            NobleId::new(i as u8 + 1),
            ColorCounts::from_array(*requirements),
            NOBLE_PRESTIGE,
        ));
    }

    registry
}

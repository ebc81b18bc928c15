//! Card cost rules shared by validation, transition and availability.
//!
//! Bonuses always apply first and unconditionally: the effective cost of a
//! color is the printed cost minus the player's bonus in that color, floored
//! at zero. Whatever the player's gems of that color cannot cover is the
//! shortfall, and gold covers the summed shortfall one for one.

use crate::cards::DevelopmentCard;
use crate::core::{ColorCounts, GemCollection, GemColor, GemType, Player};

/// Printed cost reduced by the player's bonuses.
#[must_use]
pub fn effective_cost(card: &DevelopmentCard, player: &Player) -> ColorCounts {
    let mut cost = ColorCounts::zero();
    for color in GemColor::ALL {
        cost[color] = card.cost[color].saturating_sub(player.bonuses[color]);
    }
    cost
}

/// Per-color amount the player's colored gems cannot cover, before gold.
fn raw_shortfall(card: &DevelopmentCard, player: &Player) -> ColorCounts {
    let cost = effective_cost(card, player);
    let mut shortfall = ColorCounts::zero();
    for color in GemColor::ALL {
        shortfall[color] = cost[color].saturating_sub(player.gems[color]);
    }
    shortfall
}

/// Gold required to buy the card.
#[must_use]
pub fn gold_needed(card: &DevelopmentCard, player: &Player) -> u32 {
    raw_shortfall(card, player).total()
}

/// Check if the player can pay for the card.
#[must_use]
pub fn can_afford(card: &DevelopmentCard, player: &Player) -> bool {
    u32::from(player.gems.gold) >= gold_needed(card, player)
}

/// Per-color amount still uncovered after spending all available gold.
///
/// Gold is spent on colors in canonical order. The result is all zero
/// exactly when `can_afford` holds.
#[must_use]
pub fn card_shortfall(card: &DevelopmentCard, player: &Player) -> ColorCounts {
    let mut shortfall = raw_shortfall(card, player);
    let mut gold = player.gems.gold;
    for color in GemColor::ALL {
        let covered = shortfall[color].min(gold);
        shortfall[color] -= covered;
        gold -= covered;
    }
    shortfall
}

/// The gems a purchase moves from the player to the bank.
///
/// Colored gems pay as much of each effective cost as they can; gold pays
/// the rest. Returns `None` if the player cannot afford the card.
#[must_use]
pub fn calculate_payment(card: &DevelopmentCard, player: &Player) -> Option<GemCollection> {
    if !can_afford(card, player) {
        return None;
    }

    let cost = effective_cost(card, player);
    let mut payment = GemCollection::empty();
    let mut gold = 0u8;
    for color in GemColor::ALL {
        let from_color = cost[color].min(player.gems[color]);
        payment[color] = from_color;
        gold += cost[color] - from_color;
    }
    payment[GemType::Gold] = gold;
    Some(payment)
}

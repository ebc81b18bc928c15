//! Availability query: what a player may do right now.
//!
//! The projection is advisory. Enforcement is always `validate_action`.
//! A player who is not on turn (or is unknown, or the game is over) gets an
//! empty projection; a player with a pending sub-flow gets only that
//! sub-flow's options.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, NobleId, Tier};
use crate::core::{GameState, GemColor, PlayerId, TurnPhase};

use super::cost::can_afford;
use super::splendor::Splendor;

/// A sub-flow the player must resolve before anything else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingChoice {
    /// Return exactly this many gems.
    DiscardGems { count: u32 },
    /// Pick one of these nobles.
    SelectNoble { nobles: Vec<NobleId> },
}

/// Legal move options for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableActions {
    /// The game is running and the player is the one it waits on.
    pub is_your_turn: bool,

    /// Set when a sub-flow targets this player; main-action options are
    /// then empty.
    pub pending: Option<PendingChoice>,

    /// Colors with at least one gem in the bank.
    pub take_different: Vec<GemColor>,

    /// Colors with enough gems in the bank to take two.
    pub take_two: Vec<GemColor>,

    /// The player holds fewer reserved cards than the limit.
    pub can_reserve: bool,

    /// Face-up cards that may be reserved.
    pub reservable_cards: Vec<CardId>,

    /// Tiers whose deck can be reserved from blind.
    pub reservable_tiers: Vec<Tier>,

    /// Market and reserved cards the player can pay for.
    pub purchasable_cards: Vec<CardId>,
}

impl AvailableActions {
    /// Check if there is nothing at all the player may do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
            && self.take_different.is_empty()
            && self.take_two.is_empty()
            && self.reservable_cards.is_empty()
            && self.reservable_tiers.is_empty()
            && self.purchasable_cards.is_empty()
    }
}

impl Splendor {
    /// Project the options open to `player`. Never fails.
    pub fn available_actions(&self, state: &GameState, player: &PlayerId) -> AvailableActions {
        let mut available = AvailableActions::default();
        if !state.is_in_progress() || !state.is_current_player(player) {
            return available;
        }
        if state.turn.pending_player().is_some_and(|pending| pending != player) {
            return available;
        }
        let Some(holder) = state.player(player) else {
            return available;
        };
        available.is_your_turn = true;

        match &state.turn {
            TurnPhase::AwaitingDiscard { excess, .. } => {
                available.pending = Some(PendingChoice::DiscardGems { count: *excess });
                return available;
            }
            TurnPhase::AwaitingNobleChoice { eligible, .. } => {
                available.pending = Some(PendingChoice::SelectNoble {
                    nobles: eligible.clone(),
                });
                return available;
            }
            TurnPhase::Normal => {}
        }

        for color in GemColor::ALL {
            let in_bank = state.bank[color];
            if in_bank >= 1 {
                available.take_different.push(color);
            }
            if in_bank >= self.rules.take_two_threshold {
                available.take_two.push(color);
            }
        }

        available.can_reserve = holder.reserved.len() < self.rules.max_reserved;
        if available.can_reserve {
            available.reservable_cards = state.market.cards().collect();
            available.reservable_tiers = Tier::ALL
                .into_iter()
                .filter(|&tier| state.deck_size(tier) > 0)
                .collect();
        }

        available.purchasable_cards = state
            .market
            .cards()
            .chain(holder.reserved.iter().copied())
            .filter(|&card| {
                self.registry
                    .card(card)
                    .is_some_and(|definition| can_afford(definition, holder))
            })
            .collect();

        available
    }
}

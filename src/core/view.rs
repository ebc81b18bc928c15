//! Public projection of a game state.
//!
//! Nothing rule-relevant is secret in this game (reserved cards are public
//! information), but deck order is. `PublicState` is what an embedder sends
//! to players and spectators: everything in `GameState` except deck contents,
//! which become per-tier counts.

use serde::{Deserialize, Serialize};

use super::gems::GemCollection;
use super::player::{Player, PlayerId};
use super::state::{GameId, GamePhase, GameState, Market, TurnPhase};
use crate::cards::{NobleId, Tier};

/// Observable game information, safe to send to any client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub id: GameId,
    pub phase: GamePhase,
    pub turn: TurnPhase,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub bank: GemCollection,
    pub market: Market,

    /// Cards left per tier, tier one first.
    pub deck_counts: [usize; 3],

    pub nobles: Vec<NobleId>,
    pub round: u32,
    pub end_game_triggered_by: Option<PlayerId>,
    pub winners: Vec<PlayerId>,
}

impl PublicState {
    /// Cards left in one tier's deck.
    #[must_use]
    pub fn deck_count(&self, tier: Tier) -> usize {
        self.deck_counts[tier.index()]
    }
}

impl GameState {
    /// Build the public projection of this state.
    #[must_use]
    pub fn public_view(&self) -> PublicState {
        PublicState {
            id: self.id.clone(),
            phase: self.phase,
            turn: self.turn.clone(),
            players: self.players.iter().cloned().collect(),
            current_player: self.current_player,
            bank: self.bank,
            market: self.market.clone(),
            deck_counts: Tier::ALL.map(|tier| self.deck_size(tier)),
            nobles: self.nobles.iter().copied().collect(),
            round: self.round,
            end_game_triggered_by: self.end_game_triggered_by.clone(),
            winners: self.winners.clone(),
        }
    }
}

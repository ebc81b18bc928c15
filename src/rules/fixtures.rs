//! Shared test fixtures for the rules modules.

use crate::cards::{CardId, Tier};
use crate::core::{GameConfig, GameRng, GameState, GemCollection, PlayerId, PlayerInfo};

use super::splendor::Splendor;

pub(crate) fn players(n: usize) -> Vec<PlayerInfo> {
    ["a", "b", "c", "d"][..n]
        .iter()
        .map(|id| PlayerInfo::new(*id, id.to_uppercase()))
        .collect()
}

/// A freshly created standard game.
pub(crate) fn new_game(n: usize, seed: u64) -> (Splendor, GameState) {
    let engine = Splendor::new();
    let state = engine
        .create_game(GameConfig::new(n), players(n), &mut GameRng::new(seed))
        .unwrap();
    (engine, state)
}

pub(crate) fn seat(state: &GameState, index: usize) -> PlayerId {
    state.players[index].id.clone()
}

/// Give a seat gems, taking them out of the bank so supply stays constant.
pub(crate) fn give_gems(state: &mut GameState, index: usize, gems: GemCollection) {
    assert!(state.bank.try_remove(&gems), "bank cannot cover {:?}", gems);
    state.players[index].gems.add(&gems);
}

/// First face-up card of a tier.
pub(crate) fn market_card(state: &GameState, tier: Tier) -> CardId {
    state.market.tier_cards(tier).next().unwrap()
}

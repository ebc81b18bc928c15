//! Shared helpers for integration tests: seat lists and playout policies.

#![allow(dead_code)]

use rust_splendor::{Action, GameRng, GameState, PlayerInfo, RulesEngine, Splendor};

pub fn players(n: usize) -> Vec<PlayerInfo> {
    ["alice", "bob", "carol", "dave"][..n]
        .iter()
        .map(|id| PlayerInfo::new(*id, id.to_uppercase()))
        .collect()
}

/// Uniformly random legal action for whoever the game waits on.
pub fn random_action(engine: &Splendor, state: &GameState, rng: &mut GameRng) -> Option<Action> {
    if !state.is_in_progress() {
        return None;
    }
    let actor = state.current_player().id.clone();
    let mut actions = engine.legal_actions(state, &actor);
    if actions.is_empty() {
        return None;
    }
    let pick = rng.gen_range_usize(0..actions.len());
    Some(actions.swap_remove(pick))
}

/// Buy the most prestigious affordable card, otherwise take gems at random.
pub fn greedy_action(engine: &Splendor, state: &GameState, rng: &mut GameRng) -> Option<Action> {
    if !state.is_in_progress() {
        return None;
    }
    let actor = state.current_player().id.clone();
    let actions = engine.legal_actions(state, &actor);

    let best_purchase = actions
        .iter()
        .filter_map(|action| match action {
            Action::PurchaseCard { card, .. } => {
                let definition = engine.registry().card(*card)?;
                Some(((definition.prestige, definition.tier), action))
            }
            _ => None,
        })
        .max_by_key(|(key, _)| *key)
        .map(|(_, action)| action.clone());
    if best_purchase.is_some() {
        return best_purchase;
    }

    let takes: Vec<&Action> = actions
        .iter()
        .filter(|action| match action {
            Action::TakeThreeGems { gems, .. } => gems.len() == 3,
            Action::TakeTwoGems { .. } => true,
            _ => false,
        })
        .collect();
    if !takes.is_empty() {
        return Some(takes[rng.gen_range_usize(0..takes.len())].clone());
    }

    actions.into_iter().next()
}

/// Play until the game ends, no action is available, or `limit` actions.
///
/// Returns every intermediate state, starting with `state`.
pub fn play_out(
    engine: &Splendor,
    state: GameState,
    rng: &mut GameRng,
    limit: usize,
    policy: fn(&Splendor, &GameState, &mut GameRng) -> Option<Action>,
) -> Vec<GameState> {
    let mut states = vec![state];
    for _ in 0..limit {
        let current = states.last().unwrap();
        let Some(action) = policy(engine, current, rng) else {
            break;
        };
        let next = engine.apply_action(current, &action).unwrap();
        states.push(next);
    }
    states
}

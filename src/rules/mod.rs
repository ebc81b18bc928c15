//! Game rules.
//!
//! `Splendor` implements `RulesEngine`:
//! - Game creation from a player list and a random source
//! - Action validation with typed rejection reasons
//! - State transitions, including the discard and noble sub-flows
//! - The availability query
//!
//! The free functions below bind the four entry points to a shared engine
//! with the standard catalog and rules.

pub mod availability;
pub mod cost;
pub mod engine;
mod setup;
pub mod splendor;
mod transition;
mod validator;

#[cfg(test)]
pub(crate) mod fixtures;

use once_cell::sync::Lazy;

pub use availability::{AvailableActions, PendingChoice};
pub use cost::{calculate_payment, can_afford, card_shortfall, effective_cost, gold_needed};
pub use engine::{GameResult, RulesEngine};
pub use splendor::Splendor;

use crate::core::{Action, GameConfig, GameRng, GameState, PlayerId, PlayerInfo};
use crate::error::{EngineError, ValidationResult};

static STANDARD: Lazy<Splendor> = Lazy::new(Splendor::new);

/// The shared standard engine behind the free functions.
#[must_use]
pub fn standard() -> &'static Splendor {
    &STANDARD
}

/// Create a standard game.
///
/// With `seed`, setup is reproducible; without, it is seeded from entropy.
pub fn create_game(
    config: GameConfig,
    players: Vec<PlayerInfo>,
    seed: Option<u64>,
) -> Result<GameState, EngineError> {
    let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
    STANDARD.create_game(config, players, &mut rng)
}

/// Validate an action under the standard rules.
pub fn validate_action(state: &GameState, action: &Action) -> ValidationResult {
    STANDARD.validate_action(state, action)
}

/// Apply an action under the standard rules.
pub fn apply_action(state: &GameState, action: &Action) -> Result<GameState, EngineError> {
    STANDARD.apply_action(state, action)
}

/// Project a player's options under the standard rules.
#[must_use]
pub fn get_available_actions(state: &GameState, player: &PlayerId) -> AvailableActions {
    STANDARD.available_actions(state, player)
}

//! The `Splendor` rules engine.
//!
//! Owns the card/noble arena and the rule constants. Everything else is
//! split by concern across sibling modules, each adding an `impl Splendor`
//! block:
//!
//! - `setup.rs`: `create_game`
//! - `validator.rs`: `validate_action`
//! - `transition.rs`: `apply_action`
//! - `availability.rs`: `available_actions`

use crate::cards::{standard_registry, CardRegistry};
use crate::core::{Action, GameConfig, GameRng, GameState, PlayerId, PlayerInfo, RulesConfig};
use crate::error::{EngineError, ValidationResult};

use super::availability::AvailableActions;
use super::engine::RulesEngine;

/// Rules engine for the standard game (or a custom catalog).
///
/// ## Example
///
/// ```
/// use rust_splendor::core::{GameConfig, GameRng, PlayerInfo};
/// use rust_splendor::rules::{RulesEngine, Splendor};
///
/// let engine = Splendor::new();
/// let players = vec![PlayerInfo::new("a", "Ada"), PlayerInfo::new("b", "Bo")];
/// let state = engine
///     .create_game(GameConfig::new(2), players, &mut GameRng::new(7))
///     .unwrap();
///
/// let current = state.current_player().id.clone();
/// assert!(!engine.legal_actions(&state, &current).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Splendor {
    pub(crate) registry: CardRegistry,
    pub(crate) rules: RulesConfig,
}

impl Default for Splendor {
    fn default() -> Self {
        Self::new()
    }
}

impl Splendor {
    /// Standard catalog, standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(standard_registry(), RulesConfig::default())
    }

    /// Custom catalog and rule constants.
    #[must_use]
    pub fn with_registry(registry: CardRegistry, rules: RulesConfig) -> Self {
        Self { registry, rules }
    }

    /// Standard catalog with custom rule constants.
    #[must_use]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::with_registry(standard_registry(), rules)
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Rebuild a game from its seed and the actions applied to it.
    ///
    /// Every action is validated before it is applied; the first illegal one
    /// aborts the replay with `EngineError::InvalidAction`.
    pub fn replay<'a>(
        &self,
        config: GameConfig,
        players: Vec<PlayerInfo>,
        seed: u64,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<GameState, EngineError> {
        let mut state = self.create_game(config, players, &mut GameRng::new(seed))?;
        for action in actions {
            state = self.apply_action(&state, action)?;
        }
        Ok(state)
    }
}

impl RulesEngine for Splendor {
    fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    fn validate_action(&self, state: &GameState, action: &Action) -> ValidationResult {
        Splendor::validate_action(self, state, action)
    }

    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, EngineError> {
        Splendor::apply_action(self, state, action)
    }

    fn available_actions(&self, state: &GameState, player: &PlayerId) -> AvailableActions {
        Splendor::available_actions(self, state, player)
    }
}

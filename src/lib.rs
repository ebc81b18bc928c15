//! # rust-splendor
//!
//! A deterministic rules engine for a 2-4 player gem-trading card game.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `apply_action` returns a new `GameState` and never
//!    touches its input. Validation never mutates.
//!
//! 2. **Explicit sub-flows**: a pending discard or noble choice is a
//!    `TurnPhase` variant, not a pair of loose flags.
//!
//! 3. **Injected randomness**: setup draws only from a caller-supplied
//!    `RandomSource`, so games replay exactly from a seed.
//!
//! ## Architecture
//!
//! - **Arena identity**: cards and nobles live once in a `CardRegistry`;
//!   decks, market slots, reserves and tableaux hold ids and relocate them.
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Gems, players, state, actions, RNG, configuration
//! - `cards`: Card and noble definitions, registry, standard catalog
//! - `rules`: `RulesEngine` trait and the `Splendor` engine
//! - `error`: Rule violations and integration errors
//!
//! ## Example
//!
//! ```
//! use rust_splendor::{apply_action, create_game, Action, GameConfig, GemType, PlayerInfo};
//!
//! let players = vec![PlayerInfo::new("a", "Ada"), PlayerInfo::new("b", "Bo")];
//! let state = create_game(GameConfig::new(2), players, Some(1)).unwrap();
//!
//! let current = state.current_player().id.clone();
//! let take = Action::take_gems(current.as_str(), &[GemType::Ruby, GemType::Onyx]);
//! let next = apply_action(&state, &take).unwrap();
//!
//! assert_eq!(next.current_player, 1);
//! assert_eq!(next.gem_supply(), state.gem_supply());
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ColorCounts, GameConfig, GameId, GamePhase, GameRng,
    GameState, GemCollection, GemColor, GemType, Market, Player, PlayerId, PlayerInfo,
    PublicState, RandomSource, RulesConfig, TurnPhase,
};

pub use crate::cards::{CardId, CardRegistry, DevelopmentCard, Noble, NobleId, Tier};

pub use crate::error::{EngineError, ErrorCode, RuleViolation, ValidationResult};

pub use crate::rules::{
    apply_action, create_game, get_available_actions, validate_action, AvailableActions,
    GameResult, PendingChoice, RulesEngine, Splendor,
};

//! Core engine types: gems, players, state, actions, RNG, configuration.
//!
//! This module holds the data model. It carries no rule logic beyond
//! container bookkeeping; the rules live in `crate::rules`.

pub mod action;
pub mod config;
pub mod gems;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, RulesConfig};
pub use gems::{ColorCounts, GemCollection, GemColor, GemType};
pub use player::{Player, PlayerId, PlayerInfo};
pub use rng::{shuffle, GameRng, RandomSource};
pub use state::{GameId, GamePhase, GameState, Market, TurnPhase};
pub use view::PublicState;

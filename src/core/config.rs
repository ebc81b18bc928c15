//! Game configuration types.
//!
//! - `GameConfig`: per-game input (how many seats)
//! - `RulesConfig`: the rule constants the engine enforces
//!
//! `RulesConfig::default()` is the standard rule set. Variants (shorter games,
//! tighter hand limits) are built with the `with_*` methods.

use serde::{Deserialize, Serialize};

/// Per-game configuration supplied when creating a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats, 2 to 4.
    pub player_count: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(player_count: usize) -> Self {
        Self { player_count }
    }
}

/// Rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Prestige that triggers the final round.
    pub prestige_to_win: u32,

    /// Gems a player may hold at the end of a turn.
    pub max_gems: u32,

    /// Cards a player may hold in reserve.
    pub max_reserved: usize,

    /// Gold tokens in the bank, regardless of player count.
    pub gold_supply: u8,

    /// Bank count of a color required before taking two of it.
    pub take_two_threshold: u8,

    /// Most distinct colors a single take may request.
    pub max_distinct_take: usize,

    /// Colored tokens per color, indexed by player count minus two.
    pub colored_supply: [u8; 3],
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            prestige_to_win: 15,
            max_gems: 10,
            max_reserved: 3,
            gold_supply: 5,
            take_two_threshold: 4,
            max_distinct_take: 3,
            colored_supply: [4, 5, 7],
        }
    }
}

impl RulesConfig {
    /// Smallest supported table.
    pub const MIN_PLAYERS: usize = 2;

    /// Largest supported table.
    pub const MAX_PLAYERS: usize = 4;

    /// Check if a player count is supported.
    #[must_use]
    pub fn supports(player_count: usize) -> bool {
        (Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&player_count)
    }

    /// Colored tokens per color for a table of `player_count`.
    ///
    /// Returns `None` for unsupported counts.
    #[must_use]
    pub fn colored_supply_for(&self, player_count: usize) -> Option<u8> {
        if !Self::supports(player_count) {
            return None;
        }
        Some(self.colored_supply[player_count - Self::MIN_PLAYERS])
    }

    /// Nobles dealt for a table of `player_count`.
    #[must_use]
    pub fn nobles_for(player_count: usize) -> usize {
        player_count + 1
    }

    /// Set the final-round prestige threshold.
    pub fn with_prestige_to_win(mut self, prestige: u32) -> Self {
        self.prestige_to_win = prestige;
        self
    }

    /// Set the end-of-turn gem limit.
    pub fn with_max_gems(mut self, max: u32) -> Self {
        self.max_gems = max;
        self
    }

    /// Set the reserve limit.
    pub fn with_max_reserved(mut self, max: usize) -> Self {
        self.max_reserved = max;
        self
    }
}

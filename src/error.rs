//! Error types.
//!
//! Two classes:
//!
//! - `RuleViolation`: the player asked for something the rules forbid.
//!   Returned by validation, never a panic, and the state is untouched.
//! - `EngineError`: the embedder broke the engine's contract (applied an
//!   unvalidated action, mismatched seat count, corrupt snapshot).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardId, NobleId};
use crate::core::PlayerId;

/// Machine-readable reason an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotPlayersTurn,
    InsufficientGemsInBank,
    GemsNotDistinct,
    RequiresFourGemsForTwo,
    CannotTakeGold,
    MaxReservedCards,
    CardNotAvailable,
    InsufficientPayment,
    NobleNotEligible,
    InvalidDiscardAmount,
    GameNotInProgress,
    InvalidAction,
    PendingDiscardRequired,
    PendingNobleRequired,
}

impl ErrorCode {
    /// The wire name, e.g. `NOT_PLAYERS_TURN`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotPlayersTurn => "NOT_PLAYERS_TURN",
            ErrorCode::InsufficientGemsInBank => "INSUFFICIENT_GEMS_IN_BANK",
            ErrorCode::GemsNotDistinct => "GEMS_NOT_DISTINCT",
            ErrorCode::RequiresFourGemsForTwo => "REQUIRES_FOUR_GEMS_FOR_TWO",
            ErrorCode::CannotTakeGold => "CANNOT_TAKE_GOLD",
            ErrorCode::MaxReservedCards => "MAX_RESERVED_CARDS",
            ErrorCode::CardNotAvailable => "CARD_NOT_AVAILABLE",
            ErrorCode::InsufficientPayment => "INSUFFICIENT_PAYMENT",
            ErrorCode::NobleNotEligible => "NOBLE_NOT_ELIGIBLE",
            ErrorCode::InvalidDiscardAmount => "INVALID_DISCARD_AMOUNT",
            ErrorCode::GameNotInProgress => "GAME_NOT_IN_PROGRESS",
            ErrorCode::InvalidAction => "INVALID_ACTION",
            ErrorCode::PendingDiscardRequired => "PENDING_DISCARD_REQUIRED",
            ErrorCode::PendingNobleRequired => "PENDING_NOBLE_REQUIRED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected action: code plus human-readable detail.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct RuleViolation {
    pub code: ErrorCode,
    pub message: String,
}

impl RuleViolation {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Outcome of validating an action.
pub type ValidationResult = Result<(), RuleViolation>;

/// Contract violations by the embedder.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("expected {expected} players, got {actual}")]
    PlayerCountMismatch { expected: usize, actual: usize },

    #[error("unsupported player count {0}")]
    UnsupportedPlayerCount(usize),

    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("invalid action: {0}")]
    InvalidAction(#[from] RuleViolation),

    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("unknown noble {0}")]
    UnknownNoble(NobleId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_names_match_serde() {
        for code in [
            ErrorCode::NotPlayersTurn,
            ErrorCode::RequiresFourGemsForTwo,
            ErrorCode::GameNotInProgress,
            ErrorCode::PendingNobleRequired,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_rule_violation_display() {
        let violation = RuleViolation::new(ErrorCode::CannotTakeGold, "gold is never taken");
        assert_eq!(violation.to_string(), "CANNOT_TAKE_GOLD: gold is never taken");
    }

    #[test]
    fn test_engine_error_from_violation() {
        let violation = RuleViolation::new(ErrorCode::InvalidAction, "nope");
        let err: EngineError = violation.clone().into();

        match err {
            EngineError::InvalidAction(inner) => assert_eq!(inner, violation),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::PlayerCountMismatch { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "expected 3 players, got 2");
    }
}

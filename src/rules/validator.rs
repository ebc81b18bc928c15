//! Action validation.
//!
//! Every check is a pure predicate over `(state, action)`. Checks run in a
//! fixed order so the reported code is stable:
//!
//! 1. Phase gate: only `playing` and `final_round` accept actions.
//! 2. Turn gate: main actions come from the current player with no sub-flow
//!    pending; sub-flow actions come from the player the sub-flow waits on.
//! 3. The action's own rules.

use rustc_hash::FxHashSet;

use crate::cards::{CardId, NobleId, Tier};
use crate::core::{Action, GameState, GemCollection, GemType, Player, PlayerId, TurnPhase};
use crate::error::{ErrorCode, RuleViolation, ValidationResult};

use super::cost::can_afford;
use super::splendor::Splendor;

fn reject<T>(code: ErrorCode, message: impl Into<String>) -> Result<T, RuleViolation> {
    Err(RuleViolation::new(code, message))
}

impl Splendor {
    /// Decide whether `action` is legal in `state`.
    pub fn validate_action(&self, state: &GameState, action: &Action) -> ValidationResult {
        if !state.is_in_progress() {
            return reject(ErrorCode::GameNotInProgress, format!("game is {:?}", state.phase));
        }

        match action {
            Action::TakeThreeGems { player, gems } => {
                self.main_turn(state, player)?;
                self.check_take_different(state, gems)
            }
            Action::TakeTwoGems { player, gem } => {
                self.main_turn(state, player)?;
                self.check_take_two(state, *gem)
            }
            Action::ReserveCard { player, card, tier } => {
                let acting = self.main_turn(state, player)?;
                self.check_reserve(state, acting, *card, *tier)
            }
            Action::PurchaseCard { player, card } => {
                let acting = self.main_turn(state, player)?;
                self.check_purchase(state, acting, *card)
            }
            Action::SelectNoble { player, noble } => self.check_select_noble(state, player, *noble),
            Action::DiscardGems { player, gems } => self.check_discard(state, player, gems),
        }
    }

    /// Nobles in the pool whose requirements the player's bonuses meet, in
    /// pool order.
    pub(crate) fn eligible_nobles(&self, state: &GameState, player: &Player) -> Vec<NobleId> {
        state
            .nobles
            .iter()
            .copied()
            .filter(|&id| {
                self.registry
                    .noble(id)
                    .is_some_and(|noble| noble.is_attracted_by(&player.bonuses))
            })
            .collect()
    }

    // === Gates ===

    /// Check a main action may be taken, returning the acting player.
    fn main_turn<'s>(&self, state: &'s GameState, player: &PlayerId) -> Result<&'s Player, RuleViolation> {
        if !state.is_current_player(player) {
            return reject(ErrorCode::NotPlayersTurn, format!("it is not {}'s turn", player));
        }
        match &state.turn {
            TurnPhase::Normal => Ok(state.current_player()),
            TurnPhase::AwaitingDiscard { excess, .. } => reject(
                ErrorCode::PendingDiscardRequired,
                format!("{} must discard {} gems first", player, excess),
            ),
            TurnPhase::AwaitingNobleChoice { .. } => reject(
                ErrorCode::PendingNobleRequired,
                format!("{} must choose a noble first", player),
            ),
        }
    }

    /// Reject a sub-flow action while the game waits on someone else.
    fn waiting_on_other(turn: &TurnPhase, player: &PlayerId) -> ValidationResult {
        let pending = turn.pending_player().map_or_else(|| "nobody".to_string(), ToString::to_string);
        reject(ErrorCode::NotPlayersTurn, format!("waiting on {}, not {}", pending, player))
    }

    // === Main actions ===

    fn check_take_different(&self, state: &GameState, gems: &[GemType]) -> ValidationResult {
        if gems.is_empty() || gems.len() > self.rules.max_distinct_take {
            return reject(
                ErrorCode::InvalidAction,
                format!("must take 1 to {} gems, got {}", self.rules.max_distinct_take, gems.len()),
            );
        }

        let distinct: FxHashSet<GemType> = gems.iter().copied().collect();
        if distinct.len() != gems.len() {
            return reject(ErrorCode::GemsNotDistinct, "requested gems must all differ");
        }
        if gems.iter().any(|g| g.is_gold()) {
            return reject(ErrorCode::CannotTakeGold, "gold is only gained by reserving");
        }
        if let Some(&empty) = gems.iter().find(|&&g| state.bank[g] == 0) {
            return reject(ErrorCode::InsufficientGemsInBank, format!("bank has no {}", empty));
        }
        Ok(())
    }

    fn check_take_two(&self, state: &GameState, gem: GemType) -> ValidationResult {
        if gem.is_gold() {
            return reject(ErrorCode::CannotTakeGold, "gold is only gained by reserving");
        }
        let threshold = self.rules.take_two_threshold;
        if state.bank[gem] < threshold {
            return reject(
                ErrorCode::RequiresFourGemsForTwo,
                format!("bank holds {} {}, needs {}", state.bank[gem], gem, threshold),
            );
        }
        Ok(())
    }

    fn check_reserve(
        &self,
        state: &GameState,
        player: &Player,
        card: Option<CardId>,
        tier: Tier,
    ) -> ValidationResult {
        if player.reserved.len() >= self.rules.max_reserved {
            return reject(
                ErrorCode::MaxReservedCards,
                format!("{} already holds {} reserved cards", player.id, player.reserved.len()),
            );
        }
        match card {
            Some(card) if !state.market.contains(card) => {
                reject(ErrorCode::CardNotAvailable, format!("{} is not in the market", card))
            }
            None if state.deck_size(tier) == 0 => {
                reject(ErrorCode::CardNotAvailable, format!("{} deck is empty", tier))
            }
            _ => Ok(()),
        }
    }

    fn check_purchase(&self, state: &GameState, player: &Player, card: CardId) -> ValidationResult {
        if !state.market.contains(card) && !player.has_reserved(card) {
            return reject(
                ErrorCode::CardNotAvailable,
                format!("{} is neither in the market nor reserved by {}", card, player.id),
            );
        }
        let Some(definition) = self.registry.card(card) else {
            return reject(ErrorCode::CardNotAvailable, format!("{} is not a known card", card));
        };
        if !can_afford(definition, player) {
            return reject(ErrorCode::InsufficientPayment, format!("{} cannot afford {}", player.id, card));
        }
        Ok(())
    }

    // === Sub-flow actions ===

    fn check_select_noble(&self, state: &GameState, player: &PlayerId, noble: NobleId) -> ValidationResult {
        match &state.turn {
            TurnPhase::AwaitingNobleChoice { player: pending, .. } if pending == player => {}
            TurnPhase::AwaitingDiscard { player: pending, excess } if pending == player => {
                return reject(
                    ErrorCode::PendingDiscardRequired,
                    format!("{} must discard {} gems first", player, excess),
                );
            }
            TurnPhase::Normal => {
                return reject(ErrorCode::InvalidAction, "no noble choice is pending");
            }
            other => return Self::waiting_on_other(other, player),
        }

        if !state.nobles.contains(&noble) {
            return reject(ErrorCode::NobleNotEligible, format!("{} is not available", noble));
        }
        let attracted = match (state.player(player), self.registry.noble(noble)) {
            (Some(p), Some(n)) => n.is_attracted_by(&p.bonuses),
            _ => false,
        };
        if !attracted {
            return reject(
                ErrorCode::NobleNotEligible,
                format!("{} does not meet the requirements of {}", player, noble),
            );
        }
        Ok(())
    }

    fn check_discard(&self, state: &GameState, player: &PlayerId, gems: &GemCollection) -> ValidationResult {
        match &state.turn {
            TurnPhase::AwaitingDiscard { player: pending, .. } if pending == player => {}
            TurnPhase::AwaitingNobleChoice { player: pending, .. } if pending == player => {
                return reject(ErrorCode::PendingNobleRequired, format!("{} must choose a noble first", player));
            }
            TurnPhase::Normal if !state.is_current_player(player) => {
                return reject(ErrorCode::NotPlayersTurn, format!("it is not {}'s turn", player));
            }
            TurnPhase::Normal => {
                return reject(ErrorCode::InvalidAction, "no discard is pending");
            }
            other => return Self::waiting_on_other(other, player),
        }

        let Some(holder) = state.player(player) else {
            return reject(ErrorCode::InvalidAction, format!("{} is not in this game", player));
        };

        let held = holder.gem_count();
        let limit = self.rules.max_gems;
        if held <= limit {
            return reject(
                ErrorCode::InvalidAction,
                format!("{} holds {} gems, nothing to discard", player, held),
            );
        }
        if !holder.gems.contains(gems) {
            return reject(ErrorCode::InvalidDiscardAmount, "cannot discard gems not held");
        }
        if held - gems.total() != limit {
            return reject(
                ErrorCode::InvalidDiscardAmount,
                format!("must discard exactly {} gems, got {}", held - limit, gems.total()),
            );
        }
        Ok(())
    }
}

//! State transitions.
//!
//! `apply_action` re-validates, clones the input, applies the action's
//! economic effect to the clone and then runs the end-of-turn pipeline:
//!
//! 1. Hand limit: over the limit parks the turn in `AwaitingDiscard`.
//! 2. Nobles: one eligible noble is awarded outright; several park the turn
//!    in `AwaitingNobleChoice`.
//! 3. End-game trigger: the first player (in seat order) at or above the
//!    prestige threshold starts the final round.
//! 4. Advance: next seat; wrapping to seat 0 starts a new round and, during
//!    the final round, ends the game.
//!
//! A discard resumes the pipeline at step 2, a noble selection at step 3.
//! The caller's state is never touched, so a failure part way through
//! cannot leak a half-applied transition.

use log::{debug, info, warn};

use crate::cards::{CardId, NobleId, Tier};
use crate::core::{
    Action, ActionRecord, GamePhase, GameState, GemCollection, GemType, Player, PlayerId, TurnPhase,
};
use crate::error::{EngineError, ErrorCode, RuleViolation};

use super::cost::calculate_payment;
use super::splendor::Splendor;

impl Splendor {
    /// Produce the state following `action`.
    ///
    /// Returns `EngineError::InvalidAction` if the action fails validation;
    /// `state` is unchanged either way.
    pub fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, EngineError> {
        if let Err(violation) = self.validate_action(state, action) {
            warn!("rejected {} from {}: {}", action.kind(), action.player(), violation);
            return Err(violation.into());
        }

        let mut next = state.clone();
        let index = next
            .player_index(action.player())
            .ok_or_else(|| EngineError::UnknownPlayer(action.player().clone()))?;

        let sequence = next.history.len() as u32;
        next.history.push_back(ActionRecord::new(action.clone(), next.round, sequence));
        debug!("round {}: {} plays {}", next.round, action.player(), action.kind());

        match action {
            Action::TakeThreeGems { gems, .. } => {
                let mut taken = GemCollection::empty();
                for &gem in gems {
                    taken[gem] += 1;
                }
                take_from_bank(&mut next, index, &taken)?;
                self.finish_main_action(&mut next, index)?;
            }
            Action::TakeTwoGems { gem, .. } => {
                take_from_bank(&mut next, index, &GemCollection::empty().with(*gem, 2))?;
                self.finish_main_action(&mut next, index)?;
            }
            Action::ReserveCard { card, tier, .. } => {
                reserve(&mut next, index, *card, *tier)?;
                self.finish_main_action(&mut next, index)?;
            }
            Action::PurchaseCard { card, .. } => {
                self.purchase(&mut next, index, *card)?;
                self.finish_main_action(&mut next, index)?;
            }
            Action::SelectNoble { noble, .. } => {
                self.award_noble(&mut next, index, *noble)?;
                next.turn = TurnPhase::Normal;
                self.end_turn(&mut next);
            }
            Action::DiscardGems { gems, .. } => {
                return_to_bank(&mut next, index, gems)?;
                next.turn = TurnPhase::Normal;
                self.resolve_nobles(&mut next, index)?;
            }
        }

        Ok(next)
    }

    fn purchase(&self, state: &mut GameState, index: usize, card: CardId) -> Result<(), EngineError> {
        let definition = self.registry.card(card).ok_or(EngineError::UnknownCard(card))?;
        let payment = calculate_payment(definition, &state.players[index]).ok_or_else(|| {
            contract(ErrorCode::InsufficientPayment, format!("cannot pay for {}", card))
        })?;
        return_to_bank(state, index, &payment)?;

        if let Some(tier) = state.market.take(card) {
            refill(state, tier);
        } else if !state.players[index].take_reserved(card) {
            return Err(EngineError::UnknownCard(card));
        }

        let player = &mut state.players[index];
        player.purchased.push(card);
        player.bonuses[definition.bonus] += 1;
        player.prestige += definition.prestige;
        debug!(
            "{} bought {} for {} gems (+{} prestige)",
            player.id,
            card,
            payment.total(),
            definition.prestige
        );
        Ok(())
    }

    fn award_noble(&self, state: &mut GameState, index: usize, noble: NobleId) -> Result<(), EngineError> {
        let definition = self.registry.noble(noble).ok_or(EngineError::UnknownNoble(noble))?;
        let position = state
            .nobles
            .iter()
            .position(|&n| n == noble)
            .ok_or(EngineError::UnknownNoble(noble))?;
        state.nobles.remove(position);

        let player = &mut state.players[index];
        player.nobles.push(noble);
        player.prestige += definition.prestige;
        info!("{} is visited by {} (+{} prestige)", player.id, noble, definition.prestige);
        Ok(())
    }

    // === End-of-turn pipeline ===

    fn finish_main_action(&self, state: &mut GameState, index: usize) -> Result<(), EngineError> {
        let held = state.players[index].gem_count();
        if held > self.rules.max_gems {
            let player = state.players[index].id.clone();
            let excess = held - self.rules.max_gems;
            debug!("{} holds {} gems, must discard {}", player, held, excess);
            state.turn = TurnPhase::AwaitingDiscard { player, excess };
            return Ok(());
        }
        self.resolve_nobles(state, index)
    }

    fn resolve_nobles(&self, state: &mut GameState, index: usize) -> Result<(), EngineError> {
        let eligible = self.eligible_nobles(state, &state.players[index]);
        match eligible.len() {
            0 => {}
            1 => self.award_noble(state, index, eligible[0])?,
            _ => {
                let player = state.players[index].id.clone();
                debug!("{} may choose among {} nobles", player, eligible.len());
                state.turn = TurnPhase::AwaitingNobleChoice { player, eligible };
                return Ok(());
            }
        }
        self.end_turn(state);
        Ok(())
    }

    fn end_turn(&self, state: &mut GameState) {
        if state.phase == GamePhase::Playing {
            let threshold = self.rules.prestige_to_win;
            if let Some(leader) = state.players.iter().find(|p| p.prestige >= threshold) {
                info!(
                    "game {}: {} reached {} prestige, final round begins",
                    state.id, leader.id, leader.prestige
                );
                state.end_game_triggered_by = Some(leader.id.clone());
                state.phase = GamePhase::FinalRound;
            }
        }

        state.turn = TurnPhase::Normal;
        state.current_player = (state.current_player + 1) % state.player_count();
        if state.current_player == 0 {
            state.round += 1;
            if state.phase == GamePhase::FinalRound {
                state.winners = determine_winners(&state.players);
                state.phase = GamePhase::Ended;
                info!(
                    "game {} ended after {} rounds, winners: {}",
                    state.id,
                    state.round - 1,
                    state.winners.iter().map(PlayerId::as_str).collect::<Vec<_>>().join(", ")
                );
            }
        }
    }
}

/// Highest prestige wins; ties go to the fewest purchased cards; any tie
/// left after that is a shared victory.
pub(crate) fn determine_winners<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<PlayerId> {
    let players: Vec<&Player> = players.into_iter().collect();
    let best = players.iter().map(|p| p.prestige).max().unwrap_or(0);
    let fewest = players
        .iter()
        .filter(|p| p.prestige == best)
        .map(|p| p.purchased.len())
        .min()
        .unwrap_or(0);
    players
        .into_iter()
        .filter(|p| p.prestige == best && p.purchased.len() == fewest)
        .map(|p| p.id.clone())
        .collect()
}

fn contract(code: ErrorCode, message: String) -> EngineError {
    EngineError::InvalidAction(RuleViolation::new(code, message))
}

fn take_from_bank(state: &mut GameState, index: usize, gems: &GemCollection) -> Result<(), EngineError> {
    if !state.bank.try_remove(gems) {
        return Err(contract(ErrorCode::InsufficientGemsInBank, format!("bank cannot cover {:?}", gems)));
    }
    state.players[index].gems.add(gems);
    Ok(())
}

fn return_to_bank(state: &mut GameState, index: usize, gems: &GemCollection) -> Result<(), EngineError> {
    if !state.players[index].gems.try_remove(gems) {
        return Err(contract(ErrorCode::InvalidDiscardAmount, format!("player cannot return {:?}", gems)));
    }
    state.bank.add(gems);
    Ok(())
}

fn reserve(state: &mut GameState, index: usize, card: Option<CardId>, tier: Tier) -> Result<(), EngineError> {
    let card = match card {
        Some(card) => {
            let from = state.market.take(card).ok_or(EngineError::UnknownCard(card))?;
            refill(state, from);
            card
        }
        None => state.decks[tier.index()]
            .pop_front()
            .ok_or_else(|| contract(ErrorCode::CardNotAvailable, format!("{} deck is empty", tier)))?,
    };

    let gold = if state.bank[GemType::Gold] > 0 {
        GemCollection::empty().with(GemType::Gold, 1)
    } else {
        GemCollection::empty()
    };
    take_from_bank(state, index, &gold)?;
    state.players[index].reserved.push(card);
    Ok(())
}

/// Deal the next deck card into the first empty slot of a tier.
fn refill(state: &mut GameState, tier: Tier) {
    let deck = &mut state.decks[tier.index()];
    if let Some(card) = deck.pop_front() {
        if !state.market.place(tier, card) {
            deck.push_front(card);
        }
    }
}

//! Rules engine trait.
//!
//! The embedder talks to the rules only through this trait:
//! - Is this action legal?
//! - What state does it produce?
//! - What may this player do right now?
//! - Is the game over, and who won?

use crate::cards::Tier;
use crate::core::{Action, GameState, GemCollection, GemType, PlayerId, RulesConfig};
use crate::error::{EngineError, ValidationResult};

use super::availability::{AvailableActions, PendingChoice};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Players tied on prestige and card count share the win.
    SharedVictory(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::SharedVictory(ps) => ps.contains(player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_action`: pure; never mutates, safe to call speculatively
/// - `apply_action`: returns a new state; the input is never modified
/// - `available_actions`: advisory; enforcement is always validation
pub trait RulesEngine {
    /// Get the rule constants.
    fn rules(&self) -> &RulesConfig;

    /// Decide whether an action is legal in a state.
    fn validate_action(&self, state: &GameState, action: &Action) -> ValidationResult;

    /// Produce the state following a legal action.
    ///
    /// Returns `EngineError::InvalidAction` if the action fails validation.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, EngineError>;

    /// Project what a player may currently do.
    fn available_actions(&self, state: &GameState, player: &PlayerId) -> AvailableActions;

    // === Convenience Methods ===

    /// Check if an action is legal.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.validate_action(state, action).is_ok()
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once the game has ended, `None` while it continues.
    fn outcome(&self, state: &GameState) -> Option<GameResult> {
        if state.winners.is_empty() {
            return None;
        }
        match state.winners.as_slice() {
            [single] => Some(GameResult::Winner(single.clone())),
            many => Some(GameResult::SharedVictory(many.to_vec())),
        }
    }

    /// Enumerate concrete actions for a player.
    ///
    /// Default implementation expands `available_actions` into every action
    /// it describes: each 1-3 color subset, each pair color, each reserve and
    /// purchase target, each noble, and each discard reaching the hand limit.
    fn legal_actions(&self, state: &GameState, player: &PlayerId) -> Vec<Action> {
        let available = self.available_actions(state, player);
        let mut actions = Vec::new();
        let id = player.as_str();

        match &available.pending {
            Some(PendingChoice::SelectNoble { nobles }) => {
                actions.extend(nobles.iter().map(|&n| Action::select_noble(id, n)));
                return actions;
            }
            Some(PendingChoice::DiscardGems { count }) => {
                if let Some(holdings) = state.player(player).map(|p| p.gems) {
                    let mut discards = Vec::new();
                    enumerate_discards(&holdings, *count, 0, GemCollection::empty(), &mut discards);
                    actions.extend(discards.into_iter().map(|gems| Action::discard(id, gems)));
                }
                return actions;
            }
            None => {}
        }

        let colors = &available.take_different;
        let max_take = self.rules().max_distinct_take.min(colors.len());
        for size in 1..=max_take {
            enumerate_subsets(colors, size, 0, &mut Vec::new(), &mut |subset| {
                let gems: Vec<GemType> = subset.iter().map(|c| c.gem()).collect();
                actions.push(Action::take_gems(id, &gems));
            });
        }

        actions.extend(available.take_two.iter().map(|&c| Action::take_two(id, c)));

        for &card in &available.reservable_cards {
            if let Some((tier, _)) = state.market.position(card) {
                actions.push(Action::reserve(id, card, tier));
            }
        }
        actions.extend(available.reservable_tiers.iter().map(|&t: &Tier| Action::reserve_blind(id, t)));

        actions.extend(available.purchasable_cards.iter().map(|&c| Action::purchase(id, c)));

        actions
    }
}

/// Call `visit` with every `size`-element subset of `items[start..]`.
fn enumerate_subsets<T: Copy>(
    items: &[T],
    size: usize,
    start: usize,
    current: &mut Vec<T>,
    visit: &mut impl FnMut(&[T]),
) {
    if current.len() == size {
        visit(current);
        return;
    }
    for i in start..items.len() {
        current.push(items[i]);
        enumerate_subsets(items, size, i + 1, current, visit);
        current.pop();
    }
}

/// Collect every collection of exactly `remaining` gems drawn from `holdings`,
/// considering gem types from `GemType::ALL[index..]`.
fn enumerate_discards(
    holdings: &GemCollection,
    remaining: u32,
    index: usize,
    current: GemCollection,
    out: &mut Vec<GemCollection>,
) {
    if remaining == 0 {
        out.push(current);
        return;
    }
    let Some(&gem) = GemType::ALL.get(index) else {
        return;
    };
    let most = u32::from(holdings[gem]).min(remaining);
    for take in 0..=most {
        let mut next = current;
        next[gem] = take as u8;
        enumerate_discards(holdings, remaining - take, index + 1, next, out);
    }
}

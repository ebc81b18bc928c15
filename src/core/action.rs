//! Action representation.
//!
//! One variant per move a player can submit. Main actions (taking gems,
//! reserving, purchasing) consume a turn; `SelectNoble` and `DiscardGems`
//! resolve a sub-flow the previous main action left pending.
//!
//! Gem payloads use `GemType`, not `GemColor`, so a request for gold is
//! representable and can be rejected with a precise reason.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::gems::{GemCollection, GemType};
use super::player::PlayerId;
use crate::cards::{CardId, NobleId, Tier};

/// A complete player action.
///
/// ## Example
///
/// ```
/// use rust_splendor::core::{Action, GemType, PlayerId};
///
/// let take = Action::take_gems("p1", &[GemType::Ruby, GemType::Onyx]);
/// assert_eq!(take.player(), &PlayerId::new("p1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Take one to three gems of distinct colors.
    TakeThreeGems {
        player: PlayerId,
        /// SmallVec keeps the common 1-3 gem request off the heap.
        gems: SmallVec<[GemType; 3]>,
    },

    /// Take two gems of one color.
    TakeTwoGems { player: PlayerId, gem: GemType },

    /// Reserve a market card, or the top of a tier's deck when `card` is `None`.
    ReserveCard {
        player: PlayerId,
        card: Option<CardId>,
        tier: Tier,
    },

    /// Buy a market or reserved card.
    PurchaseCard { player: PlayerId, card: CardId },

    /// Choose one of several eligible nobles.
    SelectNoble { player: PlayerId, noble: NobleId },

    /// Return gems to the bank to get back down to the hand limit.
    DiscardGems { player: PlayerId, gems: GemCollection },
}

impl Action {
    /// Build a take-different-gems action.
    #[must_use]
    pub fn take_gems(player: impl Into<String>, gems: &[GemType]) -> Self {
        Action::TakeThreeGems {
            player: PlayerId::new(player),
            gems: SmallVec::from_slice(gems),
        }
    }

    /// Build a take-two action.
    #[must_use]
    pub fn take_two(player: impl Into<String>, gem: impl Into<GemType>) -> Self {
        Action::TakeTwoGems {
            player: PlayerId::new(player),
            gem: gem.into(),
        }
    }

    /// Build a reserve-from-market action.
    #[must_use]
    pub fn reserve(player: impl Into<String>, card: CardId, tier: Tier) -> Self {
        Action::ReserveCard {
            player: PlayerId::new(player),
            card: Some(card),
            tier,
        }
    }

    /// Build a blind reserve from the top of a tier's deck.
    #[must_use]
    pub fn reserve_blind(player: impl Into<String>, tier: Tier) -> Self {
        Action::ReserveCard {
            player: PlayerId::new(player),
            card: None,
            tier,
        }
    }

    /// Build a purchase action.
    #[must_use]
    pub fn purchase(player: impl Into<String>, card: CardId) -> Self {
        Action::PurchaseCard {
            player: PlayerId::new(player),
            card,
        }
    }

    /// Build a noble selection.
    #[must_use]
    pub fn select_noble(player: impl Into<String>, noble: NobleId) -> Self {
        Action::SelectNoble {
            player: PlayerId::new(player),
            noble,
        }
    }

    /// Build a discard.
    #[must_use]
    pub fn discard(player: impl Into<String>, gems: GemCollection) -> Self {
        Action::DiscardGems {
            player: PlayerId::new(player),
            gems,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> &PlayerId {
        match self {
            Action::TakeThreeGems { player, .. }
            | Action::TakeTwoGems { player, .. }
            | Action::ReserveCard { player, .. }
            | Action::PurchaseCard { player, .. }
            | Action::SelectNoble { player, .. }
            | Action::DiscardGems { player, .. } => player,
        }
    }

    /// Short tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::TakeThreeGems { .. } => "TAKE_THREE_GEMS",
            Action::TakeTwoGems { .. } => "TAKE_TWO_GEMS",
            Action::ReserveCard { .. } => "RESERVE_CARD",
            Action::PurchaseCard { .. } => "PURCHASE_CARD",
            Action::SelectNoble { .. } => "SELECT_NOBLE",
            Action::DiscardGems { .. } => "DISCARD_GEMS",
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay from a seed
/// - Debugging and auditing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Position in the game's action history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player: action.player().clone(),
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gems::GemColor;

    #[test]
    fn test_take_gems_builder() {
        let action = Action::take_gems("p1", &[GemType::Ruby, GemType::Onyx, GemType::Diamond]);

        match &action {
            Action::TakeThreeGems { player, gems } => {
                assert_eq!(player, &PlayerId::new("p1"));
                assert_eq!(gems.len(), 3);
                assert!(!gems.spilled());
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_player_accessor() {
        let actions = [
            Action::take_two("a", GemColor::Ruby),
            Action::reserve_blind("a", Tier::Two),
            Action::purchase("a", CardId::new(4)),
            Action::select_noble("a", NobleId::new(1)),
            Action::discard("a", GemCollection::empty()),
        ];

        for action in &actions {
            assert_eq!(action.player().as_str(), "a");
        }
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::take_gems("a", &[GemType::Ruby]).kind(), "TAKE_THREE_GEMS");
        assert_eq!(Action::purchase("a", CardId::new(1)).kind(), "PURCHASE_CARD");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::reserve_blind("p2", Tier::Three);
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("RESERVE_CARD"));

        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record() {
        let action = Action::purchase("p1", CardId::new(5));
        let record = ActionRecord::new(action.clone(), 3, 5);

        assert_eq!(record.player, PlayerId::new("p1"));
        assert_eq!(record.action, action);
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 5);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}

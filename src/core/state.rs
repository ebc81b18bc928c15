//! Game state: the aggregate root handed between the embedder and the engine.
//!
//! ## GameState
//!
//! Complete game state:
//! - Phase, round, turn order, pending sub-flow
//! - Players and their holdings
//! - Bank, market, decks, noble pool
//! - Action history
//!
//! Collections use `im` persistent data structures, so cloning a state is
//! O(1) and the transition engine can work on a private copy without ever
//! aliasing the caller's value.
//!
//! ## PublicState
//!
//! See `view.rs`: the same information with deck contents reduced to counts.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::gems::GemCollection;
use super::player::{Player, PlayerId};
use super::rng::RandomSource;
use crate::cards::{CardId, NobleId, Tier};
use crate::error::EngineError;

/// Unique identifier for a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    /// Draw a 16-hex-digit id from a random source.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let id = (0..4).fold(String::with_capacity(16), |mut acc, _| {
            acc.push_str(&format!("{:04x}", rng.next_below(1 << 16)));
            acc
        });
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Overall game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Seats still filling; owned by the embedder's lobby.
    Waiting,
    /// Normal play.
    Playing,
    /// Someone reached the prestige threshold; the round is being completed.
    FinalRound,
    /// Winners decided, no further actions accepted.
    Ended,
}

impl GamePhase {
    /// Check if actions are accepted in this phase.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::FinalRound)
    }
}

/// Sub-flow state within the current turn.
///
/// At most one sub-flow is ever pending, and it always belongs to the
/// current player: the turn does not advance until it resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No sub-flow pending; the current player may take a main action.
    #[default]
    Normal,

    /// The player ended a main action above the hand limit.
    AwaitingDiscard {
        player: PlayerId,
        /// Gems that must be returned.
        excess: u32,
    },

    /// The player attracted more than one noble and must pick one.
    AwaitingNobleChoice {
        player: PlayerId,
        eligible: Vec<NobleId>,
    },
}

impl TurnPhase {
    /// The player a sub-flow is waiting on, if any.
    #[must_use]
    pub fn pending_player(&self) -> Option<&PlayerId> {
        match self {
            TurnPhase::Normal => None,
            TurnPhase::AwaitingDiscard { player, .. } | TurnPhase::AwaitingNobleChoice { player, .. } => {
                Some(player)
            }
        }
    }
}

/// Face-up cards, four slots per tier.
///
/// Slots are never compacted: taking a card leaves `None` in place until a
/// refill puts the next deck card there.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Market {
    slots: [[Option<CardId>; Market::SLOTS]; 3],
}

impl Market {
    /// Slots per tier.
    pub const SLOTS: usize = 4;

    /// Create an empty market.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The slots of one tier.
    #[must_use]
    pub fn row(&self, tier: Tier) -> &[Option<CardId>; Market::SLOTS] {
        &self.slots[tier.index()]
    }

    /// Face-up cards of one tier, in slot order.
    pub fn tier_cards(&self, tier: Tier) -> impl Iterator<Item = CardId> + '_ {
        self.slots[tier.index()].iter().flatten().copied()
    }

    /// All face-up cards, tier one first.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.slots.iter().flat_map(|row| row.iter().flatten().copied())
    }

    /// Locate a face-up card.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<(Tier, usize)> {
        Tier::ALL.into_iter().find_map(|tier| {
            self.slots[tier.index()]
                .iter()
                .position(|&slot| slot == Some(card))
                .map(|i| (tier, i))
        })
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    /// Empty the slot holding `card`.
    ///
    /// Returns the card's tier, or `None` if it is not face-up.
    pub fn take(&mut self, card: CardId) -> Option<Tier> {
        let (tier, i) = self.position(card)?;
        self.slots[tier.index()][i] = None;
        Some(tier)
    }

    /// Place a card in the first empty slot of a tier.
    ///
    /// Returns false if the tier has no empty slot.
    pub fn place(&mut self, tier: Tier, card: CardId) -> bool {
        match self.slots[tier.index()].iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(card);
                true
            }
            None => false,
        }
    }
}

/// Complete game state.
///
/// Callers treat a `GameState` as an immutable value: the engine returns a
/// new state for every applied action and never touches its input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: GameId,

    /// Lifecycle phase.
    pub phase: GamePhase,

    /// Pending sub-flow, if any.
    pub turn: TurnPhase,

    /// Players in turn order (fixed at creation).
    pub players: Vector<Player>,

    /// Index into `players` of whose turn it is.
    pub current_player: usize,

    /// Tokens not held by any player.
    pub bank: GemCollection,

    /// Face-up cards.
    pub market: Market,

    /// Remaining cards per tier; the front is the next card dealt.
    pub decks: [Vector<CardId>; 3],

    /// Nobles still available.
    pub nobles: Vector<NobleId>,

    /// Round number (starts at 1, increments when turn order wraps).
    pub round: u32,

    /// First player found at or above the prestige threshold.
    pub end_game_triggered_by: Option<PlayerId>,

    /// Filled only once the phase is `Ended`.
    pub winners: Vec<PlayerId>,

    /// Every applied action, in order.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check if actions are currently accepted.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase.is_in_progress()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Check if it is `id`'s turn.
    #[must_use]
    pub fn is_current_player(&self, id: &PlayerId) -> bool {
        self.players
            .get(self.current_player)
            .is_some_and(|p| &p.id == id)
    }

    /// Position of a player in turn order.
    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Player waiting on a discard, if any.
    #[must_use]
    pub fn pending_gem_discard(&self) -> Option<&PlayerId> {
        match &self.turn {
            TurnPhase::AwaitingDiscard { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Player waiting on a noble choice, if any.
    #[must_use]
    pub fn pending_noble_selection(&self) -> Option<&PlayerId> {
        match &self.turn {
            TurnPhase::AwaitingNobleChoice { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Cards remaining in a tier's deck.
    #[must_use]
    pub fn deck_size(&self, tier: Tier) -> usize {
        self.decks[tier.index()].len()
    }

    /// Sum of the bank and every player's gems.
    ///
    /// Constant for the life of a game.
    #[must_use]
    pub fn gem_supply(&self) -> GemCollection {
        self.players.iter().fold(self.bank, |mut total, p| {
            total.add(&p.gems);
            total
        })
    }

    // === Snapshots ===

    /// Encode a compact binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerInfo;
    use crate::core::rng::GameRng;

    fn state_with_players(names: &[&str]) -> GameState {
        GameState {
            id: GameId("test".to_string()),
            phase: GamePhase::Playing,
            turn: TurnPhase::Normal,
            players: names.iter().map(|n| Player::new(PlayerInfo::new(*n, *n))).collect(),
            current_player: 0,
            bank: GemCollection::uniform(4, 5),
            market: Market::new(),
            decks: Default::default(),
            nobles: Vector::new(),
            round: 1,
            end_game_triggered_by: None,
            winners: Vec::new(),
            history: Vector::new(),
        }
    }

    #[test]
    fn test_phase_in_progress() {
        assert!(!GamePhase::Waiting.is_in_progress());
        assert!(GamePhase::Playing.is_in_progress());
        assert!(GamePhase::FinalRound.is_in_progress());
        assert!(!GamePhase::Ended.is_in_progress());
    }

    #[test]
    fn test_game_id_generation_is_deterministic() {
        let a = GameId::generate(&mut GameRng::new(3));
        let b = GameId::generate(&mut GameRng::new(3));

        assert_eq!(a, b);
        assert_eq!(a.0.len(), 16);
    }

    #[test]
    fn test_market_take_leaves_hole() {
        let mut market = Market::new();
        for raw in 1..=4 {
            assert!(market.place(Tier::One, CardId::new(raw)));
        }
        assert!(!market.place(Tier::One, CardId::new(5)));

        assert_eq!(market.take(CardId::new(2)), Some(Tier::One));
        assert_eq!(
            market.row(Tier::One),
            &[Some(CardId::new(1)), None, Some(CardId::new(3)), Some(CardId::new(4))]
        );

        // Refill goes into the hole, not the end.
        assert!(market.place(Tier::One, CardId::new(9)));
        assert_eq!(market.row(Tier::One)[1], Some(CardId::new(9)));
    }

    #[test]
    fn test_market_lookup() {
        let mut market = Market::new();
        market.place(Tier::Three, CardId::new(80));

        assert_eq!(market.position(CardId::new(80)), Some((Tier::Three, 0)));
        assert!(market.contains(CardId::new(80)));
        assert!(!market.contains(CardId::new(1)));
        assert_eq!(market.take(CardId::new(1)), None);
        assert_eq!(market.cards().collect::<Vec<_>>(), vec![CardId::new(80)]);
    }

    #[test]
    fn test_pending_accessors() {
        let mut state = state_with_players(&["a", "b"]);
        assert_eq!(state.pending_gem_discard(), None);
        assert_eq!(state.pending_noble_selection(), None);

        state.turn = TurnPhase::AwaitingDiscard {
            player: PlayerId::new("a"),
            excess: 2,
        };
        assert_eq!(state.pending_gem_discard(), Some(&PlayerId::new("a")));
        assert_eq!(state.pending_noble_selection(), None);

        state.turn = TurnPhase::AwaitingNobleChoice {
            player: PlayerId::new("b"),
            eligible: vec![NobleId::new(1), NobleId::new(2)],
        };
        assert_eq!(state.pending_gem_discard(), None);
        assert_eq!(state.turn.pending_player(), Some(&PlayerId::new("b")));
    }

    #[test]
    fn test_player_lookup() {
        let state = state_with_players(&["a", "b", "c"]);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.player_index(&PlayerId::new("c")), Some(2));
        assert!(state.player(&PlayerId::new("zz")).is_none());
        assert!(state.is_current_player(&PlayerId::new("a")));
        assert!(!state.is_current_player(&PlayerId::new("b")));
    }

    #[test]
    fn test_gem_supply_counts_players() {
        let mut state = state_with_players(&["a", "b"]);
        state.bank.ruby -= 2;
        state.players[1].gems.ruby += 2;

        assert_eq!(state.gem_supply(), GemCollection::uniform(4, 5));
    }

    #[test]
    fn test_clone_does_not_alias() {
        let state = state_with_players(&["a", "b"]);
        let mut copy = state.clone();
        copy.players[0].gems.onyx = 3;
        copy.nobles.push_back(NobleId::new(1));

        assert_eq!(state.players[0].gems.onyx, 0);
        assert!(state.nobles.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = state_with_players(&["a", "b"]);
        state.decks[Tier::Two.index()].push_back(CardId::new(50));
        state.turn = TurnPhase::AwaitingDiscard {
            player: PlayerId::new("a"),
            excess: 1,
        };

        let bytes = state.to_snapshot().unwrap();
        let restored = GameState::from_snapshot(&bytes).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(GameState::from_snapshot(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_state_json() {
        let state = state_with_players(&["a", "b"]);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"phase\":\"playing\""));

        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

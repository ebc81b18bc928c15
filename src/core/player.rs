//! Player identification and per-player holdings.
//!
//! ## PlayerId
//!
//! Opaque identifier handed in by the embedder (session, account, seat...).
//! The engine never interprets it beyond equality.
//!
//! ## Player
//!
//! Everything a player owns: gems, permanent bonuses, reserved and purchased
//! cards, nobles, and the stored prestige total.

use serde::{Deserialize, Serialize};

use super::gems::{ColorCounts, GemCollection};
use crate::cards::{CardId, NobleId};

/// Embedder-supplied player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Identity of a seat as supplied when creating a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerInfo {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

/// A seated player and everything they hold.
///
/// `prestige` is derived (card points plus noble points) but stored so reads
/// are O(1); the transition engine keeps it in step on every gain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Gem tokens held, gold included.
    pub gems: GemCollection,

    /// Permanent discounts, one per purchased card of that color.
    pub bonuses: ColorCounts,

    /// Reserved cards in reservation order.
    pub reserved: Vec<CardId>,

    /// Purchased cards.
    pub purchased: Vec<CardId>,

    /// Nobles visiting this player.
    pub nobles: Vec<NobleId>,

    /// Stored prestige total.
    pub prestige: u32,
}

impl Player {
    /// Create a player with nothing in hand.
    #[must_use]
    pub fn new(info: PlayerInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            gems: GemCollection::empty(),
            bonuses: ColorCounts::zero(),
            reserved: Vec::new(),
            purchased: Vec::new(),
            nobles: Vec::new(),
            prestige: 0,
        }
    }

    /// Total gem tokens held, gold included.
    #[must_use]
    pub fn gem_count(&self) -> u32 {
        self.gems.total()
    }

    /// Check if a card is in this player's reserve.
    #[must_use]
    pub fn has_reserved(&self, card: CardId) -> bool {
        self.reserved.contains(&card)
    }

    /// Remove a card from the reserve.
    ///
    /// Returns true if the card was found and removed.
    pub fn take_reserved(&mut self, card: CardId) -> bool {
        if let Some(pos) = self.reserved.iter().position(|&c| c == card) {
            self.reserved.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gems::GemColor;

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new("alice");

        assert_eq!(id.as_str(), "alice");
        assert_eq!(PlayerId::from("alice"), id);
        assert_eq!(format!("{}", id), "Player(alice)");
    }

    #[test]
    fn test_new_player_is_empty() {
        let player = Player::new(PlayerInfo::new("p1", "Alice"));

        assert_eq!(player.name, "Alice");
        assert_eq!(player.gem_count(), 0);
        assert!(player.bonuses.is_zero());
        assert!(player.reserved.is_empty());
        assert!(player.purchased.is_empty());
        assert!(player.nobles.is_empty());
        assert_eq!(player.prestige, 0);
    }

    #[test]
    fn test_take_reserved() {
        let mut player = Player::new(PlayerInfo::new("p1", "Alice"));
        player.reserved = vec![CardId::new(3), CardId::new(7)];

        assert!(player.has_reserved(CardId::new(7)));
        assert!(player.take_reserved(CardId::new(3)));
        assert_eq!(player.reserved, vec![CardId::new(7)]);
        assert!(!player.take_reserved(CardId::new(99)));
    }

    #[test]
    fn test_gem_count_includes_gold() {
        let mut player = Player::new(PlayerInfo::new("p1", "Alice"));
        player.gems = GemCollection::empty().with(GemColor::Ruby, 3).with(crate::core::GemType::Gold, 2);

        assert_eq!(player.gem_count(), 5);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerInfo::new("p1", "Alice"));
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}

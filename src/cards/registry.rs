//! Card and noble registry.
//!
//! The `CardRegistry` is the arena every game state points into: decks,
//! market slots, reserves and tableaux hold `CardId`s, the noble pool and
//! player noble lists hold `NobleId`s, and the registry resolves both to their
//! immutable definitions.

use rustc_hash::FxHashMap;

use super::definition::{CardId, DevelopmentCard, Tier};
use super::noble::{Noble, NobleId};

/// Registry of card and noble definitions.
///
/// ## Example
///
/// ```
/// use rust_splendor::cards::{CardId, CardRegistry, DevelopmentCard, Tier};
/// use rust_splendor::core::{ColorCounts, GemColor};
///
/// let mut registry = CardRegistry::new();
/// registry.register_card(DevelopmentCard::new(
///     CardId::new(1),
///     Tier::One,
///     ColorCounts::zero().with(GemColor::Ruby, 3),
///     GemColor::Diamond,
/// ));
///
/// assert_eq!(registry.card(CardId::new(1)).unwrap().tier, Tier::One);
/// assert_eq!(registry.tier_ids(Tier::One), vec![CardId::new(1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, DevelopmentCard>,
    nobles: FxHashMap<NobleId, Noble>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register_card(&mut self, card: DevelopmentCard) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register a noble definition.
    ///
    /// Panics if a noble with the same ID already exists.
    pub fn register_noble(&mut self, noble: Noble) {
        if self.nobles.contains_key(&noble.id) {
            panic!("Noble with ID {:?} already registered", noble.id);
        }
        self.nobles.insert(noble.id, noble);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&DevelopmentCard> {
        self.cards.get(&id)
    }

    /// Get a noble definition by ID.
    #[must_use]
    pub fn noble(&self, id: NobleId) -> Option<&Noble> {
        self.nobles.get(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Get the number of registered nobles.
    #[must_use]
    pub fn noble_count(&self) -> usize {
        self.nobles.len()
    }

    /// Card IDs of one tier, sorted by ID.
    ///
    /// Sorted so setup shuffles from the same starting order on every run.
    #[must_use]
    pub fn tier_ids(&self, tier: Tier) -> Vec<CardId> {
        let mut ids: Vec<_> = self
            .cards
            .values()
            .filter(|c| c.tier == tier)
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// All noble IDs, sorted.
    #[must_use]
    pub fn noble_ids(&self) -> Vec<NobleId> {
        let mut ids: Vec<_> = self.nobles.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all card definitions.
    pub fn cards(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.cards.values()
    }

    /// Iterate over all noble definitions.
    pub fn nobles(&self) -> impl Iterator<Item = &Noble> {
        self.nobles.values()
    }
}

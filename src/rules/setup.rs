//! Game creation.
//!
//! All randomness is drawn from the caller's `RandomSource` in a fixed order:
//! game id, tier one/two/three decks, noble pool, turn order. The same source
//! state always yields the same game.

use im::Vector;
use log::info;
use rustc_hash::FxHashSet;

use crate::cards::{CardId, Tier};
use crate::core::{
    shuffle, GameConfig, GameId, GamePhase, GameState, GemCollection, Market, Player, PlayerInfo,
    RandomSource, RulesConfig, TurnPhase,
};
use crate::error::EngineError;

use super::splendor::Splendor;

impl Splendor {
    /// Build a fresh, shuffled game.
    ///
    /// Errors are contract violations: the seat count disagrees with the
    /// player list, is outside 2-4, or two players share an id.
    pub fn create_game<R: RandomSource + ?Sized>(
        &self,
        config: GameConfig,
        players: Vec<PlayerInfo>,
        rng: &mut R,
    ) -> Result<GameState, EngineError> {
        if players.len() != config.player_count {
            return Err(EngineError::PlayerCountMismatch {
                expected: config.player_count,
                actual: players.len(),
            });
        }
        let colored = self
            .rules
            .colored_supply_for(config.player_count)
            .ok_or(EngineError::UnsupportedPlayerCount(config.player_count))?;

        let mut seen = FxHashSet::default();
        for info in &players {
            if !seen.insert(info.id.clone()) {
                return Err(EngineError::DuplicatePlayer(info.id.clone()));
            }
        }

        let id = GameId::generate(rng);

        let mut market = Market::new();
        let mut decks: [Vector<CardId>; 3] = Default::default();
        for tier in Tier::ALL {
            let mut cards = self.registry.tier_ids(tier);
            shuffle(&mut cards, rng);

            let dealt = cards.len().min(Market::SLOTS);
            for &card in &cards[..dealt] {
                market.place(tier, card);
            }
            decks[tier.index()] = cards[dealt..].iter().copied().collect();
        }

        let mut nobles = self.registry.noble_ids();
        shuffle(&mut nobles, rng);
        nobles.truncate(RulesConfig::nobles_for(config.player_count));

        let mut seats: Vec<Player> = players.into_iter().map(Player::new).collect();
        shuffle(&mut seats, rng);

        info!(
            "created game {} for {} players, turn order [{}]",
            id,
            seats.len(),
            seats.iter().map(|p| p.id.as_str()).collect::<Vec<_>>().join(", ")
        );

        Ok(GameState {
            id,
            phase: GamePhase::Playing,
            turn: TurnPhase::Normal,
            players: seats.into_iter().collect(),
            current_player: 0,
            bank: GemCollection::uniform(colored, self.rules.gold_supply),
            market,
            decks,
            nobles: nobles.into_iter().collect(),
            round: 1,
            end_game_triggered_by: None,
            winners: Vec::new(),
            history: Vector::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, GemColor, GemType, PlayerId};

    /// Always picks index 0.
    struct Lowest;

    impl RandomSource for Lowest {
        fn next_below(&mut self, _bound: usize) -> usize {
            0
        }
    }

    fn players(n: usize) -> Vec<PlayerInfo> {
        ["a", "b", "c", "d", "e"][..n]
            .iter()
            .map(|id| PlayerInfo::new(*id, id.to_uppercase()))
            .collect()
    }

    #[test]
    fn test_bank_by_player_count() {
        let engine = Splendor::new();
        for (n, colored) in [(2, 4), (3, 5), (4, 7)] {
            let state = engine
                .create_game(GameConfig::new(n), players(n), &mut GameRng::new(1))
                .unwrap();

            for color in GemColor::ALL {
                assert_eq!(state.bank[color], colored);
            }
            assert_eq!(state.bank[GemType::Gold], 5);
            assert_eq!(state.nobles.len(), n + 1);
            assert_eq!(state.player_count(), n);
        }
    }

    #[test]
    fn test_market_and_decks() {
        let state = Splendor::new()
            .create_game(GameConfig::new(2), players(2), &mut GameRng::new(2))
            .unwrap();

        for (tier, remaining) in [(Tier::One, 36), (Tier::Two, 26), (Tier::Three, 16)] {
            assert_eq!(state.market.tier_cards(tier).count(), 4);
            assert_eq!(state.deck_size(tier), remaining);
        }

        let mut all: Vec<_> = state.market.cards().collect();
        for deck in &state.decks {
            all.extend(deck.iter().copied());
        }
        let unique: FxHashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), 90);
        assert_eq!(unique.len(), 90);
    }

    #[test]
    fn test_initial_phase() {
        let state = Splendor::new()
            .create_game(GameConfig::new(3), players(3), &mut GameRng::new(3))
            .unwrap();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.turn, TurnPhase::Normal);
        assert_eq!(state.round, 1);
        assert_eq!(state.current_player, 0);
        assert!(state.winners.is_empty());
        assert!(state.history.is_empty());
        for player in &state.players {
            assert!(player.gems.is_empty());
            assert!(player.bonuses.is_zero());
            assert_eq!(player.prestige, 0);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let engine = Splendor::new();
        let a = engine.create_game(GameConfig::new(4), players(4), &mut GameRng::new(42)).unwrap();
        let b = engine.create_game(GameConfig::new(4), players(4), &mut GameRng::new(42)).unwrap();
        let c = engine.create_game(GameConfig::new(4), players(4), &mut GameRng::new(43)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_injected_source_controls_order() {
        // Index 0 every draw rotates each list left by one.
        let state = Splendor::new()
            .create_game(GameConfig::new(3), players(3), &mut Lowest)
            .unwrap();

        let order: Vec<_> = state.players.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(state.id.0, "0000000000000000");
    }

    #[test]
    fn test_player_count_mismatch() {
        let result = Splendor::new().create_game(GameConfig::new(3), players(2), &mut GameRng::new(0));
        assert!(matches!(
            result,
            Err(EngineError::PlayerCountMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_unsupported_player_count() {
        let engine = Splendor::new();
        let result = engine.create_game(GameConfig::new(5), players(5), &mut GameRng::new(0));
        assert!(matches!(result, Err(EngineError::UnsupportedPlayerCount(5))));

        let result = engine.create_game(GameConfig::new(1), players(1), &mut GameRng::new(0));
        assert!(matches!(result, Err(EngineError::UnsupportedPlayerCount(1))));
    }

    #[test]
    fn test_duplicate_player() {
        let infos = vec![PlayerInfo::new("a", "A"), PlayerInfo::new("a", "Again")];
        let result = Splendor::new().create_game(GameConfig::new(2), infos, &mut GameRng::new(0));
        match result {
            Err(EngineError::DuplicatePlayer(id)) => assert_eq!(id, PlayerId::new("a")),
            other => panic!("unexpected result {:?}", other),
        }
    }
}

//! Property tests over random playouts and random holdings.

mod common;

use common::{play_out, players, random_action};
use proptest::prelude::*;
use rust_splendor::rules::{can_afford, card_shortfall, standard};
use rust_splendor::{
    Action, CardId, ColorCounts, GameConfig, GameRng, GameState, GemCollection, GemType, NobleId,
    Player, PlayerInfo, RulesEngine, Splendor, Tier, TurnPhase,
};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 48,
        ..ProptestConfig::default()
    }
}

fn random_game(n: usize, seed: u64, steps: usize) -> (Splendor, Vec<GameState>) {
    let engine = Splendor::new();
    let start = engine
        .create_game(GameConfig::new(n), players(n), &mut GameRng::new(seed))
        .unwrap();
    let states = play_out(&engine, start, &mut GameRng::new(seed ^ 0x5eed), steps, random_action);
    (engine, states)
}

fn gem_collection() -> impl Strategy<Value = GemCollection> {
    (0u8..=7, 0u8..=7, 0u8..=7, 0u8..=7, 0u8..=7, 0u8..=5).prop_map(|(w, b, g, r, k, gold)| GemCollection {
        diamond: w,
        sapphire: b,
        emerald: g,
        ruby: r,
        onyx: k,
        gold,
    })
}

fn color_counts() -> impl Strategy<Value = ColorCounts> {
    prop::array::uniform5(0u8..=6).prop_map(ColorCounts::from_array)
}

fn gem_type() -> impl Strategy<Value = GemType> {
    prop::sample::select(GemType::ALL.to_vec())
}

fn tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::ALL.to_vec())
}

/// Any action, legal or not, for one of the seats.
fn any_action(seats: Vec<String>) -> impl Strategy<Value = Action> {
    let seat = prop::sample::select(seats);
    (
        seat,
        0usize..6,
        prop::collection::vec(gem_type(), 0..5),
        1u16..=95,
        tier(),
        1u8..=11,
        gem_collection(),
    )
        .prop_map(|(player, kind, gems, card, tier, noble, discard)| match kind {
            0 => Action::take_gems(player, &gems),
            1 => Action::take_two(player, gems.first().copied().unwrap_or(GemType::Gold)),
            2 if card % 2 == 0 => Action::reserve_blind(player, tier),
            2 => Action::reserve(player, CardId::new(card), tier),
            3 => Action::purchase(player, CardId::new(card)),
            4 => Action::select_noble(player, NobleId::new(noble)),
            _ => Action::discard(player, discard),
        })
}

proptest! {
    #![proptest_config(config())]

    /// Bank plus hands is constant for every gem type, and no card is lost.
    #[test]
    fn prop_token_and_card_conservation(n in 2usize..=4, seed in any::<u64>(), steps in 0usize..200) {
        let (_, states) = random_game(n, seed, steps);
        let supply = states[0].gem_supply();

        for state in &states {
            prop_assert_eq!(state.gem_supply(), supply);

            let mut cards = state.market.cards().count();
            cards += state.decks.iter().map(|d| d.len()).sum::<usize>();
            for player in &state.players {
                cards += player.reserved.len() + player.purchased.len();
                prop_assert!(player.reserved.len() <= 3);
            }
            prop_assert_eq!(cards, 90);
            prop_assert_eq!(state.nobles.len() + state.players.iter().map(|p| p.nobles.len()).sum::<usize>(), n + 1);
        }
    }

    /// A turn that completes advances the seat by one; the round ticks
    /// exactly when the seat wraps to 0. A turn left pending stays put.
    #[test]
    fn prop_turn_monotonicity(n in 2usize..=4, seed in any::<u64>(), steps in 1usize..200) {
        let (_, states) = random_game(n, seed, steps);

        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if after.turn == TurnPhase::Normal {
                prop_assert_eq!(after.current_player, (before.current_player + 1) % n);
                let wrapped = after.current_player == 0;
                prop_assert_eq!(after.round, before.round + u32::from(wrapped));
            } else {
                prop_assert_eq!(after.current_player, before.current_player);
                prop_assert_eq!(after.round, before.round);
                prop_assert!(after.players[after.current_player].gem_count() <= 13);
            }
        }
    }

    /// Validation is pure whatever the verdict, and anything it accepts applies.
    #[test]
    fn prop_validation_never_mutates(
        seed in any::<u64>(),
        steps in 0usize..80,
        pick in any::<prop::sample::Index>(),
        actions in prop::collection::vec(any_action(vec!["alice".into(), "bob".into(), "carol".into(), "mallory".into()]), 1..20),
    ) {
        let (engine, states) = random_game(3, seed, steps);
        let state = pick.get(&states);
        let before = state.clone();

        for action in &actions {
            let verdict = engine.validate_action(state, action);
            prop_assert_eq!(state, &before);
            match verdict {
                Ok(()) => prop_assert!(engine.apply_action(state, action).is_ok()),
                Err(_) => prop_assert!(engine.apply_action(state, action).is_err()),
            }
            prop_assert_eq!(state, &before);
        }
    }

    /// Affordability and a zero shortfall are the same thing.
    #[test]
    fn prop_afford_shortfall_duality(
        gems in gem_collection(),
        bonuses in color_counts(),
        card_index in 0usize..90,
    ) {
        let registry = standard().registry();
        let mut ids: Vec<CardId> = Tier::ALL.iter().flat_map(|&t| registry.tier_ids(t)).collect();
        ids.sort();
        let card = registry.card(ids[card_index]).unwrap();

        let mut player = Player::new(PlayerInfo::new("p", "P"));
        player.gems = gems;
        player.bonuses = bonuses;

        prop_assert_eq!(can_afford(card, &player), card_shortfall(card, &player).is_zero());
    }

    /// A player over the limit always has a legal discard back to exactly the
    /// limit; discards of any other size are rejected.
    #[test]
    fn prop_discard_closure(
        seed in any::<u64>(),
        hand in gem_collection(),
        wrong in gem_collection(),
    ) {
        prop_assume!(hand.total() > 10);

        let engine = Splendor::new();
        let mut state = engine
            .create_game(GameConfig::new(4), players(4), &mut GameRng::new(seed))
            .unwrap();
        let actor = state.players[0].id.clone();
        state.players[0].gems = hand;
        let excess = hand.total() - 10;
        state.turn = TurnPhase::AwaitingDiscard { player: actor.clone(), excess };

        let discards = engine.legal_actions(&state, &actor);
        prop_assert!(!discards.is_empty());
        for action in discards.iter().take(50) {
            prop_assert!(engine.is_legal(&state, action), "{:?}", action);
        }

        if wrong.total() != excess {
            let rejected = engine.validate_action(&state, &Action::discard(actor.as_str(), wrong));
            prop_assert!(rejected.is_err());
        }
    }
}

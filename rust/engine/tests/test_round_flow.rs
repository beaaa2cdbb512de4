use highcard_engine::cards::{CardId, Location, Owner};
use highcard_engine::engine::{EngineConfig, Pacing, RoundEngine};
use highcard_engine::game::{RoundState, Score, Winner};

fn engine(player_hand: usize, opponent_hand: usize) -> RoundEngine {
    RoundEngine::new(EngineConfig {
        player_hand,
        opponent_hand,
        seed: Some(11),
        pacing: Pacing::instant(),
    })
    .expect("valid config")
}

/// Gives every opponent card `value` so the random pick does not matter.
fn fix_opponent(e: &mut RoundEngine, value: u8) {
    for id in e.hand(Owner::Opponent).ids() {
        e.assign_value(id, Some(value)).unwrap();
    }
}

#[test]
fn higher_player_value_scores_for_player() {
    let mut e = engine(3, 3);
    let card = e.hand(Owner::Player).ids()[0];
    e.assign_value(card, Some(7)).unwrap();
    fix_opponent(&mut e, 3);

    assert!(e.play_card(card));
    e.run_until_idle();

    let outcome = e.last_outcome().expect("round resolved");
    assert_eq!(outcome.player_value, 7);
    assert_eq!(outcome.opponent_value, 3);
    assert_eq!(outcome.winner, Winner::Player);
    assert_eq!((e.score().player, e.score().opponent), (1, 0));
}

#[test]
fn higher_opponent_value_scores_for_opponent() {
    let mut e = engine(3, 3);
    let card = e.hand(Owner::Player).ids()[1];
    e.assign_value(card, Some(2)).unwrap();
    fix_opponent(&mut e, 9);

    e.play_card(card);
    e.run_until_idle();

    assert_eq!(e.last_outcome().unwrap().winner, Winner::Opponent);
    assert_eq!((e.score().player, e.score().opponent), (0, 1));
}

#[test]
fn tie_scores_nothing_but_still_discards() {
    let mut e = engine(3, 3);
    let card = e.hand(Owner::Player).ids()[0];
    e.assign_value(card, Some(5)).unwrap();
    fix_opponent(&mut e, 5);

    e.play_card(card);
    e.run_until_idle();

    assert_eq!(e.last_outcome().unwrap().winner, Winner::Tie);
    assert_eq!(e.score(), Score::default());
    let discards = e.discard_counts();
    assert_eq!(discards.player, 1);
    assert_eq!(discards.opponent, 1);
    assert_eq!(e.card(card).unwrap().location, Location::Discard);
    assert_eq!(e.state(), RoundState::Idle);
}

#[test]
fn second_play_before_round_completes_is_ignored() {
    let mut e = engine(3, 3);
    let ids = e.hand(Owner::Player).ids();

    assert!(e.play_card(ids[0]));
    assert!(!e.play_card(ids[1]));

    let area = e.play_area();
    assert_eq!(area.player.map(|c| c.id), Some(ids[0]));
    assert_eq!(e.card(ids[1]).unwrap().location, Location::Hand);

    // still ignored mid-resolution
    e.tick();
    assert!(!e.play_card(ids[1]));
    e.tick();
    assert_eq!(e.state(), RoundState::Settling);
    assert!(!e.play_card(ids[1]));
    e.tick();
    assert!(e.play_card(ids[1]));
}

#[test]
fn opponent_and_unknown_cards_cannot_be_played() {
    let mut e = engine(2, 2);
    let opp = e.hand(Owner::Opponent).ids()[0];
    assert!(!e.play_card(opp));
    assert!(!e.play_card(CardId(999)));
    assert_eq!(e.state(), RoundState::Idle);
    assert!(e.drain_notices().is_empty());
}

#[test]
fn discarded_cards_cannot_be_replayed() {
    let mut e = engine(2, 2);
    let card = e.hand(Owner::Player).ids()[0];
    e.play_card(card);
    e.run_until_idle();
    assert!(!e.play_card(card));
    assert_eq!(e.state(), RoundState::Idle);
}

#[test]
fn full_game_discards_every_card_and_announces_each_round() {
    let mut e = engine(4, 4);
    let mut resolved = 0;
    while !e.is_game_over() {
        let card = e.hand(Owner::Player).ids()[0];
        assert!(e.play_card(card));
        e.run_until_idle();
        resolved += 1;
        e.check_invariants().unwrap();
    }
    assert_eq!(resolved, 4);
    assert_eq!(e.discard_counts().total(), 8);
    assert_eq!(e.rounds_played(), 4);

    let score = e.score();
    let outcomes = e.drain_outcomes();
    assert_eq!(outcomes.len(), 4);
    let ties = outcomes.iter().filter(|o| o.winner == Winner::Tie).count() as u32;
    assert_eq!(score.player + score.opponent + ties, 4);
    assert_eq!(e.final_winner(), Some(score.leader()));

    let notices = e.drain_notices();
    assert_eq!(notices.len(), 4);
    for (n, o) in notices.iter().zip(&outcomes) {
        assert_eq!(n.text, o.message());
    }
}

#[test]
fn same_seed_same_inputs_same_game() {
    let play = |seed| {
        let mut e = RoundEngine::with_seed(seed);
        while !e.is_game_over() {
            let card = e.hand(Owner::Player).ids()[0];
            e.play_card(card);
            e.run_until_idle();
        }
        e.drain_outcomes()
    };
    assert_eq!(play(2024), play(2024));
}

use std::time::Duration;

use highcard_engine::cards::{CardId, Location, Owner};
use highcard_engine::engine::{EngineConfig, Pacing, RoundEngine};
use highcard_engine::game::{RoundState, Score};
use highcard_engine::policy::OpponentPolicy;
use highcard_engine::scheduler::StepQueue;
use rand::RngCore;

fn config(player_hand: usize, opponent_hand: usize) -> EngineConfig {
    EngineConfig {
        player_hand,
        opponent_hand,
        seed: Some(21),
        pacing: Pacing::instant(),
    }
}

#[test]
fn empty_opponent_hand_cancels_the_round_without_scoring() {
    let mut e = RoundEngine::new(config(2, 1)).unwrap();
    let ids = e.hand(Owner::Player).ids();

    e.play_card(ids[0]);
    e.run_until_idle();
    let score = e.score();
    assert!(e.hand(Owner::Opponent).is_empty());
    assert!(e.is_game_over());
    e.drain_notices();

    assert!(e.play_card(ids[1]));
    e.run_until_idle();

    assert_eq!(e.state(), RoundState::Idle);
    assert_eq!(e.score(), score);
    assert_eq!(e.card(ids[1]).unwrap().location, Location::Hand);
    assert!(e.play_area().is_empty());
    let notices = e.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text, "Round cancelled");
    e.check_invariants().unwrap();
}

#[test]
fn invalid_value_discards_both_cards_with_a_notice() {
    let mut e = RoundEngine::new(config(3, 3)).unwrap();
    let card = e.hand(Owner::Player).ids()[0];
    e.assign_value(card, None).unwrap();

    e.play_card(card);
    e.run_until_idle();

    assert_eq!(e.state(), RoundState::Idle);
    assert_eq!(e.score(), Score::default());
    assert!(e.last_outcome().is_none());
    assert_eq!(e.discard_counts().player, 1);
    assert_eq!(e.discard_counts().opponent, 1);
    let notices = e.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text, "Invalid card value");
    assert_eq!(notices[0].duration, Duration::from_millis(1200));
    e.check_invariants().unwrap();
}

#[test]
fn out_of_range_value_is_treated_as_invalid() {
    let mut e = RoundEngine::new(config(2, 2)).unwrap();
    for id in e.hand(Owner::Opponent).ids() {
        e.assign_value(id, Some(42)).unwrap();
    }
    let card = e.hand(Owner::Player).ids()[0];
    e.play_card(card);
    e.run_until_idle();
    assert_eq!(e.score(), Score::default());
    assert_eq!(e.discard_counts().total(), 2);
}

#[test]
fn assign_value_rejects_unknown_cards() {
    let mut e = RoundEngine::new(config(1, 1)).unwrap();
    assert!(e.assign_value(CardId(7), Some(3)).is_err());
    assert!(e.card(CardId(7)).is_err());
}

/// Always names a card the opponent does not hold.
struct Cheater;

impl OpponentPolicy for Cheater {
    fn choose(&self, _hand: &[CardId], _rng: &mut dyn RngCore) -> Option<CardId> {
        Some(CardId(0))
    }

    fn name(&self) -> &str {
        "cheater"
    }
}

#[test]
fn policy_choice_outside_the_hand_is_not_honoured() {
    let mut e = RoundEngine::with_parts(config(2, 2), Box::new(Cheater), StepQueue::new())
        .unwrap();
    let card = e.hand(Owner::Player).ids()[1];
    e.play_card(card);
    e.run_until_idle();

    assert_eq!(e.state(), RoundState::Idle);
    assert_eq!(e.card(CardId(0)).unwrap().location, Location::Hand);
    assert_eq!(e.card(card).unwrap().location, Location::Hand);
    assert_eq!(e.hand(Owner::Opponent).len(), 2);
    e.check_invariants().unwrap();
}

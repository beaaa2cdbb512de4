//! Table rendering for the terminal adapter.
//!
//! Pure functions from engine views to strings. Every value is shown,
//! the opponent's included.
//!
//! ```rust
//! use highcard_engine::cards::{Card, CardId, Owner};
//! use highcard_cli::formatters::format_card;
//!
//! let mut card = Card::new(CardId(0), Owner::Player);
//! card.value = Some(7);
//! assert_eq!(format_card(&card), "[ 7]");
//! ```

use highcard_engine::cards::{Card, Owner};
use highcard_engine::engine::RoundEngine;
use highcard_engine::game::{Score, Winner};
use highcard_engine::scheduler::Scheduler;
use highcard_engine::zones::{DiscardCounts, Hand, PlayArea};

pub fn format_card(card: &Card) -> String {
    match card.value {
        Some(v) => format!("[{:>2}]", v),
        None => "[ ?]".to_string(),
    }
}

/// Player hands get 1-based slot numbers, the opponent's do not.
pub fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    let numbered = hand.owner == Owner::Player;
    hand.cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if numbered {
                format!("{}:{}", i + 1, format_card(c))
            } else {
                format_card(c)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_play_area(area: &PlayArea) -> String {
    let slot = |c: Option<Card>| c.map_or_else(|| "[  ]".to_string(), |c| format_card(&c));
    format!(
        "Player {}  vs  {} CPU",
        slot(area.player),
        slot(area.opponent)
    )
}

pub fn format_discards(counts: &DiscardCounts) -> String {
    format!(
        "Player discard: {}  CPU discard: {}",
        counts.player, counts.opponent
    )
}

pub fn format_score(score: &Score) -> String {
    format!(
        "Player Score: {} | Opponent Score: {}",
        score.player, score.opponent
    )
}

pub fn format_final(score: &Score) -> String {
    let verdict = match score.leader() {
        Winner::Player => "You win the game",
        Winner::Opponent => "CPU wins the game",
        Winner::Tie => "The game is a draw",
    };
    format!(
        "Game over: {} ({} - {})",
        verdict, score.player, score.opponent
    )
}

/// The whole table, one zone per line.
pub fn format_table<S: Scheduler>(engine: &RoundEngine<S>) -> String {
    [
        format!("CPU hand:   {}", format_hand(&engine.hand(Owner::Opponent))),
        format!("Play area:  {}", format_play_area(&engine.play_area())),
        format!("Your hand:  {}", format_hand(&engine.hand(Owner::Player))),
        format_discards(&engine.discard_counts()),
        format_score(&engine.score()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use highcard_engine::cards::{CardId, Location};

    fn card(id: usize, owner: Owner, value: Option<u8>) -> Card {
        let mut c = Card::new(CardId(id), owner);
        c.value = value;
        c
    }

    #[test]
    fn cards_are_right_aligned() {
        assert_eq!(format_card(&card(0, Owner::Player, Some(10))), "[10]");
        assert_eq!(format_card(&card(0, Owner::Player, Some(3))), "[ 3]");
        assert_eq!(format_card(&card(0, Owner::Player, None)), "[ ?]");
    }

    #[test]
    fn only_the_player_hand_is_numbered() {
        let cards = vec![
            card(0, Owner::Player, Some(4)),
            card(1, Owner::Player, Some(9)),
            card(2, Owner::Opponent, Some(1)),
        ];
        assert_eq!(
            format_hand(&Hand::collect(&cards, Owner::Player)),
            "1:[ 4] 2:[ 9]"
        );
        assert_eq!(format_hand(&Hand::collect(&cards, Owner::Opponent)), "[ 1]");
    }

    #[test]
    fn empty_slots_render_blank() {
        let mut p = card(0, Owner::Player, Some(6));
        p.location = Location::InPlay;
        let area = PlayArea::collect(&[p]);
        assert_eq!(format_play_area(&area), "Player [ 6]  vs  [  ] CPU");
    }

    #[test]
    fn final_line_names_the_leader() {
        let s = Score {
            player: 3,
            opponent: 2,
        };
        assert_eq!(format_final(&s), "Game over: You win the game (3 - 2)");
        let s = Score {
            player: 1,
            opponent: 1,
        };
        assert!(format_final(&s).contains("draw"));
    }

    #[test]
    fn table_lists_every_zone() {
        let engine = RoundEngine::with_seed(1);
        let table = format_table(&engine);
        assert!(table.contains("CPU hand:"));
        assert!(table.contains("Your hand:  1:"));
        assert!(table.contains("Player discard: 0  CPU discard: 0"));
        assert!(table.contains("Player Score: 0 | Opponent Score: 0"));
    }
}

//! Read-only views over the card arena.
//!
//! The arena's `location` field is authoritative; these views are rebuilt on
//! demand so a card can never be listed in two zones at once.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Location, Owner};

/// One owner's cards still available for play, in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    pub owner: Owner,
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn collect(cards: &[Card], owner: Owner) -> Self {
        Self {
            owner,
            cards: cards
                .iter()
                .filter(|c| c.is_in_hand_of(owner))
                .copied()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Card at a 1-based display slot.
    pub fn slot(&self, slot: usize) -> Option<&Card> {
        slot.checked_sub(1).and_then(|i| self.cards.get(i))
    }
}

/// The cards committed to the current round, at most one per owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayArea {
    pub player: Option<Card>,
    pub opponent: Option<Card>,
}

impl PlayArea {
    pub fn collect(cards: &[Card]) -> Self {
        let find = |owner: Owner| {
            cards
                .iter()
                .find(|c| c.owner == owner && c.location == Location::InPlay)
                .copied()
        };
        Self {
            player: find(Owner::Player),
            opponent: find(Owner::Opponent),
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.player.is_some()) + usize::from(self.opponent.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-owner size of the discard piles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardCounts {
    pub player: usize,
    pub opponent: usize,
}

impl DiscardCounts {
    pub fn collect(cards: &[Card]) -> Self {
        let count = |owner: Owner| {
            cards
                .iter()
                .filter(|c| c.owner == owner && c.location == Location::Discard)
                .count()
        };
        Self {
            player: count(Owner::Player),
            opponent: count(Owner::Opponent),
        }
    }

    pub fn total(&self) -> usize {
        self.player + self.opponent
    }
}

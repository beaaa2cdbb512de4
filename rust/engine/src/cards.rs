use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest value a card can be dealt.
pub const MIN_VALUE: u8 = 1;
/// Highest value a card can be dealt.
pub const MAX_VALUE: u8 = 10;

/// Stable identity of a card for the lifetime of an engine.
/// Ids are dense indices into the engine's card arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The side a card is bound to for the whole session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    /// The human player
    Player,
    /// The computer opponent
    Opponent,
}

impl Owner {
    pub fn all() -> [Owner; 2] {
        [Owner::Player, Owner::Opponent]
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Player => f.write_str("Player"),
            Owner::Opponent => f.write_str("CPU"),
        }
    }
}

/// Where a card currently sits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// In its owner's hand, available for a future round
    Hand,
    /// Committed to the current round
    InPlay,
    /// Used up by a resolved round
    Discard,
}

/// A single card: plain data, no presentation attached.
///
/// `value` is `None` only when it was explicitly cleared; the deal always
/// assigns a number in [`MIN_VALUE`]..=[`MAX_VALUE`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub owner: Owner,
    pub value: Option<u8>,
    pub location: Location,
}

impl Card {
    pub fn new(id: CardId, owner: Owner) -> Self {
        Self {
            id,
            owner,
            value: None,
            location: Location::Hand,
        }
    }

    pub fn is_in_hand_of(&self, owner: Owner) -> bool {
        self.owner == owner && self.location == Location::Hand
    }
}

/// Builds the card arena: player cards first, then opponent cards.
pub fn build_cards(player_hand: usize, opponent_hand: usize) -> Vec<Card> {
    let mut v = Vec::with_capacity(player_hand + opponent_hand);
    for _ in 0..player_hand {
        v.push(Card::new(CardId(v.len()), Owner::Player));
    }
    for _ in 0..opponent_hand {
        v.push(Card::new(CardId(v.len()), Owner::Opponent));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cards_assigns_dense_ids_and_owners() {
        let cards = build_cards(2, 3);
        assert_eq!(cards.len(), 5);
        for (i, c) in cards.iter().enumerate() {
            assert_eq!(c.id, CardId(i));
            assert_eq!(c.location, Location::Hand);
            assert!(c.value.is_none());
        }
        let owned_by = |o: Owner| cards.iter().filter(|c| c.owner == o).count();
        assert_eq!(owned_by(Owner::Player), 2);
        assert_eq!(owned_by(Owner::Opponent), 3);
    }

    #[test]
    fn owner_display_matches_table_labels() {
        assert_eq!(Owner::Player.to_string(), "Player");
        assert_eq!(Owner::Opponent.to_string(), "CPU");
    }
}

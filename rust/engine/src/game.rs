use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lifecycle of a single round.
///
/// `Idle` → `AwaitingOpponent` → `Resolving` → `Settling` → `Idle`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Accepting player input
    #[default]
    Idle,
    /// Player committed, opponent not yet
    AwaitingOpponent,
    /// Both committed, outcome not yet applied
    Resolving,
    /// Outcome applied, cards not yet discarded
    Settling,
}

/// Outcome of a single comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

/// Round tally. Only ever incremented, reset by a new game.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player = self.player.saturating_add(1),
            Winner::Opponent => self.opponent = self.opponent.saturating_add(1),
            Winner::Tie => {}
        }
    }

    /// Leader by score, `Tie` when level.
    pub fn leader(&self) -> Winner {
        match self.player.cmp(&self.opponent) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Opponent,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

/// Result of a resolved round, as handed to the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_value: u8,
    pub opponent_value: u8,
    pub winner: Winner,
}

impl RoundOutcome {
    pub fn message(&self) -> String {
        let (p, c) = (self.player_value, self.opponent_value);
        match self.winner {
            Winner::Player => format!("Player wins this round ({} > {})", p, c),
            Winner::Opponent => format!("CPU wins this round ({} > {})", c, p),
            Winner::Tie => format!("Tie: {} = {}", p, c),
        }
    }

    pub fn display_for(&self) -> Duration {
        match self.winner {
            Winner::Tie => Duration::from_millis(1000),
            _ => Duration::from_millis(1200),
        }
    }
}

/// Transient status message with the time it should stay on screen.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub text: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(text: impl Into<String>, millis: u64) -> Self {
        Self {
            text: text.into(),
            duration: Duration::from_millis(millis),
        }
    }
}

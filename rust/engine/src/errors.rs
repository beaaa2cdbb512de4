use thiserror::Error;

use crate::cards::CardId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown card: {0}")]
    UnknownCard(CardId),
    #[error("Unknown opponent policy: {0}")]
    UnknownPolicy(String),
    #[error("Invalid card value: {value:?} (expected {min}..={max})")]
    InvalidCardValue {
        value: Option<u8>,
        min: u8,
        max: u8,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invariant violated: {0}")]
    InvariantViolated(String),
}

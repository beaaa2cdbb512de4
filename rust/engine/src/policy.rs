//! Opponent card selection.
//!
//! - [`OpponentPolicy`] - how the computer picks a card from its hand
//! - [`RandomPolicy`] - uniform choice, the only shipped strategy
//! - [`create_policy`] - factory by name

use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::cards::CardId;
use crate::errors::GameError;

/// Interface for the computer side's card choice.
///
/// # Example Implementation
///
/// ```rust
/// use highcard_engine::cards::CardId;
/// use highcard_engine::policy::OpponentPolicy;
/// use rand::RngCore;
///
/// struct FirstCard;
///
/// impl OpponentPolicy for FirstCard {
///     fn choose(&self, hand: &[CardId], _rng: &mut dyn RngCore) -> Option<CardId> {
///         hand.first().copied()
///     }
///
///     fn name(&self) -> &str {
///         "first"
///     }
/// }
/// ```
pub trait OpponentPolicy: Send + Sync {
    /// Pick one of `hand`, or `None` when the hand is empty.
    fn choose(&self, hand: &[CardId], rng: &mut dyn RngCore) -> Option<CardId>;

    fn name(&self) -> &str;
}

/// Uniformly random choice among the cards still in hand.
#[derive(Debug, Clone, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OpponentPolicy for RandomPolicy {
    fn choose(&self, hand: &[CardId], rng: &mut dyn RngCore) -> Option<CardId> {
        hand.choose(rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Creates an opponent policy by name.
///
/// # Errors
///
/// [`GameError::UnknownPolicy`] for anything other than `"random"`.
///
/// ```rust
/// use highcard_engine::policy::create_policy;
///
/// let policy = create_policy("random").unwrap();
/// assert_eq!(policy.name(), "random");
/// assert!(create_policy("minimax").is_err());
/// ```
pub fn create_policy(name: &str) -> Result<Box<dyn OpponentPolicy>, GameError> {
    match name {
        "random" => Ok(Box::new(RandomPolicy::new())),
        other => Err(GameError::UnknownPolicy(other.to_string())),
    }
}

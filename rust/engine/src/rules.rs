use std::cmp::Ordering;

use crate::cards::{MAX_VALUE, MIN_VALUE};
use crate::errors::GameError;
use crate::game::{RoundOutcome, Winner};

/// Checks that a card carries a playable value.
///
/// A missing value, or one outside [`MIN_VALUE`]..=[`MAX_VALUE`], is rejected.
///
/// # Examples
///
/// ```
/// use highcard_engine::rules::validate_value;
/// use highcard_engine::errors::GameError;
///
/// assert_eq!(validate_value(Some(7)), Ok(7));
/// assert!(matches!(validate_value(None), Err(GameError::InvalidCardValue { .. })));
/// assert!(matches!(validate_value(Some(11)), Err(GameError::InvalidCardValue { .. })));
/// ```
pub fn validate_value(value: Option<u8>) -> Result<u8, GameError> {
    match value {
        Some(v) if (MIN_VALUE..=MAX_VALUE).contains(&v) => Ok(v),
        _ => Err(GameError::InvalidCardValue {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        }),
    }
}

/// The whole game rule: the higher value wins, equal values tie.
pub fn compare(player_value: u8, opponent_value: u8) -> Winner {
    match player_value.cmp(&opponent_value) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Opponent,
        Ordering::Equal => Winner::Tie,
    }
}

/// Validates both values and compares them.
///
/// # Errors
///
/// Returns [`GameError::InvalidCardValue`] for the first card whose value
/// fails [`validate_value`]. The caller decides how to recover.
///
/// # Examples
///
/// ```
/// use highcard_engine::rules::evaluate;
/// use highcard_engine::game::Winner;
///
/// let outcome = evaluate(Some(7), Some(3)).unwrap();
/// assert_eq!(outcome.winner, Winner::Player);
///
/// let outcome = evaluate(Some(5), Some(5)).unwrap();
/// assert_eq!(outcome.winner, Winner::Tie);
///
/// assert!(evaluate(Some(4), None).is_err());
/// ```
pub fn evaluate(
    player_value: Option<u8>,
    opponent_value: Option<u8>,
) -> Result<RoundOutcome, GameError> {
    let p = validate_value(player_value)?;
    let c = validate_value(opponent_value)?;
    Ok(RoundOutcome {
        player_value: p,
        opponent_value: c,
        winner: compare(p, c),
    })
}

//! Input parsing for the interactive `play` command.

/// What a line typed at the play prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Play the card in this 1-based hand slot
    Play(usize),
    /// Abandon the current game and deal again
    NewGame,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the play prompt.
///
/// Accepts (case-insensitive):
/// - a slot number `1..=hand_len` → play that card
/// - "n" or "new" → new game
/// - "q" or "quit" → quit
///
/// # Example
///
/// ```rust
/// # use highcard_cli::validation::{parse_play_input, ParseResult};
/// assert_eq!(parse_play_input("2", 5), ParseResult::Play(2));
/// assert_eq!(parse_play_input("N", 5), ParseResult::NewGame);
/// assert_eq!(parse_play_input("quit", 5), ParseResult::Quit);
///
/// match parse_play_input("6", 5) {
///     ParseResult::Invalid(msg) => assert!(msg.contains("slot 6")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_input(input: &str, hand_len: usize) -> ParseResult {
    let input = input.trim().to_lowercase();
    let Some(first) = input.split_whitespace().next() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match first {
        "q" | "quit" => ParseResult::Quit,
        "n" | "new" => ParseResult::NewGame,
        other => match other.parse::<usize>() {
            Ok(_) if hand_len == 0 => {
                ParseResult::Invalid("No cards left; type 'n' for a new game".to_string())
            }
            Ok(slot) if (1..=hand_len).contains(&slot) => ParseResult::Play(slot),
            Ok(slot) => ParseResult::Invalid(format!(
                "No card in slot {} (choose 1-{})",
                slot, hand_len
            )),
            Err(_) => ParseResult::Invalid(format!(
                "Unrecognized input '{}'. Type a card number, 'n' or 'q'",
                other
            )),
        },
    }
}

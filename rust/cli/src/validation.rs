//! Input parsing for interactive commands and card arguments.
//!
//! Parsing only checks the shape of the input. Whether an action is legal at the
//! current table is decided by the engine when the command is submitted.

use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "k" or "check" → Check
/// - "c" or "call" → Call
/// - "raise X" or "r X" → Raise to a street total of X
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 120"),
///     ParseResult::Action(PlayerAction::Raise(120))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("bet 5") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => match parts.get(1) {
            None => {
                ParseResult::Invalid("Raise requires an amount (e.g., 'raise 120')".to_string())
            }
            Some(amount) => match amount.parse::<u32>() {
                Ok(0) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Ok(to) => ParseResult::Action(PlayerAction::Raise(to)),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            },
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid: check, call, raise <amount>, fold, q",
            head
        )),
    }
}

/// Parses card arguments such as `As` or `10h`, rejecting malformed and repeated cards.
pub fn parse_cards(args: &[String]) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    args.iter()
        .map(|arg| {
            let card: Card = arg.parse().map_err(|e| format!("{}", e))?;
            if !seen.insert(card) {
                return Err(format!("Duplicate card: {}", arg));
            }
            Ok(card)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action_form() {
        assert_eq!(parse_player_action("check"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("K"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action(" Call "), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("f"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(
            parse_player_action("r 60"),
            ParseResult::Action(PlayerAction::Raise(60))
        );
        assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn raise_needs_a_positive_amount() {
        for input in ["raise", "raise 0", "raise -5", "raise lots"] {
            assert!(
                matches!(parse_player_action(input), ParseResult::Invalid(_)),
                "{} should be invalid",
                input
            );
        }
    }

    #[test]
    fn empty_and_unknown_input_is_invalid() {
        assert_eq!(
            parse_player_action("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
        assert!(matches!(parse_player_action("allin"), ParseResult::Invalid(_)));
    }

    #[test]
    fn card_arguments() {
        let args: Vec<String> = ["As", "10h", "2c"].iter().map(|s| s.to_string()).collect();
        let cards = parse_cards(&args).unwrap();
        assert_eq!(cards.len(), 3);

        let dup: Vec<String> = ["As", "as"].iter().map(|s| s.to_string()).collect();
        assert!(parse_cards(&dup).unwrap_err().contains("Duplicate"));

        let bad: Vec<String> = vec!["Zz".to_string()];
        assert!(parse_cards(&bad).is_err());
    }
}

//! The human seat: a stdin-prompted [`Strategy`] with an input validation
//! retry loop. The engine never retries; re-prompting on bad input happens
//! here, outside the state machine.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use holdem_engine::rules::validate_action;
use holdem_engine::strategy::{DecisionView, SeatAction, Strategy};

use crate::formatters::{format_board, format_card};

/// Result of parsing one line of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A recognized action
    Action(SeatAction),
    /// The player asked to quit (q or quit)
    Quit,
    /// Unusable input, with a message to show the player
    Invalid(String),
}

/// Parse player input into a [`SeatAction`] or a special command.
///
/// Accepted forms (case-insensitive): `fold`/`f`, `check`, `call`/`c`,
/// `bet N`, `raise N`, `allin`/`all-in`, `q`/`quit`.
pub fn parse_seat_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    if head == "q" || head == "quit" {
        return ParseResult::Quit;
    }

    match head {
        "fold" | "f" => ParseResult::Action(SeatAction::Fold),
        "check" => ParseResult::Action(SeatAction::Check),
        "call" | "c" => ParseResult::Action(SeatAction::Call),
        "allin" | "all-in" => ParseResult::Action(SeatAction::AllIn),
        "bet" | "raise" => match parts.get(1).and_then(|a| a.parse::<u32>().ok()) {
            Some(amount) if head == "bet" => ParseResult::Action(SeatAction::Bet(amount)),
            Some(amount) => ParseResult::Action(SeatAction::Raise(amount)),
            None => ParseResult::Invalid(format!("'{}' needs a chip amount, e.g. '{} 50'", head, head)),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Try: fold, check, call, bet N, raise N, allin, quit",
            other
        )),
    }
}

/// Interactive seat driven from stdin. Setting `quit` lets the play command
/// stop between hands; within a hand quitting folds the seat.
pub struct HumanStrategy {
    quit: Arc<AtomicBool>,
}

impl HumanStrategy {
    pub fn new(quit: Arc<AtomicBool>) -> Self {
        Self { quit }
    }

    fn prompt_once(&self, view: &DecisionView<'_>, line: &str) -> Option<SeatAction> {
        match parse_seat_action(line) {
            ParseResult::Quit => {
                self.quit.store(true, Ordering::Relaxed);
                Some(SeatAction::Fold)
            }
            ParseResult::Invalid(msg) => {
                println!("{}", msg);
                None
            }
            ParseResult::Action(action) => {
                // re-prompt on actions the table would refuse
                match validate_action(view.chips, view.call_amount, action) {
                    Ok(_) => Some(action),
                    Err(e) => {
                        println!("{}", e);
                        None
                    }
                }
            }
        }
    }
}

impl Strategy for HumanStrategy {
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
        let hole: Vec<String> = view
            .hole
            .iter()
            .flatten()
            .map(|c| format_card(c))
            .collect();
        println!();
        println!(
            "Your cards: {}  Board: {}",
            hole.join(" "),
            format_board(view.community)
        );
        println!(
            "Pot: {}  To call: {}  Your stack: {}",
            view.pot, view.call_amount, view.chips
        );

        let stdin = std::io::stdin();
        loop {
            print!("Your action> ");
            let _ = std::io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                // EOF: stop asking, fold out of the hand
                Ok(0) | Err(_) => {
                    self.quit.store(true, Ordering::Relaxed);
                    return SeatAction::Fold;
                }
                Ok(_) => {
                    if let Some(action) = self.prompt_once(view, &line) {
                        return action;
                    }
                }
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_actions() {
        assert_eq!(parse_seat_action("fold"), ParseResult::Action(SeatAction::Fold));
        assert_eq!(parse_seat_action(" CHECK "), ParseResult::Action(SeatAction::Check));
        assert_eq!(parse_seat_action("c"), ParseResult::Action(SeatAction::Call));
        assert_eq!(parse_seat_action("allin"), ParseResult::Action(SeatAction::AllIn));
    }

    #[test]
    fn parses_amount_actions() {
        assert_eq!(parse_seat_action("bet 100"), ParseResult::Action(SeatAction::Bet(100)));
        assert_eq!(parse_seat_action("raise 40"), ParseResult::Action(SeatAction::Raise(40)));
        assert!(matches!(parse_seat_action("bet"), ParseResult::Invalid(_)));
        assert!(matches!(parse_seat_action("raise lots"), ParseResult::Invalid(_)));
    }

    #[test]
    fn parses_quit_and_garbage() {
        assert_eq!(parse_seat_action("q"), ParseResult::Quit);
        assert_eq!(parse_seat_action("quit"), ParseResult::Quit);
        assert!(matches!(parse_seat_action("shove"), ParseResult::Invalid(_)));
        assert!(matches!(parse_seat_action("   "), ParseResult::Invalid(_)));
    }
}

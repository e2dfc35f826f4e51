//! Player input parsing

use crate::output::console::LABELS;
use millionaire_domain::Lifeline;
use std::str::FromStr;

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Pick the choice at this index (0 = A)
    Answer(usize),
    Lifeline(Lifeline),
    WalkAway,
    Ladder,
    Help,
    Quit,
    Empty,
    Unknown,
}

impl PlayerCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        if let Some(command) = line.strip_prefix('/') {
            return match command.to_lowercase().as_str() {
                "walk" | "walk_away" | "stop" => Self::WalkAway,
                "ladder" | "prizes" => Self::Ladder,
                "help" | "?" => Self::Help,
                "quit" | "exit" | "q" => Self::Quit,
                other => Lifeline::from_str(other)
                    .map(Self::Lifeline)
                    .unwrap_or(Self::Unknown),
            };
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => LABELS
                .iter()
                .position(|label| label.eq_ignore_ascii_case(&c))
                .map(Self::Answer)
                .unwrap_or(Self::Unknown),
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers() {
        assert_eq!(PlayerCommand::parse("a"), PlayerCommand::Answer(0));
        assert_eq!(PlayerCommand::parse(" D "), PlayerCommand::Answer(3));
        assert_eq!(PlayerCommand::parse("e"), PlayerCommand::Unknown);
        assert_eq!(PlayerCommand::parse("ab"), PlayerCommand::Unknown);
    }

    #[test]
    fn test_parse_lifelines() {
        assert_eq!(
            PlayerCommand::parse("/50"),
            PlayerCommand::Lifeline(Lifeline::FiftyFifty)
        );
        assert_eq!(
            PlayerCommand::parse("/50:50"),
            PlayerCommand::Lifeline(Lifeline::FiftyFifty)
        );
        assert_eq!(
            PlayerCommand::parse("/Audience"),
            PlayerCommand::Lifeline(Lifeline::Audience)
        );
        assert_eq!(
            PlayerCommand::parse("/friend"),
            PlayerCommand::Lifeline(Lifeline::CallFriend)
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(PlayerCommand::parse("/walk"), PlayerCommand::WalkAway);
        assert_eq!(PlayerCommand::parse("/ladder"), PlayerCommand::Ladder);
        assert_eq!(PlayerCommand::parse("/help"), PlayerCommand::Help);
        assert_eq!(PlayerCommand::parse("/quit"), PlayerCommand::Quit);
        assert_eq!(PlayerCommand::parse("   "), PlayerCommand::Empty);
        assert_eq!(PlayerCommand::parse("/dance"), PlayerCommand::Unknown);
    }
}

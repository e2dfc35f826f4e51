//! Lifeline kinds and the payloads they produce

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One of the three single-use aids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifeline {
    /// Removes two wrong answers
    FiftyFifty,
    /// Polls the audience for a suggestion
    Audience,
    /// Pardons the next wrong answer
    CallFriend,
}

impl Lifeline {
    pub const ALL: [Lifeline; 3] = [Lifeline::FiftyFifty, Lifeline::Audience, Lifeline::CallFriend];

    /// The full set a fresh session starts with
    pub fn all() -> BTreeSet<Lifeline> {
        Self::ALL.into_iter().collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Lifeline::FiftyFifty => "fifty_fifty",
            Lifeline::Audience => "audience",
            Lifeline::CallFriend => "call_friend",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Lifeline::FiftyFifty => "50:50",
            Lifeline::Audience => "Ask the Audience",
            Lifeline::CallFriend => "Call a Friend",
        }
    }
}

impl std::fmt::Display for Lifeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Lifeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifty_fifty" | "fifty-fifty" | "50:50" | "50" => Ok(Lifeline::FiftyFifty),
            "audience" | "ask_the_audience" => Ok(Lifeline::Audience),
            "call_friend" | "call-friend" | "friend" => Ok(Lifeline::CallFriend),
            other => Err(format!("unknown lifeline: {}", other)),
        }
    }
}

/// Result of 50:50: the two wrong answers taken off the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiftyFiftyOutcome {
    pub disabled_answers: BTreeSet<String>,
}

/// One answer's share of the audience vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollShare {
    pub answer: String,
    pub percent: u32,
}

/// Result of Ask the Audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceOutcome {
    /// The majority choice of the audience
    pub suggested_answer: String,
    /// Percentages over every still-enabled answer, summing to 100
    pub poll: Vec<PollShare>,
}

impl AudienceOutcome {
    pub fn share_of(&self, answer: &str) -> Option<u32> {
        self.poll
            .iter()
            .find(|s| s.answer == answer)
            .map(|s| s.percent)
    }
}

/// Acknowledgement that the next wrong answer will be pardoned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendOutcome {
    pub forgiveness_active: bool,
}

/// Result of any lifeline use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "lifeline", rename_all = "snake_case")]
pub enum LifelineOutcome {
    FiftyFifty(FiftyFiftyOutcome),
    Audience(AudienceOutcome),
    CallFriend(FriendOutcome),
}

impl LifelineOutcome {
    pub fn lifeline(&self) -> Lifeline {
        match self {
            LifelineOutcome::FiftyFifty(_) => Lifeline::FiftyFifty,
            LifelineOutcome::Audience(_) => Lifeline::Audience,
            LifelineOutcome::CallFriend(_) => Lifeline::CallFriend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_three() {
        assert_eq!(Lifeline::all().len(), 3);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("50:50".parse::<Lifeline>().unwrap(), Lifeline::FiftyFifty);
        assert_eq!("Friend".parse::<Lifeline>().unwrap(), Lifeline::CallFriend);
        assert!("phone".parse::<Lifeline>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Lifeline::CallFriend).unwrap();
        assert_eq!(json, "\"call_friend\"");
    }

    #[test]
    fn test_share_of() {
        let outcome = AudienceOutcome {
            suggested_answer: "A".to_string(),
            poll: vec![
                PollShare {
                    answer: "A".to_string(),
                    percent: 70,
                },
                PollShare {
                    answer: "B".to_string(),
                    percent: 30,
                },
            ],
        };
        assert_eq!(outcome.share_of("B"), Some(30));
        assert_eq!(outcome.share_of("C"), None);
    }
}

//! Built-in offline question deck

use async_trait::async_trait;
use millionaire_application::ports::question_source::{QuestionSource, QuestionSourceError};
use millionaire_domain::{Difficulty, Question};
use tracing::debug;

type Entry = (
    Difficulty,
    &'static str,
    &'static str,
    &'static str,
    [&'static str; 3],
);

/// Easiest first, so the deck plays in ladder order
const DECK: [Entry; 15] = [
    (
        Difficulty::Easy,
        "General Knowledge",
        "How many legs does a spider have?",
        "Eight",
        ["Six", "Ten", "Twelve"],
    ),
    (
        Difficulty::Easy,
        "Geography",
        "What is the capital of Italy?",
        "Rome",
        ["Milan", "Naples", "Venice"],
    ),
    (
        Difficulty::Easy,
        "Science: Nature",
        "Which planet is known as the Red Planet?",
        "Mars",
        ["Venus", "Jupiter", "Mercury"],
    ),
    (
        Difficulty::Easy,
        "Science: Computers",
        "What does CPU stand for?",
        "Central Processing Unit",
        [
            "Central Process Unit",
            "Computer Personal Unit",
            "Central Processor Utility",
        ],
    ),
    (
        Difficulty::Easy,
        "Entertainment: Music",
        "How many strings does a standard guitar have?",
        "Six",
        ["Four", "Five", "Seven"],
    ),
    (
        Difficulty::Medium,
        "History",
        "In which year did the Berlin Wall fall?",
        "1989",
        ["1987", "1991", "1985"],
    ),
    (
        Difficulty::Medium,
        "Science: Nature",
        "What is the chemical symbol for gold?",
        "Au",
        ["Ag", "Gd", "Go"],
    ),
    (
        Difficulty::Medium,
        "Art",
        "Who painted the ceiling of the Sistine Chapel?",
        "Michelangelo",
        ["Raphael", "Leonardo da Vinci", "Donatello"],
    ),
    (
        Difficulty::Medium,
        "Geography",
        "Which is the longest river in South America?",
        "Amazon",
        ["Paraná", "Orinoco", "São Francisco"],
    ),
    (
        Difficulty::Medium,
        "Science: Mathematics",
        "What is the smallest prime number greater than 50?",
        "53",
        ["51", "57", "59"],
    ),
    (
        Difficulty::Hard,
        "History",
        "Which empire was ruled by Mansa Musa?",
        "Mali Empire",
        ["Songhai Empire", "Ghana Empire", "Kanem Empire"],
    ),
    (
        Difficulty::Hard,
        "Science: Computers",
        "In what year was the first version of the Linux kernel released?",
        "1991",
        ["1989", "1993", "1995"],
    ),
    (
        Difficulty::Hard,
        "Science: Nature",
        "What is the most abundant gas in Earth's atmosphere?",
        "Nitrogen",
        ["Oxygen", "Argon", "Carbon dioxide"],
    ),
    (
        Difficulty::Hard,
        "Geography",
        "What is the capital of Kazakhstan?",
        "Astana",
        ["Almaty", "Bishkek", "Tashkent"],
    ),
    (
        Difficulty::Hard,
        "Entertainment: Books",
        "Who wrote the novel \"One Hundred Years of Solitude\"?",
        "Gabriel García Márquez",
        ["Mario Vargas Llosa", "Jorge Luis Borges", "Isabel Allende"],
    ),
];

/// Fifteen fixed questions for playing without a feed file
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDeck;

impl BuiltinDeck {
    pub fn new() -> Self {
        Self
    }

    /// The whole deck as validated questions
    pub fn questions() -> Result<Vec<Question>, QuestionSourceError> {
        DECK.iter()
            .map(|(difficulty, category, text, correct, incorrect)| {
                Question::new(*text, *correct, *incorrect)
                    .map(|q| q.with_category(*category).with_difficulty(*difficulty))
                    .map_err(|e| QuestionSourceError::Malformed(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl QuestionSource for BuiltinDeck {
    async fn fetch_questions(&self, count: usize) -> Result<Vec<Question>, QuestionSourceError> {
        let mut questions = Self::questions()?;
        if questions.len() < count {
            return Err(QuestionSourceError::NotEnough {
                needed: count,
                available: questions.len(),
            });
        }
        questions.truncate(count);
        debug!("Serving {} built-in questions", count);
        Ok(questions)
    }

    fn describe(&self) -> String {
        "built-in deck".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millionaire_domain::{LADDER_LENGTH, Session};

    #[test]
    fn test_deck_is_valid() {
        let questions = BuiltinDeck::questions().unwrap();
        assert_eq!(questions.len(), LADDER_LENGTH);
        assert!(Session::new(questions).is_ok());
    }

    #[test]
    fn test_deck_runs_easy_to_hard() {
        let questions = BuiltinDeck::questions().unwrap();
        let difficulties: Vec<_> = questions.iter().filter_map(|q| q.difficulty()).collect();
        let mut sorted = difficulties.clone();
        sorted.sort_by_key(|d| match d {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        });
        assert_eq!(difficulties, sorted);
    }

    #[tokio::test]
    async fn test_fetch_more_than_deck() {
        let err = BuiltinDeck::new().fetch_questions(20).await.unwrap_err();
        assert!(matches!(
            err,
            QuestionSourceError::NotEnough {
                needed: 20,
                available: 15
            }
        ));
    }
}

//! Question value object

use crate::core::error::DomainError;
use crate::random::{RandomSource, shuffle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of wrong answers every question carries
pub const INCORRECT_ANSWER_COUNT: usize = 3;

/// Difficulty label carried over from the question feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// A multiple-choice trivia question (Value Object)
///
/// Holds one correct answer and exactly three incorrect ones. Immutable once
/// built; the session owns its questions for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    text: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
}

impl Question {
    /// Create a validated question
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let question = Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
            category: None,
            difficulty: None,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Check the shape invariants.
    ///
    /// Used by [`Question::new`] and again when a deserialized session is
    /// restored, since serde bypasses the constructor.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text cannot be empty".to_string(),
            ));
        }
        if self.correct_answer.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "correct answer cannot be empty: {}",
                self.text
            )));
        }
        if self.incorrect_answers.len() != INCORRECT_ANSWER_COUNT {
            return Err(DomainError::InvalidQuestion(format!(
                "expected {} incorrect answers, got {}: {}",
                INCORRECT_ANSWER_COUNT,
                self.incorrect_answers.len(),
                self.text
            )));
        }
        if self.incorrect_answers.contains(&self.correct_answer) {
            return Err(DomainError::InvalidQuestion(format!(
                "correct answer is also listed as incorrect: {}",
                self.text
            )));
        }
        let distinct: BTreeSet<&String> = self.incorrect_answers.iter().collect();
        if distinct.len() != self.incorrect_answers.len() {
            return Err(DomainError::InvalidQuestion(format!(
                "incorrect answers must be distinct: {}",
                self.text
            )));
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate == self.correct_answer
    }

    /// All four answers, correct one first
    pub fn all_answers(&self) -> Vec<&str> {
        std::iter::once(self.correct_answer.as_str())
            .chain(self.incorrect_answers.iter().map(String::as_str))
            .collect()
    }

    /// All four answers in a random display order
    pub fn shuffled_answers(&self, rng: &mut dyn RandomSource) -> Vec<String> {
        let mut answers: Vec<String> = self.all_answers().into_iter().map(String::from).collect();
        shuffle(&mut answers, rng);
        answers
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn sample() -> Question {
        Question::new("Capital of France?", "Paris", ["Lyon", "Nice", "Lille"]).unwrap()
    }

    #[test]
    fn test_question_creation() {
        let q = sample();
        assert_eq!(q.text(), "Capital of France?");
        assert_eq!(q.correct_answer(), "Paris");
        assert_eq!(q.incorrect_answers().len(), 3);
        assert!(q.is_correct("Paris"));
        assert!(!q.is_correct("Lyon"));
    }

    #[test]
    fn test_rejects_wrong_incorrect_count() {
        let err = Question::new("Q?", "A", ["B", "C"]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_rejects_empty_text() {
        assert!(Question::new("   ", "A", ["B", "C", "D"]).is_err());
    }

    #[test]
    fn test_rejects_correct_answer_listed_as_incorrect() {
        assert!(Question::new("Q?", "A", ["A", "C", "D"]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_incorrect_answers() {
        let err = Question::new("Dup?", "A", ["B", "B", "C"]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_validate_catches_deserialized_duplicates() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["incorrect_answers"] = serde_json::json!(["Lyon", "Lyon", "Nice"]);
        let q: Question = serde_json::from_value(value).unwrap();
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_shuffled_answers_keeps_all_answers() {
        let q = sample();
        let mut rng = ScriptedRandom::new([3, 1, 0]);
        let mut shuffled = q.shuffled_answers(&mut rng);
        shuffled.sort();
        let mut expected: Vec<String> = q.all_answers().into_iter().map(String::from).collect();
        expected.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_metadata_serde() {
        let q = sample()
            .with_category("Geography")
            .with_difficulty(Difficulty::Easy);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"difficulty\":\"easy\""));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}

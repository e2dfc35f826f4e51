//! Fixtures shared by the domain unit tests

use crate::core::question::Question;

pub(crate) fn correct(index: usize) -> String {
    format!("right-{}", index)
}

pub(crate) fn wrong(index: usize) -> String {
    format!("wrong-{}-a", index)
}

/// Fifteen questions whose answers encode their index
pub(crate) fn sample_questions() -> Vec<Question> {
    (0..15)
        .map(|i| {
            Question::new(
                format!("Question {}?", i + 1),
                correct(i),
                [
                    format!("wrong-{}-a", i),
                    format!("wrong-{}-b", i),
                    format!("wrong-{}-c", i),
                ],
            )
            .unwrap()
        })
        .collect()
}

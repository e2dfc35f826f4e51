//! Fixtures shared by the use-case tests

use millionaire_domain::{Question, Session};

/// Fifteen questions: question `i` has `right-i` and `wrong-i-{a,b,c}`
pub(crate) fn sample_questions() -> Vec<Question> {
    (0..15)
        .map(|i| {
            Question::new(
                format!("Question {}?", i + 1),
                format!("right-{}", i),
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

pub(crate) fn sample_session() -> Session {
    Session::new(sample_questions()).unwrap()
}

//! Answer resolver use case
//!
//! Runs one answer (or an expired countdown) through the session and
//! returns everything a presenter needs about the turn.

use millionaire_domain::{AnswerOutcome, Session, SessionState, Unavailable};
use serde::Serialize;

/// What happened on one resolved turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReport {
    pub outcome: AnswerOutcome,
    /// The answer the player picked; `None` when the countdown ran out
    pub selected: Option<String>,
    pub correct_answer: String,
    /// A wrong answer was forgiven by Call a Friend
    pub pardoned: bool,
    /// Ordinal of the question that was answered
    pub ordinal: usize,
    pub score: u64,
    pub state: SessionState,
    pub victory: bool,
}

impl AnswerReport {
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }

    pub fn finished(&self) -> bool {
        self.state == SessionState::Finished
    }
}

/// Resolves answers against a session
pub struct AnswerResolver;

impl AnswerResolver {
    /// Submit the player's answer
    pub fn submit(session: &mut Session, answer: &str) -> Result<AnswerReport, Unavailable> {
        let ordinal = session.ordinal();
        let correct_answer = session.current_question().correct_answer().to_string();
        let was_forgiving = session.forgiveness_active();

        let outcome = session.submit_answer(answer)?;
        let pardoned = was_forgiving && !session.forgiveness_active();

        Ok(Self::report(
            session,
            outcome,
            Some(answer.to_string()),
            correct_answer,
            pardoned,
            ordinal,
        ))
    }

    /// Resolve an expired countdown
    pub fn time_out(session: &mut Session) -> Result<AnswerReport, Unavailable> {
        let ordinal = session.ordinal();
        let correct_answer = session.current_question().correct_answer().to_string();

        let outcome = session.force_timeout()?;

        Ok(Self::report(
            session,
            outcome,
            None,
            correct_answer,
            false,
            ordinal,
        ))
    }

    fn report(
        session: &Session,
        outcome: AnswerOutcome,
        selected: Option<String>,
        correct_answer: String,
        pardoned: bool,
        ordinal: usize,
    ) -> AnswerReport {
        AnswerReport {
            outcome,
            selected,
            correct_answer,
            pardoned,
            ordinal,
            score: session.score(),
            state: session.state(),
            victory: session.is_victory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::sample_session;
    use millionaire_domain::{LifelineEngine, ScriptedRandom};

    #[test]
    fn test_correct_answer_report() {
        let mut session = sample_session();
        let report = AnswerResolver::submit(&mut session, "right-0").unwrap();
        assert_eq!(report.outcome, AnswerOutcome::Correct);
        assert_eq!(report.ordinal, 1);
        assert_eq!(report.score, 100);
        assert_eq!(report.state, SessionState::InProgress);
        assert!(!report.pardoned);
        assert!(!report.timed_out());
        assert_eq!(report.correct_answer, "right-0");
    }

    #[test]
    fn test_incorrect_answer_report() {
        let mut session = sample_session();
        let report = AnswerResolver::submit(&mut session, "wrong-0-b").unwrap();
        assert_eq!(report.outcome, AnswerOutcome::Incorrect);
        assert_eq!(report.selected.as_deref(), Some("wrong-0-b"));
        assert!(report.finished());
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_pardoned_answer_report() {
        let mut session = sample_session();
        let mut engine = LifelineEngine::new(Box::new(ScriptedRandom::default()));
        engine.call_friend(&mut session).unwrap();

        let report = AnswerResolver::submit(&mut session, "wrong-0-a").unwrap();
        assert_eq!(report.outcome, AnswerOutcome::Correct);
        assert!(report.pardoned);
        assert!(!report.finished());

        let report = AnswerResolver::submit(&mut session, "right-1").unwrap();
        assert!(!report.pardoned);
    }

    #[test]
    fn test_timeout_report() {
        let mut session = sample_session();
        let report = AnswerResolver::time_out(&mut session).unwrap();
        assert!(report.timed_out());
        assert_eq!(report.outcome, AnswerOutcome::Incorrect);
        assert!(report.finished());
    }

    #[test]
    fn test_finished_session_is_unavailable() {
        let mut session = sample_session();
        AnswerResolver::time_out(&mut session).unwrap();
        assert_eq!(
            AnswerResolver::submit(&mut session, "right-0"),
            Err(Unavailable::GameFinished)
        );
        assert_eq!(
            AnswerResolver::time_out(&mut session),
            Err(Unavailable::GameFinished)
        );
    }
}

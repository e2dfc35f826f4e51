//! Session entity: the game state machine

use super::snapshot::SessionSnapshot;
use super::value_objects::{AnswerOutcome, SessionState, Unavailable};
use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::lifeline::value_objects::Lifeline;
use crate::prize::ladder::{LADDER_LENGTH, PrizeLadder};
use std::collections::BTreeSet;

/// A single game in progress (Entity)
///
/// Owns the question set, position, score and lifeline state. Every mutation
/// goes through [`Session::submit_answer`], [`Session::force_timeout`],
/// [`Session::walk_away`] or the lifeline engine; once finished, all of them
/// return [`Unavailable::GameFinished`] and leave the session untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    questions: Vec<Question>,
    ladder: PrizeLadder,
    current_index: usize,
    score: u64,
    is_finished: bool,
    unused_lifelines: BTreeSet<Lifeline>,
    forgiveness_active: bool,
    disabled_answers: BTreeSet<String>,
}

impl Session {
    /// Start a fresh game on the standard ladder
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        Self::with_ladder(questions, PrizeLadder::standard())
    }

    /// Start a fresh game on a custom ladder
    pub fn with_ladder(questions: Vec<Question>, ladder: PrizeLadder) -> Result<Self, DomainError> {
        Self::resume(SessionSnapshot::fresh(questions), ladder)
    }

    /// Rebuild a session from a saved snapshot.
    ///
    /// The snapshot may come from untrusted storage, so every invariant is
    /// checked again here.
    pub fn resume(snapshot: SessionSnapshot, ladder: PrizeLadder) -> Result<Self, DomainError> {
        let SessionSnapshot {
            questions,
            current_index,
            score,
            is_finished,
            unused_lifelines,
            forgiveness_active,
            disabled_answers,
        } = snapshot;

        if questions.len() != LADDER_LENGTH {
            return Err(DomainError::QuestionCount {
                expected: LADDER_LENGTH,
                actual: questions.len(),
            });
        }
        if current_index >= LADDER_LENGTH {
            return Err(DomainError::IndexOutOfRange {
                index: current_index,
                len: LADDER_LENGTH,
            });
        }
        for question in &questions {
            question.validate()?;
        }

        // An open game has banked exactly the rung below its current question
        if !is_finished {
            let banked = ladder.amount_for(current_index).unwrap_or(0);
            if score != banked {
                return Err(DomainError::InvalidSnapshot(format!(
                    "score {} does not match the banked prize {} at question {}",
                    score,
                    banked,
                    current_index + 1
                )));
            }
        }

        if forgiveness_active && unused_lifelines.contains(&Lifeline::CallFriend) {
            return Err(DomainError::InvalidSnapshot(
                "forgiveness is active but Call a Friend is still unused".to_string(),
            ));
        }

        if !disabled_answers.is_empty() {
            let current = &questions[current_index];
            if unused_lifelines.contains(&Lifeline::FiftyFifty) {
                return Err(DomainError::InvalidSnapshot(
                    "answers are disabled but 50:50 is still unused".to_string(),
                ));
            }
            if disabled_answers.len() != 2
                || !disabled_answers
                    .iter()
                    .all(|a| current.incorrect_answers().contains(a))
            {
                return Err(DomainError::InvalidSnapshot(
                    "disabled answers must be two incorrect answers of the current question"
                        .to_string(),
                ));
            }
        }

        Ok(Self {
            questions,
            ladder,
            current_index,
            score,
            is_finished,
            unused_lifelines,
            forgiveness_active,
            disabled_answers,
        })
    }

    /// Plain-data copy of the session for save/resume
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            questions: self.questions.clone(),
            current_index: self.current_index,
            score: self.score,
            is_finished: self.is_finished,
            unused_lifelines: self.unused_lifelines.clone(),
            forgiveness_active: self.forgiveness_active,
            disabled_answers: self.disabled_answers.clone(),
        }
    }

    // ==================== Mutators ====================

    /// Resolve the player's selected answer
    pub fn submit_answer(&mut self, candidate: &str) -> Result<AnswerOutcome, Unavailable> {
        self.ensure_open()?;

        if self.current_question().is_correct(candidate) {
            self.advance();
            return Ok(AnswerOutcome::Correct);
        }

        if self.forgiveness_active {
            self.forgiveness_active = false;
            self.advance();
            return Ok(AnswerOutcome::Correct);
        }

        self.fall_to_checkpoint();
        Ok(AnswerOutcome::Incorrect)
    }

    /// Resolve an expired countdown. Forgiveness never applies here.
    pub fn force_timeout(&mut self) -> Result<AnswerOutcome, Unavailable> {
        self.ensure_open()?;
        self.fall_to_checkpoint();
        Ok(AnswerOutcome::Incorrect)
    }

    /// Stop playing and keep the current score
    pub fn walk_away(&mut self) -> Result<u64, Unavailable> {
        self.ensure_open()?;
        self.is_finished = true;
        Ok(self.score)
    }

    pub(crate) fn take_lifeline(&mut self, lifeline: Lifeline) -> Result<(), Unavailable> {
        self.ensure_open()?;
        if !self.unused_lifelines.remove(&lifeline) {
            return Err(Unavailable::LifelineSpent(lifeline));
        }
        Ok(())
    }

    pub(crate) fn disable_answers(&mut self, answers: BTreeSet<String>) {
        self.disabled_answers = answers;
    }

    pub(crate) fn activate_forgiveness(&mut self) {
        self.forgiveness_active = true;
    }

    fn ensure_open(&self) -> Result<(), Unavailable> {
        if self.is_finished {
            return Err(Unavailable::GameFinished);
        }
        Ok(())
    }

    /// Bank the current rung and move on, or finish after the last question
    fn advance(&mut self) {
        if let Some(amount) = self.ladder.amount_for(self.ordinal()) {
            self.score = amount;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.disabled_answers.clear();
        } else {
            self.is_finished = true;
        }
    }

    fn fall_to_checkpoint(&mut self) {
        self.score = self.ladder.checkpoint_amount_before(self.ordinal());
        self.is_finished = true;
    }

    // ==================== Queries ====================

    pub fn state(&self) -> SessionState {
        if self.is_finished {
            SessionState::Finished
        } else if self.current_index == 0
            && self.score == 0
            && self.unused_lifelines.len() == Lifeline::ALL.len()
        {
            SessionState::Created
        } else {
            SessionState::InProgress
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn ladder(&self) -> &PrizeLadder {
        &self.ladder
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number of the current question
    pub fn ordinal(&self) -> usize {
        self.current_index + 1
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// Prize at stake on the current question
    pub fn current_prize(&self) -> u64 {
        self.ladder.amount_for(self.ordinal()).unwrap_or(0)
    }

    /// Amount kept if the current question is missed
    pub fn guaranteed_prize(&self) -> u64 {
        self.ladder.checkpoint_amount_before(self.ordinal())
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Finished by clearing the final question
    pub fn is_victory(&self) -> bool {
        self.is_finished
            && self.ordinal() == self.questions.len()
            && self.score == self.ladder.top_prize()
    }

    pub fn remaining_lifelines(&self) -> &BTreeSet<Lifeline> {
        &self.unused_lifelines
    }

    pub fn can_use(&self, lifeline: Lifeline) -> bool {
        !self.is_finished && self.unused_lifelines.contains(&lifeline)
    }

    pub fn forgiveness_active(&self) -> bool {
        self.forgiveness_active
    }

    /// Answers removed from the current question by 50:50
    pub fn disabled_answers(&self) -> &BTreeSet<String> {
        &self.disabled_answers
    }

    /// Answers still selectable on the current question, correct one first
    pub fn enabled_answers(&self) -> Vec<&str> {
        self.current_question()
            .all_answers()
            .into_iter()
            .filter(|a| !self.disabled_answers.contains(*a))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{correct, sample_questions, wrong};

    fn session() -> Session {
        Session::new(sample_questions()).unwrap()
    }

    #[test]
    fn test_rejects_wrong_question_count() {
        let mut questions = sample_questions();
        questions.pop();
        let err = Session::new(questions).unwrap_err();
        assert_eq!(
            err,
            DomainError::QuestionCount {
                expected: 15,
                actual: 14
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let mut snapshot = SessionSnapshot::fresh(sample_questions());
        snapshot.current_index = 15;
        let err = Session::resume(snapshot, PrizeLadder::standard()).unwrap_err();
        assert!(matches!(err, DomainError::IndexOutOfRange { index: 15, .. }));
    }

    #[test]
    fn test_fresh_session_state() {
        let s = session();
        assert_eq!(s.state(), SessionState::Created);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(!s.is_finished());
        assert_eq!(s.remaining_lifelines().len(), 3);
        assert!(!s.forgiveness_active());
        assert_eq!(s.current_prize(), 100);
    }

    #[test]
    fn test_correct_answer_advances_and_scores_rung() {
        let mut s = session();
        let outcome = s.submit_answer(&correct(0)).unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.score(), 100);
        assert_eq!(s.state(), SessionState::InProgress);

        s.submit_answer(&correct(1)).unwrap();
        // Score is the cleared rung, not a running sum
        assert_eq!(s.score(), 200);
    }

    #[test]
    fn test_all_correct_wins_top_prize() {
        let mut s = session();
        for i in 0..15 {
            assert_eq!(s.submit_answer(&correct(i)), Ok(AnswerOutcome::Correct));
        }
        assert!(s.is_finished());
        assert_eq!(s.score(), s.ladder().amount_for(15).unwrap());
        assert_eq!(s.current_index(), 14);
        assert!(s.is_victory());
    }

    #[test]
    fn test_wrong_answer_on_six_falls_to_checkpoint_five() {
        let mut s = session();
        for i in 0..5 {
            s.submit_answer(&correct(i)).unwrap();
        }
        assert_eq!(s.ordinal(), 6);
        let outcome = s.submit_answer(&wrong(5)).unwrap();
        assert_eq!(outcome, AnswerOutcome::Incorrect);
        assert!(s.is_finished());
        assert_eq!(s.score(), s.ladder().checkpoint_amount_before(6));
        assert_eq!(s.score(), s.ladder().amount_for(5).unwrap());
        assert!(!s.is_victory());
    }

    #[test]
    fn test_wrong_answer_before_checkpoint_scores_zero() {
        let mut s = session();
        s.submit_answer(&correct(0)).unwrap();
        s.submit_answer(&correct(1)).unwrap();
        s.submit_answer(&wrong(2)).unwrap();
        assert_eq!(s.score(), 0);
        assert!(s.is_finished());
    }

    #[test]
    fn test_wrong_on_last_question_keeps_second_checkpoint() {
        let mut s = session();
        for i in 0..14 {
            s.submit_answer(&correct(i)).unwrap();
        }
        s.submit_answer(&wrong(14)).unwrap();
        assert_eq!(s.score(), 32_000);
        assert!(!s.is_victory());
    }

    #[test]
    fn test_finished_session_rejects_everything() {
        let mut s = session();
        s.submit_answer(&wrong(0)).unwrap();
        let score = s.score();
        let index = s.current_index();

        assert_eq!(s.submit_answer(&correct(0)), Err(Unavailable::GameFinished));
        assert_eq!(s.submit_answer(&wrong(0)), Err(Unavailable::GameFinished));
        assert_eq!(s.force_timeout(), Err(Unavailable::GameFinished));
        assert_eq!(s.walk_away(), Err(Unavailable::GameFinished));
        assert_eq!(
            s.take_lifeline(Lifeline::Audience),
            Err(Unavailable::GameFinished)
        );
        assert_eq!(s.score(), score);
        assert_eq!(s.current_index(), index);
        assert_eq!(s.remaining_lifelines().len(), 3);
    }

    #[test]
    fn test_forgiveness_pardons_one_wrong_answer() {
        let mut s = session();
        s.take_lifeline(Lifeline::CallFriend).unwrap();
        s.activate_forgiveness();

        let outcome = s.submit_answer(&wrong(0)).unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
        assert!(!s.is_finished());
        assert!(!s.forgiveness_active());
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.score(), 100);

        let outcome = s.submit_answer(&wrong(1)).unwrap();
        assert_eq!(outcome, AnswerOutcome::Incorrect);
        assert!(s.is_finished());
    }

    #[test]
    fn test_forgiveness_survives_correct_answers() {
        let mut s = session();
        s.take_lifeline(Lifeline::CallFriend).unwrap();
        s.activate_forgiveness();
        s.submit_answer(&correct(0)).unwrap();
        assert!(s.forgiveness_active());
    }

    #[test]
    fn test_timeout_ignores_forgiveness() {
        let mut s = session();
        for i in 0..7 {
            s.submit_answer(&correct(i)).unwrap();
        }
        s.take_lifeline(Lifeline::CallFriend).unwrap();
        s.activate_forgiveness();

        assert_eq!(s.force_timeout(), Ok(AnswerOutcome::Incorrect));
        assert!(s.is_finished());
        assert_eq!(s.score(), 1_000);
    }

    #[test]
    fn test_walk_away_keeps_score() {
        let mut s = session();
        for i in 0..3 {
            s.submit_answer(&correct(i)).unwrap();
        }
        assert_eq!(s.walk_away(), Ok(300));
        assert!(s.is_finished());
        assert_eq!(s.score(), 300);
    }

    #[test]
    fn test_lifeline_taken_once() {
        let mut s = session();
        assert!(s.take_lifeline(Lifeline::Audience).is_ok());
        assert_eq!(
            s.take_lifeline(Lifeline::Audience),
            Err(Unavailable::LifelineSpent(Lifeline::Audience))
        );
        assert_eq!(s.remaining_lifelines().len(), 2);
        assert!(!s.can_use(Lifeline::Audience));
        assert!(s.can_use(Lifeline::FiftyFifty));
    }

    #[test]
    fn test_disabled_answers_cleared_on_advance() {
        let mut s = session();
        s.take_lifeline(Lifeline::FiftyFifty).unwrap();
        let disabled: BTreeSet<String> = s.current_question().incorrect_answers()[..2]
            .iter()
            .cloned()
            .collect();
        s.disable_answers(disabled);
        assert_eq!(s.enabled_answers().len(), 2);
        s.submit_answer(&correct(0)).unwrap();
        assert!(s.disabled_answers().is_empty());
        assert_eq!(s.enabled_answers().len(), 4);
    }

    #[test]
    fn test_snapshot_round_trip_through_resume() {
        let mut s = session();
        s.submit_answer(&correct(0)).unwrap();
        s.take_lifeline(Lifeline::CallFriend).unwrap();
        s.activate_forgiveness();

        let restored = Session::resume(s.snapshot(), PrizeLadder::standard()).unwrap();
        assert_eq!(restored, s);
    }

    #[test]
    fn test_resume_rejects_inconsistent_forgiveness() {
        let mut snapshot = SessionSnapshot::fresh(sample_questions());
        snapshot.forgiveness_active = true;
        let err = Session::resume(snapshot, PrizeLadder::standard()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSnapshot(_)));
    }

    #[test]
    fn test_resume_rejects_score_off_the_ladder() {
        let mut snapshot = SessionSnapshot::fresh(sample_questions());
        snapshot.score = 1_000_000;
        let err = Session::resume(snapshot, PrizeLadder::standard()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSnapshot(_)));

        let mut snapshot = SessionSnapshot::fresh(sample_questions());
        snapshot.current_index = 5;
        snapshot.score = 500;
        assert!(Session::resume(snapshot, PrizeLadder::standard()).is_err());
    }

    #[test]
    fn test_resume_accepts_banked_score() {
        let mut snapshot = SessionSnapshot::fresh(sample_questions());
        snapshot.current_index = 5;
        snapshot.score = 1_000;
        let session = Session::resume(snapshot, PrizeLadder::standard()).unwrap();
        assert_eq!(session.ordinal(), 6);
        assert_eq!(session.score(), 1_000);
    }

    #[test]
    fn test_resume_rejects_foreign_disabled_answers() {
        let mut snapshot = SessionSnapshot::fresh(sample_questions());
        snapshot.unused_lifelines.remove(&Lifeline::FiftyFifty);
        snapshot.disabled_answers = ["nope".to_string(), wrong(0)].into_iter().collect();
        assert!(Session::resume(snapshot, PrizeLadder::standard()).is_err());
    }
}

//! Game controller
//!
//! The driver-facing façade over one [`Session`]. It owns the lifeline
//! engine and the pending-resolution gate, persists progress through the
//! [`SessionStore`] port and records a transcript through the
//! [`GameEventLogger`] port. Timers, rendering and input stay with the caller.

use crate::config::GameConfig;
use crate::ports::game_event_logger::{GameEvent, GameEventLogger};
use crate::ports::session_store::SessionStore;
use crate::use_cases::answer_resolver::{AnswerReport, AnswerResolver};
use crate::use_cases::resolution::{PendingResolution, ResolutionGate, Submission};
use millionaire_domain::{
    AudienceOutcome, FiftyFiftyOutcome, FriendOutcome, Lifeline, LifelineEngine, LifelineOutcome,
    RandomSource, Session, Unavailable,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of completing a pending resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The answer was applied to the session
    Applied(AnswerReport),
    /// The resolution was cancelled or superseded; the session is unchanged
    Discarded,
}

/// Drives one game session
pub struct GameController {
    session: Session,
    engine: LifelineEngine,
    store: Arc<dyn SessionStore>,
    logger: Arc<dyn GameEventLogger>,
    config: GameConfig,
    gate: ResolutionGate,
    best_score: u64,
}

impl GameController {
    pub fn new(
        session: Session,
        rng: Box<dyn RandomSource>,
        store: Arc<dyn SessionStore>,
        logger: Arc<dyn GameEventLogger>,
        config: GameConfig,
    ) -> Self {
        let best_score = store.load_best_score().unwrap_or_else(|e| {
            warn!("Could not load best score: {}", e);
            0
        });
        let engine = LifelineEngine::new(rng).with_audience_policy(config.audience);

        logger.log(GameEvent::new(
            "game_started",
            json!({
                "ordinal": session.ordinal(),
                "score": session.score(),
                "lifelines": session.remaining_lifelines(),
            }),
        ));

        Self {
            session,
            engine,
            store,
            logger,
            config,
            gate: ResolutionGate::new(),
            best_score,
        }
    }

    // ==================== Queries ====================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn has_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Countdown for the current question, if enabled
    pub fn answer_time_limit(&self) -> Option<Duration> {
        self.config.answer_time_limit
    }

    /// The current question's answers in a random display order
    pub fn shuffled_answers(&mut self) -> Vec<String> {
        self.session
            .current_question()
            .shuffled_answers(self.engine.rng_mut())
    }

    // ==================== Answering ====================

    /// Start the reveal pause for the player's answer.
    ///
    /// Any earlier pending resolution is cancelled without effect.
    pub fn begin_answer(
        &mut self,
        answer: impl Into<String>,
    ) -> Result<PendingResolution, Unavailable> {
        self.ensure_open()?;
        let answer = answer.into();
        debug!("Answer {:?} pending for question {}", answer, self.session.ordinal());
        Ok(self
            .gate
            .begin(Submission::Answer(answer), self.config.reveal_delay))
    }

    /// Start resolving an expired countdown. Resolves without a pause.
    pub fn begin_timeout(&mut self) -> Result<PendingResolution, Unavailable> {
        self.ensure_open()?;
        debug!("Countdown expired on question {}", self.session.ordinal());
        Ok(self.gate.begin(Submission::Timeout, Duration::ZERO))
    }

    /// Cancel the pending resolution, if any
    pub fn cancel_pending(&mut self) {
        self.gate.cancel();
    }

    /// Apply a pending resolution whose pause has elapsed.
    ///
    /// Cancelled or superseded resolutions are discarded and leave the
    /// session exactly as it was.
    pub fn complete(&mut self, pending: PendingResolution) -> Result<Resolution, Unavailable> {
        if !self.gate.accept(&pending) {
            debug!("Discarding superseded resolution {:?}", pending.submission());
            return Ok(Resolution::Discarded);
        }

        let report = match pending.submission() {
            Submission::Answer(answer) => AnswerResolver::submit(&mut self.session, answer)?,
            Submission::Timeout => AnswerResolver::time_out(&mut self.session)?,
        };
        self.after_answer(&report);
        Ok(Resolution::Applied(report))
    }

    /// Resolve an answer immediately, skipping the reveal pause
    pub fn submit_now(&mut self, answer: &str) -> Result<AnswerReport, Unavailable> {
        self.gate.cancel();
        let report = AnswerResolver::submit(&mut self.session, answer)?;
        self.after_answer(&report);
        Ok(report)
    }

    /// Resolve an expired countdown immediately
    pub fn time_out_now(&mut self) -> Result<AnswerReport, Unavailable> {
        self.gate.cancel();
        let report = AnswerResolver::time_out(&mut self.session)?;
        self.after_answer(&report);
        Ok(report)
    }

    // ==================== Lifelines & walking away ====================

    pub fn use_lifeline(&mut self, lifeline: Lifeline) -> Result<LifelineOutcome, Unavailable> {
        self.ensure_unlocked()?;
        let outcome = self.engine.use_lifeline(&mut self.session, lifeline)?;
        self.after_lifeline(&outcome);
        Ok(outcome)
    }

    pub fn use_fifty_fifty(&mut self) -> Result<FiftyFiftyOutcome, Unavailable> {
        self.ensure_unlocked()?;
        let outcome = self.engine.fifty_fifty(&mut self.session)?;
        self.after_lifeline(&LifelineOutcome::FiftyFifty(outcome.clone()));
        Ok(outcome)
    }

    pub fn use_audience(&mut self) -> Result<AudienceOutcome, Unavailable> {
        self.ensure_unlocked()?;
        let outcome = self.engine.audience(&mut self.session)?;
        self.after_lifeline(&LifelineOutcome::Audience(outcome.clone()));
        Ok(outcome)
    }

    pub fn use_call_friend(&mut self) -> Result<FriendOutcome, Unavailable> {
        self.ensure_unlocked()?;
        let outcome = self.engine.call_friend(&mut self.session)?;
        self.after_lifeline(&LifelineOutcome::CallFriend(outcome));
        Ok(outcome)
    }

    /// Stop playing and keep the current score
    pub fn walk_away(&mut self) -> Result<u64, Unavailable> {
        self.gate.cancel();
        let score = self.session.walk_away()?;
        info!("Walked away with {}", score);
        self.finish("walked_away");
        Ok(score)
    }

    // ==================== Internals ====================

    fn ensure_open(&self) -> Result<(), Unavailable> {
        if self.session.is_finished() {
            return Err(Unavailable::GameFinished);
        }
        Ok(())
    }

    /// Lifelines wait until the pending answer is resolved
    fn ensure_unlocked(&self) -> Result<(), Unavailable> {
        if self.gate.is_pending() {
            return Err(Unavailable::AnswerLocked);
        }
        Ok(())
    }

    fn after_lifeline(&self, outcome: &LifelineOutcome) {
        info!(
            "Used {} on question {}",
            outcome.lifeline().display_name(),
            self.session.ordinal()
        );
        self.logger.log(GameEvent::new(
            "lifeline_used",
            json!({
                "ordinal": self.session.ordinal(),
                "outcome": outcome,
            }),
        ));
        self.persist();
    }

    fn after_answer(&mut self, report: &AnswerReport) {
        info!(
            "Question {} resolved {:?}{} (score {})",
            report.ordinal,
            report.outcome,
            if report.pardoned { " after pardon" } else { "" },
            report.score
        );
        self.logger.log(GameEvent::new(
            "answer_resolved",
            serde_json::to_value(report).unwrap_or_else(|_| json!({})),
        ));

        if report.finished() {
            let reason = if report.victory {
                "won"
            } else if report.timed_out() {
                "timed_out"
            } else {
                "wrong_answer"
            };
            self.finish(reason);
        } else {
            self.persist();
        }
    }

    /// Record the final score and drop the save
    fn finish(&mut self, reason: &str) {
        let score = self.session.score();
        self.logger.log(GameEvent::new(
            "game_over",
            json!({
                "reason": reason,
                "score": score,
                "victory": self.session.is_victory(),
                "ordinal": self.session.ordinal(),
            }),
        ));

        if score > self.best_score {
            self.best_score = score;
            if let Err(e) = self.store.save_best_score(score) {
                warn!("Could not save best score: {}", e);
            }
        }
        if let Err(e) = self.store.clear_session() {
            warn!("Could not clear saved game: {}", e);
        }
    }

    fn persist(&self) {
        if !self.config.autosave {
            return;
        }
        if let Err(e) = self.store.save_session(&self.session.snapshot()) {
            warn!("Could not save game: {}", e);
        }
    }
}

//! Lifeline engine
//!
//! Applies the three lifelines to a [`Session`]. Each operation checks
//! availability first, spends the lifeline, then computes its payload from
//! the session state and the injected [`RandomSource`].

use super::value_objects::{
    AudienceOutcome, FiftyFiftyOutcome, FriendOutcome, Lifeline, LifelineOutcome, PollShare,
};
use crate::random::RandomSource;
use crate::session::entities::Session;
use crate::session::value_objects::Unavailable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default chance that the audience picks the correct answer
pub const DEFAULT_AUDIENCE_ACCURACY: f64 = 0.70;

/// Chance once 50:50 has cut the board down to two answers
pub const DEFAULT_REDUCED_POOL_ACCURACY: f64 = 0.85;

/// How reliable the audience is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudiencePolicy {
    /// Probability of suggesting the correct answer with all four answers live
    pub accuracy: f64,
    /// Probability once the current question has been reduced by 50:50
    pub reduced_pool_accuracy: f64,
}

impl Default for AudiencePolicy {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_AUDIENCE_ACCURACY,
            reduced_pool_accuracy: DEFAULT_REDUCED_POOL_ACCURACY,
        }
    }
}

/// Applies lifelines using an injected random source
pub struct LifelineEngine {
    rng: Box<dyn RandomSource>,
    audience: AudiencePolicy,
}

impl LifelineEngine {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng,
            audience: AudiencePolicy::default(),
        }
    }

    pub fn with_audience_policy(mut self, policy: AudiencePolicy) -> Self {
        self.audience = policy;
        self
    }

    pub fn audience_policy(&self) -> AudiencePolicy {
        self.audience
    }

    /// The random source, for callers that need draws outside lifelines
    /// (answer ordering)
    pub fn rng_mut(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    /// Dispatch on lifeline kind
    pub fn use_lifeline(
        &mut self,
        session: &mut Session,
        lifeline: Lifeline,
    ) -> Result<LifelineOutcome, Unavailable> {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty(session).map(LifelineOutcome::FiftyFifty),
            Lifeline::Audience => self.audience(session).map(LifelineOutcome::Audience),
            Lifeline::CallFriend => self.call_friend(session).map(LifelineOutcome::CallFriend),
        }
    }

    /// Disable two of the three incorrect answers, chosen uniformly.
    ///
    /// Picking the one incorrect answer to keep is equivalent to picking the
    /// two to remove.
    pub fn fifty_fifty(&mut self, session: &mut Session) -> Result<FiftyFiftyOutcome, Unavailable> {
        session.take_lifeline(Lifeline::FiftyFifty)?;

        let incorrect = session.current_question().incorrect_answers().to_vec();
        let keep = self.rng.next_below(incorrect.len());
        let disabled: BTreeSet<String> = incorrect
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != keep)
            .map(|(_, answer)| answer)
            .collect();

        session.disable_answers(disabled.clone());
        Ok(FiftyFiftyOutcome {
            disabled_answers: disabled,
        })
    }

    /// Poll the audience over the answers still on the board
    pub fn audience(&mut self, session: &mut Session) -> Result<AudienceOutcome, Unavailable> {
        session.take_lifeline(Lifeline::Audience)?;

        let question = session.current_question();
        let correct = question.correct_answer().to_string();
        let live_incorrect: Vec<String> = question
            .incorrect_answers()
            .iter()
            .filter(|a| !session.disabled_answers().contains(*a))
            .cloned()
            .collect();

        let reduced_pool = !session.disabled_answers().is_empty();
        let accuracy = if reduced_pool {
            self.audience.reduced_pool_accuracy
        } else {
            self.audience.accuracy
        };

        let suggested_answer = if self.rng.chance(accuracy) || live_incorrect.is_empty() {
            correct.clone()
        } else {
            live_incorrect[self.rng.next_below(live_incorrect.len())].clone()
        };

        let candidates: Vec<String> = std::iter::once(correct).chain(live_incorrect).collect();
        let poll = self.build_poll(&candidates, &suggested_answer);

        Ok(AudienceOutcome {
            suggested_answer,
            poll,
        })
    }

    /// Arm the one-time pardon for the next wrong answer
    pub fn call_friend(&mut self, session: &mut Session) -> Result<FriendOutcome, Unavailable> {
        session.take_lifeline(Lifeline::CallFriend)?;
        session.activate_forgiveness();
        Ok(FriendOutcome {
            forgiveness_active: true,
        })
    }

    /// Percentages over `candidates` summing to 100.
    ///
    /// The suggested answer takes more than half, so it is strictly the
    /// largest share; the remainder is split at random among the others.
    fn build_poll(&mut self, candidates: &[String], suggested: &str) -> Vec<PollShare> {
        let top = if candidates.len() <= 2 {
            self.rng.next_in_range(60, 90)
        } else {
            self.rng.next_in_range(51, 80)
        };

        let others: Vec<&String> = candidates.iter().filter(|a| *a != suggested).collect();
        let mut remaining = 100 - top;
        let mut shares = Vec::with_capacity(others.len());
        for (i, _) in others.iter().enumerate() {
            let share = if i + 1 == others.len() {
                remaining
            } else {
                self.rng.next_in_range(0, remaining)
            };
            remaining -= share;
            shares.push(share);
        }

        let mut other_shares = others.into_iter().zip(shares);
        candidates
            .iter()
            .map(|answer| {
                let percent = if answer == suggested {
                    top
                } else {
                    other_shares.next().map_or(0, |(_, share)| share)
                };
                PollShare {
                    answer: answer.clone(),
                    percent,
                }
            })
            .collect()
    }
}

//! Cancellable pending answer resolution
//!
//! A driver shows a dramatic pause between the player's pick and the
//! verdict. [`ResolutionGate`] guarantees at most one such pause is live per
//! session: starting a new one cancels the previous one, and a cancelled or
//! superseded resolution can never be applied.

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// What will be resolved when the pause ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Answer(String),
    Timeout,
}

/// A resolution waiting for its pause to elapse
#[derive(Debug)]
pub struct PendingResolution {
    ticket: u64,
    submission: Submission,
    deadline: Instant,
    token: CancellationToken,
}

impl PendingResolution {
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait out the pause.
    ///
    /// Returns `false` if the resolution was cancelled first. The deadline is
    /// fixed when the resolution begins, so re-polling a fresh `ready()`
    /// future (as a `select!` loop does) does not restart the pause.
    pub async fn ready(&self) -> bool {
        tokio::select! {
            _ = self.token.cancelled() => false,
            _ = tokio::time::sleep_until(self.deadline) => !self.token.is_cancelled(),
        }
    }
}

/// Tracks the single live resolution of a session
#[derive(Debug, Default)]
pub struct ResolutionGate {
    next_ticket: u64,
    current: Option<(u64, CancellationToken)>,
}

impl ResolutionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new resolution, cancelling any live one
    pub fn begin(&mut self, submission: Submission, delay: Duration) -> PendingResolution {
        self.cancel();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let token = CancellationToken::new();
        self.current = Some((ticket, token.clone()));

        PendingResolution {
            ticket,
            submission,
            deadline: Instant::now() + delay,
            token,
        }
    }

    /// Cancel the live resolution, if any
    pub fn cancel(&mut self) {
        if let Some((_, token)) = self.current.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Claim the right to apply `pending`.
    ///
    /// Succeeds at most once, and only for the live, uncancelled resolution.
    pub fn accept(&mut self, pending: &PendingResolution) -> bool {
        match &self.current {
            Some((ticket, _)) if *ticket == pending.ticket && !pending.is_cancelled() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ready_after_delay() {
        let mut gate = ResolutionGate::new();
        let pending = gate.begin(Submission::Answer("A".into()), Duration::from_secs(2));
        assert!(gate.is_pending());
        assert!(pending.ready().await);
        assert!(gate.accept(&pending));
        assert!(!gate.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_accept_only_once() {
        let mut gate = ResolutionGate::new();
        let pending = gate.begin(Submission::Timeout, Duration::ZERO);
        assert!(gate.accept(&pending));
        assert!(!gate.accept(&pending));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_resolution_cancels_previous() {
        let mut gate = ResolutionGate::new();
        let first = gate.begin(Submission::Answer("A".into()), Duration::from_secs(2));
        let second = gate.begin(Submission::Answer("B".into()), Duration::from_secs(2));

        assert!(first.is_cancelled());
        assert!(!first.ready().await);
        assert!(!gate.accept(&first));

        assert!(second.ready().await);
        assert!(gate.accept(&second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_wakes_waiter() {
        let mut gate = ResolutionGate::new();
        let pending = gate.begin(Submission::Answer("A".into()), Duration::from_secs(60));
        let waiter = tokio::spawn(async move { pending.ready().await });
        tokio::task::yield_now().await;
        gate.cancel();
        assert!(!waiter.await.unwrap());
        assert!(!gate.is_pending());
    }
}

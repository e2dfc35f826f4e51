//! Interactive game loop
//!
//! Reads one command per line while racing the answer countdown and the
//! reveal pause. Every timer lives here; the controller never sleeps.

use crate::output::console::{ConsoleFormatter, LABELS};
use crate::play::command::PlayerCommand;
use millionaire_application::{
    AnswerReport, GameController, PendingResolution, Resolution,
};
use millionaire_domain::{Lifeline, Unavailable};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::debug;

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The game reached an end; otherwise it was left saved
    pub finished: bool,
    pub score: u64,
    pub victory: bool,
    pub best_score: u64,
}

enum Event {
    Resolved,
    Expired,
    Input(Option<String>),
}

enum Flow {
    Continue,
    Quit,
}

/// Drives one game from the terminal
pub struct GameRepl {
    controller: GameController,
    choices: Vec<String>,
    deadline: Option<Instant>,
    resumed: bool,
}

impl GameRepl {
    pub fn new(controller: GameController) -> Self {
        Self {
            controller,
            choices: Vec::new(),
            deadline: None,
            resumed: false,
        }
    }

    /// Mark the session as restored from a save
    pub fn resumed(mut self, resumed: bool) -> Self {
        self.resumed = resumed;
        self
    }

    /// Play on stdin
    pub async fn run(self) -> io::Result<PlayOutcome> {
        self.run_with(BufReader::new(tokio::io::stdin())).await
    }

    /// Play reading commands from `input`
    pub async fn run_with<R: AsyncBufRead + Unpin>(mut self, input: R) -> io::Result<PlayOutcome> {
        let mut lines = input.lines();
        let mut pending: Option<PendingResolution> = None;

        println!(
            "{}",
            ConsoleFormatter::welcome(self.controller.best_score(), self.resumed)
        );
        self.present_question();

        while !self.controller.session().is_finished() {
            // Input last so a due resolution or expiry wins over queued lines
            let event = tokio::select! {
                biased;
                _ = wait_pending(pending.as_ref()) => Event::Resolved,
                _ = wait_deadline(self.deadline), if pending.is_none() => Event::Expired,
                line = lines.next_line() => Event::Input(line?),
            };

            match event {
                Event::Resolved => {
                    if let Some(p) = pending.take() {
                        self.complete(p);
                    }
                }
                Event::Expired => {
                    let result = self.controller.time_out_now();
                    self.after_answer(result);
                }
                Event::Input(None) => {
                    debug!("Input closed");
                    self.controller.cancel_pending();
                    break;
                }
                Event::Input(Some(line)) => {
                    if let Flow::Quit = self.handle_line(&line, &mut pending) {
                        break;
                    }
                }
            }
        }

        let session = self.controller.session();
        if session.is_finished() {
            println!(
                "{}",
                ConsoleFormatter::game_over(session, self.controller.best_score())
            );
        } else {
            println!("Game saved. Run again to pick up where you left off.");
        }

        Ok(PlayOutcome {
            finished: session.is_finished(),
            score: session.score(),
            victory: session.is_victory(),
            best_score: self.controller.best_score(),
        })
    }

    fn handle_line(&mut self, line: &str, pending: &mut Option<PendingResolution>) -> Flow {
        match PlayerCommand::parse(line) {
            PlayerCommand::Answer(index) => self.select(index, pending),
            PlayerCommand::Lifeline(lifeline) => self.use_lifeline(lifeline),
            PlayerCommand::WalkAway => {
                *pending = None;
                if let Ok(score) = self.controller.walk_away() {
                    println!("You walk away with {}.", ConsoleFormatter::money(score));
                }
            }
            PlayerCommand::Ladder => {
                let session = self.controller.session();
                let rows = session.ladder().scoreboard(Some(session.ordinal()));
                println!("{}", ConsoleFormatter::ladder(&rows));
            }
            PlayerCommand::Help => println!("{}", ConsoleFormatter::help()),
            PlayerCommand::Quit => {
                *pending = None;
                self.controller.cancel_pending();
                return Flow::Quit;
            }
            PlayerCommand::Empty => {}
            PlayerCommand::Unknown => {
                println!("Unknown command {:?}. Type /help for commands.", line.trim())
            }
        }
        Flow::Continue
    }

    fn select(&mut self, index: usize, pending: &mut Option<PendingResolution>) {
        let Some(answer) = self.choices.get(index).cloned() else {
            return;
        };
        if self.controller.session().disabled_answers().contains(&answer) {
            println!("That answer has been taken off the board.");
            return;
        }

        println!("{}", ConsoleFormatter::answer_locked(LABELS[index], &answer));

        if self.controller.config().reveal_delay.is_zero() {
            *pending = None;
            let result = self.controller.submit_now(&answer);
            self.after_answer(result);
            return;
        }

        match self.controller.begin_answer(answer) {
            Ok(p) => *pending = Some(p),
            Err(e) => println!("{}", e),
        }
    }

    fn complete(&mut self, pending: PendingResolution) {
        match self.controller.complete(pending) {
            Ok(Resolution::Applied(report)) => self.after_answer(Ok(report)),
            Ok(Resolution::Discarded) => debug!("Resolution discarded"),
            Err(e) => println!("{}", e),
        }
    }

    fn after_answer(&mut self, result: Result<AnswerReport, Unavailable>) {
        match result {
            Ok(report) => {
                println!("{}", ConsoleFormatter::answer_report(&report));
                if !report.finished() {
                    self.present_question();
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    fn use_lifeline(&mut self, lifeline: Lifeline) {
        match self.controller.use_lifeline(lifeline) {
            Ok(outcome) => {
                println!(
                    "{}",
                    ConsoleFormatter::lifeline_outcome(&outcome, &self.choices)
                );
                if lifeline == Lifeline::FiftyFifty {
                    println!(
                        "{}",
                        ConsoleFormatter::question(self.controller.session(), &self.choices)
                    );
                }
            }
            Err(Unavailable::LifelineSpent(spent)) => {
                println!("{}", ConsoleFormatter::lifeline_unavailable(spent))
            }
            Err(e) => println!("{}", e),
        }
    }

    /// Shuffle and show the current question, restarting the countdown
    fn present_question(&mut self) {
        self.choices = self.controller.shuffled_answers();
        println!(
            "{}",
            ConsoleFormatter::question(self.controller.session(), &self.choices)
        );

        self.deadline = self.controller.answer_time_limit().map(|limit| {
            println!("You have {} seconds.", limit.as_secs());
            Instant::now() + limit
        });
    }
}

async fn wait_pending(pending: Option<&PendingResolution>) {
    match pending {
        Some(p) => {
            p.ready().await;
        }
        None => std::future::pending().await,
    }
}

async fn wait_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

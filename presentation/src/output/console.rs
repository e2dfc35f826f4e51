//! Console output formatter for the game

use colored::Colorize;
use millionaire_application::AnswerReport;
use millionaire_domain::{
    AudienceOutcome, Lifeline, LifelineOutcome, Question, RowKind, ScoreboardRow, Session,
};

/// Choice labels, in display order
pub const LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Formats game state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `1234567` → `$1,234,567`
    pub fn money(amount: u64) -> String {
        let digits = amount.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        format!("${}", out)
    }

    pub fn welcome(best_score: u64, resumed: bool) -> String {
        let mut output = Self::header("Who Wants to Be a Millionaire?");
        output.push('\n');
        if resumed {
            output.push_str(&format!("{}\n", "Resuming your saved game.".yellow()));
        }
        if best_score > 0 {
            output.push_str(&format!(
                "{} {}\n",
                "Best score:".dimmed(),
                Self::money(best_score)
            ));
        }
        output.push_str(&format!(
            "{}\n",
            "Type a letter to answer, /help for commands.".dimmed()
        ));
        output
    }

    /// The current question with its labelled choices
    pub fn question(session: &Session, choices: &[String]) -> String {
        let question = session.current_question();
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!(
            "Question {} of {} for {}",
            session.ordinal(),
            session.questions().len(),
            Self::money(session.current_prize())
        )));
        if let Some(meta) = Self::question_meta(question) {
            output.push_str(&format!("{}\n", meta.dimmed()));
        }
        output.push_str(&format!("\n{}\n\n", question.text().bold()));

        for (label, answer) in LABELS.iter().zip(choices) {
            if session.disabled_answers().contains(answer) {
                output.push_str(&format!("  {}: {}\n", label, "---".dimmed()));
            } else {
                output.push_str(&format!("  {}: {}\n", label.to_string().cyan().bold(), answer));
            }
        }

        output.push('\n');
        output.push_str(&Self::status(session));
        output
    }

    fn question_meta(question: &Question) -> Option<String> {
        match (question.category(), question.difficulty()) {
            (Some(category), Some(difficulty)) => Some(format!("{} ({})", category, difficulty)),
            (Some(category), None) => Some(category.to_string()),
            (None, Some(difficulty)) => Some(format!("({})", difficulty)),
            (None, None) => None,
        }
    }

    /// Banked score, safety net and lifelines left
    pub fn status(session: &Session) -> String {
        let lifelines = if session.remaining_lifelines().is_empty() {
            "none".to_string()
        } else {
            session
                .remaining_lifelines()
                .iter()
                .map(|l| l.display_name().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut output = format!(
            "{} {}   {} {}\n{} {}\n",
            "Banked:".dimmed(),
            Self::money(session.score()),
            "Safe:".dimmed(),
            Self::money(session.guaranteed_prize()),
            "Lifelines:".dimmed(),
            lifelines
        );
        if session.forgiveness_active() {
            output.push_str(&format!(
                "{}\n",
                "Your friend has your back: one wrong answer will be forgiven.".green()
            ));
        }
        output
    }

    /// The ladder, top prize first
    pub fn ladder(rows: &[ScoreboardRow]) -> String {
        let mut output = Self::section_header("Prize Ladder");
        for row in rows {
            let line = format!("{:>4}  {:>12}", row.ordinal, Self::money(row.amount));
            let line = match row.kind {
                RowKind::Current => format!("{}  <", line).black().on_yellow().bold().to_string(),
                RowKind::Top => line.yellow().bold().to_string(),
                RowKind::Checkpoint => line.white().bold().to_string(),
                RowKind::Regular => line.dimmed().to_string(),
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    pub fn answer_locked(label: char, answer: &str) -> String {
        format!(
            "{} {}: {} ...",
            "Final answer:".yellow().bold(),
            label,
            answer
        )
    }

    pub fn answer_report(report: &AnswerReport) -> String {
        let mut output = String::new();
        if report.timed_out() {
            output.push_str(&format!("{}\n", "Time's up!".red().bold()));
        } else if report.pardoned {
            output.push_str(&format!(
                "{} Your friend covers for you; the correct answer was {}.\n",
                "Wrong, but forgiven!".yellow().bold(),
                report.correct_answer
            ));
        } else if report.outcome.is_correct() {
            output.push_str(&format!("{}\n", "Correct!".green().bold()));
        } else {
            output.push_str(&format!(
                "{} The correct answer was {}.\n",
                "Wrong!".red().bold(),
                report.correct_answer
            ));
        }

        if !report.finished() {
            output.push_str(&format!(
                "{} {}\n",
                "You have banked".dimmed(),
                Self::money(report.score)
            ));
        }
        output
    }

    /// Lifeline result, with answers shown by their current labels
    pub fn lifeline_outcome(outcome: &LifelineOutcome, choices: &[String]) -> String {
        let label_of = |answer: &str| {
            LABELS
                .iter()
                .zip(choices)
                .find(|(_, choice)| choice.as_str() == answer)
                .map(|(label, _)| *label)
                .unwrap_or('?')
        };

        let title = format!("{}:", outcome.lifeline().display_name()).cyan().bold();
        match outcome {
            LifelineOutcome::FiftyFifty(result) => {
                let removed = result
                    .disabled_answers
                    .iter()
                    .map(|a| label_of(a.as_str()).to_string())
                    .collect::<Vec<_>>()
                    .join(" and ");
                format!("{} removed {}\n", title, removed)
            }
            LifelineOutcome::Audience(result) => {
                format!("{}\n{}", title, Self::poll(result, label_of))
            }
            LifelineOutcome::CallFriend(_) => format!(
                "{} \"I'm not sure, but if you get this one wrong, I'll cover for you.\"\n",
                title
            ),
        }
    }

    fn poll(result: &AudienceOutcome, label_of: impl Fn(&str) -> char) -> String {
        let mut shares: Vec<_> = result.poll.iter().collect();
        shares.sort_by_key(|share| label_of(share.answer.as_str()));

        let mut output = String::new();
        for share in shares {
            let bar = "#".repeat((share.percent / 4) as usize);
            let line = format!(
                "  {}: {:>3}% {} {}",
                label_of(share.answer.as_str()),
                share.percent,
                bar,
                share.answer
            );
            if share.answer == result.suggested_answer {
                output.push_str(&line.bold().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
        output
    }

    pub fn lifeline_unavailable(lifeline: Lifeline) -> String {
        format!("{} has already been used.", lifeline.display_name())
            .red()
            .to_string()
    }

    pub fn game_over(session: &Session, best_score: u64) -> String {
        let mut output = Self::header("Game Over");
        output.push('\n');
        if session.is_victory() {
            output.push_str(&format!(
                "{} You won {}!\n",
                "MILLIONAIRE!".yellow().bold(),
                Self::money(session.score())
            ));
        } else {
            output.push_str(&format!(
                "You leave with {}.\n",
                Self::money(session.score()).bold()
            ));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Best score:".dimmed(),
            Self::money(best_score)
        ));
        output.push_str(&Self::footer());
        output
    }

    pub fn help() -> String {
        let mut output = Self::section_header("Commands");
        for (command, description) in [
            ("a, b, c, d", "Answer (type another letter during the pause to change it)"),
            ("/50", "50:50: remove two wrong answers"),
            ("/audience", "Ask the Audience"),
            ("/friend", "Call a Friend: forgives your next wrong answer"),
            ("/walk", "Walk away with what you have banked"),
            ("/ladder", "Show the prize ladder"),
            ("/help", "Show this help"),
            ("/quit", "Save and quit"),
        ] {
            output.push_str(&format!("  {:<12} {}\n", command.cyan(), description));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for millionaire
#[derive(Parser, Debug)]
#[command(name = "millionaire")]
#[command(author, version, about = "Fifteen questions, a rising prize ladder, three lifelines")]
#[command(long_about = r#"
Play a round of the classic quiz show in your terminal.

Answer fifteen multiple-choice questions to climb the prize ladder. Rungs 5
and 10 are checkpoints: a wrong answer drops you back to the last one you
passed. Three lifelines are available once per game: 50:50, Ask the
Audience and Call a Friend.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./millionaire.toml     Project-level config
3. ~/.config/millionaire/config.toml   Global config

Example:
  millionaire
  millionaire --questions saved-feed.json --time-limit 60
  millionaire --new --seed 42
"#)]
pub struct Cli {
    /// Question feed file (JSON, trivia feed format); defaults to the built-in deck
    #[arg(short, long, value_name = "FILE")]
    pub questions: Option<PathBuf>,

    /// Seed for lifeline draws and answer order
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Seconds allowed per question (0 disables the countdown)
    #[arg(short, long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// Start a new game even if a saved one exists
    #[arg(long)]
    pub new: bool,

    /// Print the prize ladder and exit
    #[arg(long)]
    pub ladder: bool,

    /// Print the best score and exit
    #[arg(long)]
    pub best: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

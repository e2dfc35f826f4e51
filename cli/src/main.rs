//! CLI entrypoint for millionaire
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use millionaire_application::{
    GameConfig, GameController, GameEventLogger, GameOrigin, NoGameEventLogger, QuestionSource,
    SessionStore, StartGameUseCase,
};
use millionaire_domain::{PrizeLadder, Session};
use millionaire_infrastructure::{
    BuiltinDeck, ConfigLoader, FeedFileSource, FileConfig, JsonFileSessionStore,
    JsonlGameEventLogger, StdRandom,
};
use millionaire_presentation::{Cli, ConsoleFormatter, GameRepl};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MILLIONAIRE_LOG";

/// Maps `-v` count to a tracing directive (0 warn, 1 info, 2 debug, 3+ trace)
const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize diagnostics. `MILLIONAIRE_LOG` overrides the `-v` level.
///
/// The returned guard must live until exit so buffered file logs are flushed.
fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));
    let show_target = verbosity >= 2;

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Ok(Some(guard))
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("Invalid configuration: {}", e))
}

async fn start_session<Q: QuestionSource + 'static>(
    source: Q,
    store: Arc<dyn SessionStore>,
    ladder: PrizeLadder,
    fresh: bool,
) -> Result<(Session, GameOrigin)> {
    let use_case = StartGameUseCase::new(Arc::new(source), store).with_ladder(ladder);
    if fresh {
        return Ok((use_case.new_game().await?, GameOrigin::New));
    }
    Ok(use_case.resume_or_new().await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting millionaire");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let config = load_config(&cli)?;
        println!("\nEffective configuration:\n");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let file_config = load_config(&cli)?;
    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let mut game_config: GameConfig = file_config.to_game_config()?;
    if let Some(seconds) = cli.time_limit {
        game_config = game_config.with_time_limit_seconds(seconds);
    }

    if cli.ladder {
        println!("{}", ConsoleFormatter::ladder(&game_config.ladder.scoreboard(None)));
        return Ok(());
    }

    // === Dependency Injection ===
    let data_dir = file_config
        .storage
        .resolve_data_dir()
        .ok_or_else(|| anyhow!("No data directory; set storage.data_dir in the config"))?;
    let store: Arc<dyn SessionStore> = Arc::new(JsonFileSessionStore::new(&data_dir));

    if cli.best {
        println!(
            "Best score: {}",
            ConsoleFormatter::money(store.load_best_score()?)
        );
        return Ok(());
    }

    let ladder = game_config.ladder.clone();
    let (session, origin) = match &cli.questions {
        Some(path) => start_session(FeedFileSource::new(path), store.clone(), ladder, cli.new).await?,
        None => start_session(BuiltinDeck::new(), store.clone(), ladder, cli.new).await?,
    };

    let logger: Arc<dyn GameEventLogger> = if file_config.storage.event_log {
        match JsonlGameEventLogger::for_new_game(&data_dir) {
            Some(logger) => {
                info!("Game transcript: {}", logger.path().display());
                Arc::new(logger)
            }
            None => {
                warn!("Game transcript disabled");
                Arc::new(NoGameEventLogger)
            }
        }
    } else {
        Arc::new(NoGameEventLogger)
    };

    let controller = GameController::new(
        session,
        Box::new(StdRandom::new(cli.seed)),
        store,
        logger,
        game_config,
    );

    let outcome = GameRepl::new(controller)
        .resumed(origin == GameOrigin::Resumed)
        .run()
        .await?;
    info!(
        "Session ended (finished: {}, score: {})",
        outcome.finished, outcome.score
    );

    Ok(())
}

mod config;
mod input;
mod offline;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{
    Difficulty, FirstPlayer, Mark, ScoringMode, TicTacToeSession, TicTacToeSessionSettings,
};
use common::logger::{self, LogLevel};
use common::version::VERSION;
use common::{log, log_debug, log_warn};
use tokio::io::BufReader;

use config::{Config, get_config_manager, get_config_manager_for};
use offline::run_tictactoe_game;

fn parse_mark(s: &str) -> Result<Mark, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match Mark::try_from(c) {
            Ok(Mark::Empty) | Err(_) => Err(format!("Mark must be X or O, got '{}'", s)),
            Ok(mark) => Ok(mark),
        },
        _ => Err(format!("Mark must be X or O, got '{}'", s)),
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", version = VERSION, about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy (random moves) or hard (minimax)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// The mark you play, X or O
    #[arg(long, value_parser = parse_mark)]
    human_mark: Option<Mark>,

    /// Who moves first: human, computer or random
    #[arg(long)]
    first: Option<FirstPlayer>,

    /// depth-weighted or flat
    #[arg(long)]
    scoring: Option<ScoringMode>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    thinking_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, short)]
    verbose: bool,
}

fn load_config(args: &Args) -> (Config, Option<String>) {
    let manager = match args.config {
        Some(ref path) => get_config_manager_for(path),
        None => get_config_manager(),
    };
    match manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty;
    }
    if let Some(mark) = args.human_mark {
        config.tictactoe.human_mark = mark;
    }
    if let Some(first) = args.first {
        config.tictactoe.first_player = first;
    }
    if let Some(scoring) = args.scoring {
        config.tictactoe.scoring = scoring;
    }
    if let Some(delay) = args.thinking_delay_ms {
        config.thinking_delay_ms = delay;
    }
    if args.verbose {
        config.log_level = LogLevel::Debug;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut config, config_error) = load_config(&args);
    apply_overrides(&mut config, &args);

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log_level);

    if let Some(e) = config_error {
        log_warn!("Using default config: {}", e);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let settings = TicTacToeSessionSettings::from(&config.tictactoe);
    let mut session = TicTacToeSession::new(settings, rng)?;

    log!(
        "Tic-tac-toe client {} started (difficulty {}, seed {})",
        VERSION,
        session.difficulty(),
        session.seed()
    );
    log_debug!("Effective config: {:?}", config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_tictactoe_game(
        &mut session,
        stdin,
        &mut stdout,
        Duration::from_millis(config.thinking_delay_ms),
    )
    .await?;

    log!("Client shut down");
    Ok(())
}

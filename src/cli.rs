//! CLI definition and dispatch.
//!
//! The binary is the external driver of the domain: it owns the turn loop
//! and the wall clock, and decides which rejected actions are worth more
//! than a log line.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::system_clock::SystemClockAdapter;
use crate::domain::config_validation::validate_game_config;
use crate::domain::error::TycoonError;
use crate::domain::game::{Game, GameConfig};
use crate::domain::player::PlayerId;
use crate::domain::registry::EstateRegistry;

#[derive(Parser, Debug)]
#[command(name = "tycoon", about = "Board-game economy simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a demo game on the standard board
    Simulate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        turns: Option<u32>,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        fast: bool,
    },
    /// Validate a game configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the standard board
    Board,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            turns,
            players,
            fast,
        } => run_simulate(config.as_ref(), turns, players, fast),
        Command::Validate { config } => run_validate(&config),
        Command::Board => run_board(),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TycoonError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_simulate(
    config_path: Option<&PathBuf>,
    turns: Option<u32>,
    players: Option<usize>,
    fast: bool,
) -> ExitCode {
    let mut game_config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            let adapter = match load_config(path) {
                Ok(a) => a,
                Err(code) => return code,
            };
            if let Err(e) = validate_game_config(&adapter) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            GameConfig::from_config(&adapter)
        }
        None => GameConfig::default(),
    };
    if let Some(turns) = turns {
        game_config.max_turns = turns;
    }
    if let Some(players) = players {
        game_config.player_count = players;
    }
    if fast {
        game_config.fast_mode = true;
    }

    let clock = SystemClockAdapter;
    let registry = EstateRegistry::standard_board();
    let mut game = Game::new(registry, &game_config, &clock);

    eprintln!(
        "Simulating up to {} turns with {} players",
        game_config.max_turns, game_config.player_count
    );
    for _ in 0..game_config.max_turns {
        if game.is_game_over() {
            break;
        }
        take_purchases(&mut game);
        game.advance_turn(&clock);
    }
    if game.winner.is_none() {
        game.end_game(&clock);
    }

    for player in &game.players {
        println!(
            "{}: {} holding {} estates",
            player.identity,
            player.funds,
            player.estate_count()
        );
    }
    if let Some(winner) = game.winner {
        println!("Winner: {winner}");
    }
    ExitCode::SUCCESS
}

/// Scripted demo policy: each player tries to buy the next estate still on
/// the market. Rejections are business-rule noise here, not failures.
fn take_purchases(game: &mut Game) {
    let ids: Vec<PlayerId> = game.players.iter().map(|p| p.identity).collect();
    for id in ids {
        let Some(target) = game.registry.first_unowned() else {
            break;
        };
        let Some(player) = game.players.iter_mut().find(|p| p.identity == id) else {
            continue;
        };
        let Some(estate) = game.registry.get_mut(target) else {
            continue;
        };
        if let Err(e) = player.buy_estate(estate) {
            tracing::info!(player = %id, error = %e, "purchase skipped");
        }
    }
}

fn run_validate(path: &PathBuf) -> ExitCode {
    let adapter = match load_config(path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    match validate_game_config(&adapter) {
        Ok(()) => {
            println!("Config OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_board() -> ExitCode {
    let registry = EstateRegistry::standard_board();
    for estate in registry.iter() {
        println!(
            "{:>3}  {:<20} {:<13} price {:>6}  mortgage {:>6}  buyback {:>6}  rent {:>5}",
            estate.identity.0,
            estate.name,
            estate.category.to_string(),
            estate.price.to_string(),
            estate.mortgage_price.to_string(),
            estate.buyback_price.to_string(),
            estate.rent.to_string(),
        );
    }
    ExitCode::SUCCESS
}

//! Terminal front end: a human plays one side, the minimax engine the other.
//!
//! Moves are typed as two coordinates, `e2 e4`. `b` takes back the last move
//! of each side, `q` quits.

mod board;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_core::{ChessError, Engine, Game, GameRecord, Side, format_move, parse_move};
use clap::{Parser, ValueEnum};
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HumanSide {
    White,
    Black,
}

impl From<HumanSide> for Side {
    fn from(side: HumanSide) -> Side {
        match side {
            HumanSide::White => Side::White,
            HumanSide::Black => Side::Black,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play chess against a fixed-depth minimax engine")]
struct Args {
    /// Engine search depth (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// TOML engine config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side played by the human
    #[arg(long, value_enum, default_value_t = HumanSide::White)]
    side: HumanSide,

    /// Resume from a saved JSON move log
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write the JSON move log here when the game ends
    #[arg(long)]
    save: Option<PathBuf>,

    /// Disable ANSI highlighting of the last move
    #[arg(long)]
    no_color: bool,
}

/// What a line of human input did to the game.
#[derive(Debug, PartialEq, Eq)]
enum Turn {
    Moved,
    Undone,
    CannotUndo(ChessError),
    Illegal,
    Invalid,
    Quit,
}

impl Turn {
    /// Text shown to the player, if any.
    fn message(&self) -> Option<String> {
        match self {
            Turn::Moved | Turn::Quit => None,
            Turn::Undone => Some("Reverting your last move".to_string()),
            Turn::CannotUndo(e) => Some(format!("Cannot undo: {e}")),
            Turn::Illegal => Some("Illegal move!".to_string()),
            Turn::Invalid => Some("Invalid input! Example: 'e2 e4'".to_string()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    let mut engine = MinimaxEngine::new(config);

    let mut game = match &args.load {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Game::from_record(&GameRecord::from_json(&text)?)?
        }
        None => Game::new(),
    };
    info!(
        engine = engine.name(),
        depth = config.depth,
        plies = game.ply_count(),
        "starting game"
    );

    let human: Side = args.side.into();
    let color = !args.no_color;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let pos = game.current().clone();
        if pos.is_side_lost() {
            println!("{}", board::render(&pos, color));
            println!("{} wins: the {} king is captured", pos.side_to_move().other(), pos.side_to_move());
            break;
        }

        if pos.side_to_move() == human {
            println!("{}", board::render(&pos, color));
            print!("Your move ('b' to undo, 'q' to quit): ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let turn = human_turn(&mut game, line?.trim());
            if turn == Turn::Quit {
                break;
            }
            if let Some(msg) = turn.message() {
                println!("{msg}");
            }
        } else {
            match engine.choose(&pos) {
                Ok(result) => {
                    let (from, to) = result.best_move;
                    println!("Opponent moves: {}", format_move(from, to));
                    game.play(from, to)?;
                }
                Err(ChessError::NoLegalMoves) => {
                    println!("{} has no legal moves", pos.side_to_move());
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    if let Some(path) = &args.save {
        fs::write(path, game.record().to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), plies = game.ply_count(), "saved game");
    }
    Ok(())
}

fn human_turn(game: &mut Game, input: &str) -> Turn {
    match input {
        "q" | "quit" => Turn::Quit,
        "b" | "undo" => match game.undo() {
            Ok(()) => Turn::Undone,
            Err(e) => Turn::CannotUndo(e),
        },
        txt => match parse_move(txt).and_then(|(from, to)| game.play(from, to).map(|_| ())) {
            Ok(()) => Turn::Moved,
            Err(ChessError::IllegalMove { .. }) => Turn::Illegal,
            Err(e) => {
                warn!(input = txt, error = %e, "rejected move text");
                Turn::Invalid
            }
        },
    }
}

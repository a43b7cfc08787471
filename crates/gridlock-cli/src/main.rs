//! Command-line front end for the gridlock puzzle engine.

mod render;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridlock_core::{legal_moves, Board, Catalog, Game, Move};
use log::info;
use render::{render_board, render_moves, render_pieces};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a board description and print the grid, pieces and legal moves
    Show {
        /// Board description, optionally suffixed with "/<movesRequired>"
        desc: String,
    },
    /// Apply a sequence of moves to a board and report the outcome
    Play {
        /// Board description, optionally suffixed with "/<movesRequired>"
        desc: String,
        /// Moves as "piece:steps" pairs, e.g. "1:3,0:4"
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,
    },
    /// Load a puzzle catalog from JSON and list its records
    Puzzles {
        /// Path to a JSON array of {id, desc, minimalMoves} records
        file: PathBuf,
        /// Print one randomly sampled puzzle per level instead of all records
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    match args.command {
        Command::Show { desc } => show(&desc),
        Command::Play { desc, moves } => play(&desc, &moves),
        Command::Puzzles { file, sample } => puzzles(&file, sample),
    }
}

fn parse_board(selector: &str) -> Result<(Board, Option<u32>)> {
    let (desc, budget) = match selector.split_once('/') {
        None => (selector, None),
        Some((desc, rest)) => {
            let budget: u32 = rest.parse().context("invalid move budget")?;
            (desc, Some(budget))
        }
    };
    let board = desc.parse::<Board>()?;
    Ok((board, budget))
}

fn show(selector: &str) -> Result<()> {
    let (board, budget) = parse_board(selector)?;
    print!("{}", render_board(&board));
    if let Some(budget) = budget {
        println!("budget: {budget} moves");
    }
    println!("pieces:");
    print!("{}", render_pieces(&board));
    let moves = legal_moves(&board);
    println!("legal moves ({}): {}", moves.len(), render_moves(&moves));
    println!("solved: {}", board.is_solved());
    Ok(())
}

fn play(selector: &str, moves: &[String]) -> Result<()> {
    let (board, budget) = parse_board(selector)?;
    let mut game = Game::new(board, budget);

    for spec in moves {
        let mv = parse_move(spec)?;
        if !game.play(mv) {
            bail!("illegal move {spec:?} at move {}", game.move_count() + 1);
        }
        info!("applied #{}{:+}", mv.piece, mv.steps);
    }

    print!("{}", render_board(game.board()));
    println!("moves played: {}", game.move_count());
    if let Some(budget) = game.moves_required() {
        println!("budget: {budget} moves");
    }
    println!("solved: {}", game.is_solved());
    Ok(())
}

fn parse_move(spec: &str) -> Result<Move> {
    let (piece, steps) =
        spec.split_once(':').with_context(|| format!("expected piece:steps, got {spec:?}"))?;
    Ok(Move::new(
        piece.trim().parse().with_context(|| format!("invalid piece index in {spec:?}"))?,
        steps.trim().parse().with_context(|| format!("invalid step count in {spec:?}"))?,
    ))
}

fn puzzles(file: &Path, sample: bool) -> Result<()> {
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("cannot open {}", file.display()))?,
    );
    let mut catalog = Catalog::from_reader(reader).context("invalid puzzle JSON")?;
    let total = catalog.len();
    catalog.retain_valid();
    info!("loaded {} puzzle(s), {} valid", total, catalog.len());

    let records: Vec<_> = if sample {
        catalog.sample_one_per_level(&mut rand::rng())
    } else {
        catalog.puzzles().to_vec()
    };
    if records.is_empty() {
        bail!("no servable puzzles in {}", file.display());
    }
    for p in &records {
        println!("{}\tlevel {}\t{}", p.id, p.minimal_moves, p.desc);
    }
    Ok(())
}

//! # Grid Game Portal
//!
//! Entry point for a small game portal that plays classic grid board games
//! against a simple computer opponent: Tic Tac Toe, Othello (Reversi) and
//! Connect Four.
//!
//! With no arguments the launcher menu lists the available games; `--game`
//! jumps straight into one. `--seed` makes the computer opponents
//! reproducible.

mod console;

use clap::Parser;
use portal::game_wrapper::GameKind;
use std::io;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start a specific game directly (tictactoe, othello, connect4)
    /// instead of opening the launcher menu.
    #[clap(short, long)]
    game: Option<String>,

    /// Seed for the computer opponents, for reproducible games.
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    match args.game {
        Some(name) => match name.parse::<GameKind>() {
            Ok(kind) => console::run_game(kind.create(args.seed)),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(2);
            }
        },
        None => console::run_menu(args.seed),
    }
}

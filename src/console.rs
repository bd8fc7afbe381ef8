//! Terminal presentation for the portal: the launcher menu, board
//! rendering with column-letter and row-number headers, and the input loop
//! that turns typed coordinate labels into `handle_player_move` calls.
//!
//! All game rules stay behind the engine interface; this module only
//! translates between text and grid indices and re-renders after every
//! settled turn.

use colored::{ColoredString, Colorize};
use portal::game_wrapper::{GameKind, GameWrapper};
use portal::games::connect4::Disc;
use portal::games::othello::Stone;
use portal::games::tictactoe::Mark;
use portal::grid::{column_letter, parse_column, parse_label};
use portal::Game;
use std::io::{self, BufRead, Write};

/// Launcher loop: list the games, run the chosen one to completion, return
/// to the list. 'q' leaves the portal.
pub fn run_menu(seed: Option<u64>) -> io::Result<()> {
    loop {
        println!();
        println!("{}", "=== Game Portal ===".bold());
        for (i, kind) in GameKind::ALL.iter().enumerate() {
            println!("  {}. {}", i + 1, kind.title());
        }
        println!("  q. Quit");

        let input = prompt("Select a game: ")?;
        if input.is_empty() {
            // stdin closed
            return Ok(());
        }
        let choice = GameKind::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| input.trim() == (i + 1).to_string())
            .map(|(_, &kind)| kind);
        match choice {
            Some(kind) => {
                println!("Starting {}...", kind.title());
                run_game(kind.create(seed))?;
            }
            None if input.trim().eq_ignore_ascii_case("q") => return Ok(()),
            None => println!("{}", "Please pick one of the listed entries.".red()),
        }
    }
}

/// Plays a single game session to its terminal state (or until the user
/// quits), rendering after every settled turn.
pub fn run_game(mut game: GameWrapper) -> io::Result<()> {
    render(&game);
    while !game.is_terminal() {
        let hint = match game {
            GameWrapper::ConnectFour(_) => "column letter",
            _ => "coordinate like B3",
        };
        let input = prompt(&format!("Your move ({}, q to leave): ", hint))?;
        if input.is_empty() {
            // stdin closed
            return Ok(());
        }
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        match target_cell(&game, input) {
            Ok((row, col)) => game.handle_player_move(row, col),
            Err(err) => {
                println!("{}", err.red());
                continue;
            }
        }
        render(&game);
    }
    Ok(())
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Translates typed input into in-range grid indices. Everything invalid is
/// filtered here so the engines only ever see playable coordinates.
fn target_cell(game: &GameWrapper, input: &str) -> Result<(usize, usize), String> {
    match game {
        GameWrapper::ConnectFour(_) => {
            let col = parse_column(input)?;
            if col >= game.cols() {
                return Err(format!("Column {} is off the board", column_letter(col)));
            }
            Ok((0, col))
        }
        _ => {
            let (row, col) = parse_label(input)?;
            if row >= game.rows() || col >= game.cols() {
                return Err(format!("{} is off the board", input.to_uppercase()));
            }
            Ok((row, col))
        }
    }
}

/// Draws the column-letter header, the board with row numbers, and the
/// status line.
fn render(game: &GameWrapper) {
    println!();
    print!("   ");
    for c in 0..game.cols() {
        print!(" {}", column_letter(c).to_string().bold());
    }
    println!();
    for r in 0..game.rows() {
        // Pad before styling: ANSI escapes would defeat the width format.
        print!("{}", format!("{:>3}", r + 1).bold());
        for c in 0..game.cols() {
            print!(" {}", cell_glyph(game, r, c));
        }
        println!();
    }
    println!("{}", game.status().bold());
}

fn cell_glyph(game: &GameWrapper, row: usize, col: usize) -> ColoredString {
    match game {
        GameWrapper::TicTacToe(g) => match g.grid().get(row, col) {
            Some(Mark::X) => "X".red(),
            Some(Mark::O) => "O".blue(),
            None => "·".dimmed(),
        },
        GameWrapper::Othello(g) => match g.grid().get(row, col) {
            Some(Stone::Black) => "⚫".normal(),
            Some(Stone::White) => "⚪".normal(),
            None => {
                // Hint dots mark the human's legal placements.
                if g.current_player() == Stone::Black && g.valid_moves().contains(&(row, col)) {
                    "·".green()
                } else {
                    "·".dimmed()
                }
            }
        },
        GameWrapper::ConnectFour(g) => match g.grid().get(row, col) {
            Some(Disc::P1) => "●".red(),
            Some(Disc::P2) => "●".yellow(),
            None => "·".dimmed(),
        },
    }
}

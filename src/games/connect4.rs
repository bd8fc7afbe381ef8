//! Connect Four on the standard 6x7 board.
//!
//! Moves are column-indexed: a piece always lands in the lowest empty row
//! of the chosen column, so the row supplied by the presentation layer is
//! ignored. The computer opponent drops into a random open column.

use crate::grid::{column_letter, coord_label, Grid};
use crate::{Game, Outcome, Role};
use colored::Colorize;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;

const ROWS: usize = 6;
const COLS: usize = 7;
const LINE_SIZE: usize = 4;

/// Player discs. P1 is the human, P2 the computer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Disc {
    P1,
    P2,
}

impl Disc {
    pub fn role(self) -> Role {
        match self {
            Disc::P1 => Role::Human,
            Disc::P2 => Role::Computer,
        }
    }

    pub fn opponent(self) -> Disc {
        match self {
            Disc::P1 => Disc::P2,
            Disc::P2 => Disc::P1,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::P1 => write!(f, "P1"),
            Disc::P2 => write!(f, "P2"),
        }
    }
}

/// Complete state of one Connect Four session.
pub struct ConnectFourGame {
    grid: Grid<Disc>,
    current: Disc,
    winner: Option<Disc>,
    game_over: bool,
    status: String,
    rng: Xoshiro256PlusPlus,
}

impl ConnectFourGame {
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256PlusPlus::from_os_rng())
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(rng: Xoshiro256PlusPlus) -> Self {
        ConnectFourGame {
            grid: Grid::new(ROWS, COLS),
            current: Disc::P1,
            winner: None,
            game_over: false,
            status: "Player 1's turn".to_string(),
            rng,
        }
    }

    pub fn current_player(&self) -> Disc {
        self.current
    }

    /// A column accepts a drop while its topmost cell is free.
    fn column_open(&self, col: usize) -> bool {
        self.grid.get(0, col).is_none()
    }

    /// Lowest free row of `col`, scanning from the bottom up.
    fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..self.grid.rows()).rev().find(|&r| self.grid.get(r, col).is_none())
    }

    /// Win/draw evaluation after `mover` dropped a disc, flipping the turn
    /// when the game continues.
    fn settle(&mut self, mover: Disc) {
        if self.grid.has_line(mover, LINE_SIZE) {
            self.game_over = true;
            self.winner = Some(mover);
            self.status = match mover.role() {
                Role::Human => "Player 1 wins!".to_string(),
                Role::Computer => "Robot wins!".to_string(),
            };
        } else if self.grid.is_full() {
            self.game_over = true;
            self.status = "It's a draw!".to_string();
        } else {
            self.current = mover.opponent();
            self.status = match self.current.role() {
                Role::Human => "Player 1's turn".to_string(),
                Role::Computer => "Robot's turn...".to_string(),
            };
        }
    }
}

impl Default for ConnectFourGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ConnectFourGame {
    type Piece = Disc;

    /// Only `col` matters: the disc falls to the lowest open row.
    fn handle_player_move(&mut self, _row: usize, col: usize) {
        if self.game_over || self.current != Disc::P1 {
            return;
        }
        match self.next_open_row(col) {
            Some(row) => {
                self.grid.set(row, col, Disc::P1);
                println!(
                    "{} moves to column {} (drops to {})",
                    "[PLAYER]".cyan(),
                    column_letter(col),
                    coord_label(row, col)
                );
                self.settle(Disc::P1);
                if !self.game_over && self.current == Disc::P2 {
                    self.computer_move();
                }
            }
            None => {
                self.status = format!("Column {} is full! Try another.", column_letter(col));
                println!("Invalid move: column {} is full.", column_letter(col));
            }
        }
    }

    fn computer_move(&mut self) {
        if self.game_over || self.current != Disc::P2 {
            return;
        }
        let open: Vec<usize> = (0..self.grid.cols()).filter(|&c| self.column_open(c)).collect();
        let col = match open.choose(&mut self.rng) {
            Some(&c) => c,
            None => return,
        };
        if let Some(row) = self.next_open_row(col) {
            self.grid.set(row, col, Disc::P2);
            println!(
                "{} moves to column {} (drops to {})",
                "[ROBOT]".yellow(),
                column_letter(col),
                coord_label(row, col)
            );
            self.settle(Disc::P2);
        }
    }

    fn grid(&self) -> &Grid<Disc> {
        &self.grid
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }

    fn outcome(&self) -> Outcome<Disc> {
        if !self.game_over {
            Outcome::InProgress
        } else if let Some(winner) = self.winner {
            Outcome::Won(winner)
        } else {
            Outcome::Draw
        }
    }
}

//! Tic Tac Toe against a random computer opponent.
//!
//! The human plays X and always moves first; the computer answers with O
//! picked uniformly among the empty cells. The only legality rule is that
//! the chosen cell must be empty.

use crate::grid::{coord_label, Grid};
use crate::{Game, Outcome, Role};
use colored::Colorize;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;

/// Cell marker. X is the human, O the computer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn role(self) -> Role {
        match self {
            Mark::X => Role::Human,
            Mark::O => Role::Computer,
        }
    }

    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Complete state of one Tic Tac Toe session.
pub struct TicTacToeGame {
    grid: Grid<Mark>,
    current: Mark,
    winner: Option<Mark>,
    game_over: bool,
    status: String,
    rng: Xoshiro256PlusPlus,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256PlusPlus::from_os_rng())
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(rng: Xoshiro256PlusPlus) -> Self {
        TicTacToeGame {
            grid: Grid::new(3, 3),
            current: Mark::X,
            winner: None,
            game_over: false,
            status: "Your turn (X)".to_string(),
            rng,
        }
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Win/draw evaluation after `mover` placed a mark, flipping the turn
    /// when the game continues.
    fn settle(&mut self, mover: Mark) {
        if self.grid.has_line(mover, 3) {
            self.game_over = true;
            self.winner = Some(mover);
            self.status = format!("{} wins!", mover);
        } else if self.grid.is_full() {
            self.game_over = true;
            self.status = "It's a draw!".to_string();
        } else {
            self.current = mover.opponent();
            self.status = match self.current.role() {
                Role::Human => "Your turn (X)".to_string(),
                Role::Computer => "Robot's turn...".to_string(),
            };
        }
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToeGame {
    type Piece = Mark;

    fn handle_player_move(&mut self, row: usize, col: usize) {
        if self.game_over || self.current != Mark::X {
            return;
        }
        if self.grid.get(row, col).is_some() {
            return;
        }
        println!("{} moves to {}", "[PLAYER]".cyan(), coord_label(row, col));
        self.grid.set(row, col, Mark::X);
        self.settle(Mark::X);
        if !self.game_over && self.current == Mark::O {
            self.computer_move();
        }
    }

    fn computer_move(&mut self) {
        if self.game_over || self.current != Mark::O {
            return;
        }
        let empty: Vec<(usize, usize)> = (0..self.grid.rows())
            .flat_map(|r| (0..self.grid.cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| self.grid.get(r, c).is_none())
            .collect();
        if let Some(&(row, col)) = empty.choose(&mut self.rng) {
            println!("{} moves to {}", "[ROBOT]".yellow(), coord_label(row, col));
            self.grid.set(row, col, Mark::O);
            self.settle(Mark::O);
        }
    }

    fn grid(&self) -> &Grid<Mark> {
        &self.grid
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }

    fn outcome(&self) -> Outcome<Mark> {
        if !self.game_over {
            Outcome::InProgress
        } else if let Some(winner) = self.winner {
            Outcome::Won(winner)
        } else {
            Outcome::Draw
        }
    }
}

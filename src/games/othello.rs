//! Othello (Reversi) against a greedy computer opponent.
//!
//! The human plays Black and moves first on the standard 8x8 board with the
//! four center cells pre-seeded. A placement is legal only when it flips at
//! least one opposing stone: from the placed cell, every one of the eight
//! compass directions is walked outward, and a contiguous run of opposing
//! stones closed off by one of the mover's own stones is captured.
//!
//! When a player has no legal placement their turn is skipped; when neither
//! player can move the game ends and the higher stone count wins. The
//! computer chooses the placement flipping the most stones, ties going to
//! the first cell found in row-major scan order.

use crate::grid::{coord_label, Grid};
use crate::{Game, Outcome, Role};
use colored::Colorize;
use std::fmt;

const BOARD_SIZE: usize = 8;

/// The eight compass directions as (row, col) steps.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Player stones. Black is the human, White the computer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn role(self) -> Role {
        match self {
            Stone::Black => Role::Human,
            Stone::White => Role::Computer,
        }
    }

    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "B"),
            Stone::White => write!(f, "W"),
        }
    }
}

/// Complete state of one Othello session.
///
/// `valid_moves` is the legality oracle: every empty cell where the player
/// about to move would flip at least one stone. It is recomputed on every
/// turn change.
pub struct OthelloGame {
    grid: Grid<Stone>,
    current: Stone,
    valid_moves: Vec<(usize, usize)>,
    winner: Option<Stone>,
    game_over: bool,
    status: String,
}

impl OthelloGame {
    pub fn new() -> Self {
        let mut grid = Grid::new(BOARD_SIZE, BOARD_SIZE);
        grid.set(3, 3, Stone::White);
        grid.set(3, 4, Stone::Black);
        grid.set(4, 3, Stone::Black);
        grid.set(4, 4, Stone::White);
        let mut game = OthelloGame {
            grid,
            current: Stone::Black,
            valid_moves: Vec::new(),
            winner: None,
            game_over: false,
            status: "Player B's turn".to_string(),
        };
        game.update_valid_moves();
        game
    }

    pub fn current_player(&self) -> Stone {
        self.current
    }

    /// Cells where the player about to move may legally place.
    pub fn valid_moves(&self) -> &[(usize, usize)] {
        &self.valid_moves
    }

    /// All opposing stones that placing `mover` at (row, col) would flip.
    ///
    /// Each direction contributes its contiguous run of opposing stones only
    /// when the run is closed off by one of the mover's own stones; walking
    /// off the board or onto an empty cell first contributes nothing. An
    /// empty result means the placement is illegal.
    pub fn pieces_to_flip(&self, row: usize, col: usize, mover: Stone) -> Vec<(usize, usize)> {
        if self.grid.get(row, col).is_some() {
            return Vec::new();
        }
        let opponent = mover.opponent();
        let mut all_flips = Vec::new();

        for &(dr, dc) in DIRECTIONS.iter() {
            let mut line = Vec::new();
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;

            while self.grid.in_bounds(r, c) {
                match self.grid.get(r as usize, c as usize) {
                    Some(stone) if stone == opponent => line.push((r as usize, c as usize)),
                    Some(_) => {
                        // One of the mover's own stones closes the run.
                        all_flips.append(&mut line);
                        break;
                    }
                    None => break,
                }
                r += dr;
                c += dc;
            }
        }
        all_flips
    }

    fn update_valid_moves(&mut self) {
        let mover = self.current;
        let mut moves = Vec::new();
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                if self.grid.get(r, c).is_none() && !self.pieces_to_flip(r, c, mover).is_empty() {
                    moves.push((r, c));
                }
            }
        }
        self.valid_moves = moves;
    }

    /// Places a stone for `mover` and flips every captured stone. Returns
    /// the number of flips.
    fn place_and_flip(&mut self, row: usize, col: usize, mover: Stone) -> usize {
        let flips = self.pieces_to_flip(row, col, mover);
        self.grid.set(row, col, mover);
        for &(r, c) in flips.iter() {
            self.grid.set(r, c, mover);
        }
        flips.len()
    }

    /// Counts the stones and settles the final outcome.
    fn end_game(&mut self) {
        self.game_over = true;
        let black = self.grid.count(Stone::Black);
        let white = self.grid.count(Stone::White);
        if black > white {
            self.winner = Some(Stone::Black);
            self.status = format!("Game over! Player B wins {} to {}", black, white);
        } else if white > black {
            self.winner = Some(Stone::White);
            self.status = format!("Game over! Robot W wins {} to {}", white, black);
        } else {
            self.status = format!("Game over! It's a draw: {} to {}", black, white);
        }
        println!("{}", self.status);
    }

    /// Hands the turn over, skipping players without a legal placement.
    ///
    /// If the incoming player has no valid moves the turn bounces back to
    /// the previous player; if that player is also stuck the game ends on
    /// stone counts. Whenever the turn lands on the computer, its move is
    /// applied before returning.
    fn switch_player(&mut self) {
        self.current = self.current.opponent();
        self.update_valid_moves();

        if self.valid_moves.is_empty() {
            println!("No valid moves for {}. Skipping turn.", self.current);
            self.current = self.current.opponent();
            self.update_valid_moves();

            if self.valid_moves.is_empty() {
                self.end_game();
            } else if self.current == Stone::Black {
                self.status = "Robot had no moves. Player B's turn.".to_string();
            } else {
                self.status = "Player had no moves. Robot's turn.".to_string();
                self.computer_move();
            }
        } else if self.current == Stone::Black {
            self.status = "Player B's turn".to_string();
        } else {
            self.status = "Robot's turn...".to_string();
            self.computer_move();
        }
    }
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for OthelloGame {
    type Piece = Stone;

    fn handle_player_move(&mut self, row: usize, col: usize) {
        if self.game_over || self.current != Stone::Black {
            return;
        }
        if !self.valid_moves.contains(&(row, col)) {
            self.status = "Invalid move! Try again.".to_string();
            println!("Invalid move: {}", coord_label(row, col));
            return;
        }
        let flipped = self.place_and_flip(row, col, Stone::Black);
        println!(
            "{} moves to {}, flips {} pieces",
            "[PLAYER]".cyan(),
            coord_label(row, col),
            flipped
        );
        self.switch_player();
    }

    /// Greedy policy: the placement flipping the most stones, ties going to
    /// the first cell in scan order.
    fn computer_move(&mut self) {
        if self.game_over || self.current != Stone::White {
            return;
        }
        let mut best = None;
        let mut max_flips = 0;
        for &(r, c) in self.valid_moves.iter() {
            let flips = self.pieces_to_flip(r, c, Stone::White).len();
            if flips > max_flips {
                max_flips = flips;
                best = Some((r, c));
            }
        }
        let (row, col) = match best {
            Some(cell) => cell,
            None => return,
        };
        let flipped = self.place_and_flip(row, col, Stone::White);
        println!(
            "{} moves to {}, flips {} pieces",
            "[ROBOT]".yellow(),
            coord_label(row, col),
            flipped
        );
        self.switch_player();
    }

    fn grid(&self) -> &Grid<Stone> {
        &self.grid
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }

    fn outcome(&self) -> Outcome<Stone> {
        if !self.game_over {
            Outcome::InProgress
        } else if let Some(winner) = self.winner {
            Outcome::Won(winner)
        } else {
            Outcome::Draw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_stones(game: &OthelloGame) -> usize {
        game.grid().count(Stone::Black) + game.grid().count(Stone::White)
    }

    #[test]
    fn test_opening_board() {
        let game = OthelloGame::new();
        assert_eq!(game.grid().get(3, 3), Some(Stone::White));
        assert_eq!(game.grid().get(3, 4), Some(Stone::Black));
        assert_eq!(game.grid().get(4, 3), Some(Stone::Black));
        assert_eq!(game.grid().get(4, 4), Some(Stone::White));
        assert_eq!(total_stones(&game), 4);
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_opening_flip_set() {
        let game = OthelloGame::new();
        assert_eq!(game.pieces_to_flip(2, 3, Stone::Black), vec![(3, 3)]);
    }

    #[test]
    fn test_opening_valid_moves() {
        let game = OthelloGame::new();
        let mut moves = game.valid_moves().to_vec();
        moves.sort();
        assert_eq!(moves, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_occupied_cell_has_no_flips() {
        let game = OthelloGame::new();
        assert!(game.pieces_to_flip(3, 3, Stone::Black).is_empty());
    }

    #[test]
    fn test_invalid_move_is_rejected() {
        let mut game = OthelloGame::new();
        game.handle_player_move(0, 0);
        assert_eq!(total_stones(&game), 4);
        assert_eq!(game.current_player(), Stone::Black);
        assert!(game.status().contains("Invalid move"));
    }

    #[test]
    fn test_placement_arithmetic() {
        // A legal placement adds one stone and conserves the count across
        // flips, which only change colors.
        let mut game = OthelloGame::new();
        let flips = game.pieces_to_flip(2, 3, Stone::Black).len();
        assert_eq!(flips, 1);
        let flipped = game.place_and_flip(2, 3, Stone::Black);
        assert_eq!(flipped, flips);
        assert_eq!(total_stones(&game), 5);
        assert_eq!(game.grid().count(Stone::Black), 4);
        assert_eq!(game.grid().count(Stone::White), 1);
    }

    #[test]
    fn test_full_turn_from_opening() {
        let mut game = OthelloGame::new();
        game.handle_player_move(2, 3);
        // Black placed one stone and the robot replied with one: two new
        // stones total, everything else only changed color.
        assert_eq!(total_stones(&game), 6);
        assert_eq!(game.current_player(), Stone::Black);
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_greedy_picks_biggest_flip_set() {
        let mut game = OthelloGame::new();
        // White's options: (0,0) flips two, (2,0) flips one. The far
        // corner gives Black a reply so the game keeps going.
        let mut grid = Grid::new(BOARD_SIZE, BOARD_SIZE);
        grid.set(0, 1, Stone::Black);
        grid.set(0, 2, Stone::Black);
        grid.set(0, 3, Stone::White);
        grid.set(2, 1, Stone::Black);
        grid.set(2, 2, Stone::White);
        grid.set(7, 0, Stone::Black);
        grid.set(7, 1, Stone::White);
        game.grid = grid;
        game.current = Stone::White;
        game.update_valid_moves();

        game.computer_move();

        assert_eq!(game.grid().get(0, 0), Some(Stone::White));
        assert_eq!(game.grid().get(0, 1), Some(Stone::White));
        assert_eq!(game.grid().get(0, 2), Some(Stone::White));
        // The smaller option was left alone.
        assert_eq!(game.grid().get(2, 1), Some(Stone::Black));
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_skip_turn_when_robot_has_no_moves() {
        let mut game = OthelloGame::new();
        let mut grid = Grid::new(BOARD_SIZE, BOARD_SIZE);
        grid.set(0, 0, Stone::Black);
        grid.set(0, 1, Stone::White);
        game.grid = grid;
        game.current = Stone::Black;
        game.update_valid_moves();

        // White has no placement anywhere, so the turn bounces straight
        // back to Black, who can still play (0,2).
        game.switch_player();
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.valid_moves(), &[(0, 2)]);
        assert!(game.status().contains("no moves"));
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_game_ends_when_neither_player_can_move() {
        let mut game = OthelloGame::new();
        let mut grid = Grid::new(BOARD_SIZE, BOARD_SIZE);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let stone = if r < 6 { Stone::Black } else { Stone::White };
                grid.set(r, c, stone);
            }
        }
        game.grid = grid;
        game.current = Stone::White;
        game.update_valid_moves();

        game.switch_player();
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Outcome::Won(Stone::Black));
        assert!(game.status().contains("Player B wins"));
    }

    #[test]
    fn test_endgame_counts_decide_draw() {
        let mut game = OthelloGame::new();
        let mut grid = Grid::new(BOARD_SIZE, BOARD_SIZE);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let stone = if r < 4 { Stone::Black } else { Stone::White };
                grid.set(r, c, stone);
            }
        }
        game.grid = grid;
        game.current = Stone::White;
        game.update_valid_moves();

        game.switch_player();
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut game = OthelloGame::new();
        game.game_over = true;
        game.status = "Game over!".to_string();
        let before = game.grid().clone();
        game.handle_player_move(2, 3);
        game.computer_move();
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn test_render_state_is_idempotent() {
        let mut game = OthelloGame::new();
        game.handle_player_move(2, 3);
        assert_eq!(game.grid().clone(), game.grid().clone());
        assert_eq!(game.status(), game.status());
    }
}

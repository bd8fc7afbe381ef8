//! # Game Wrapper Module - Unified Game Interface
//!
//! The abstraction layer that lets the launcher and presentation code work
//! with any game variant through a single interface. Each variant keeps its
//! own piece and state types; the wrapper enum dispatches to them without
//! dynamic allocation, and the presentation layer can still match on a
//! variant when it needs game-specific data (Othello's move hints, say).

use crate::games::connect4::ConnectFourGame;
use crate::games::othello::OthelloGame;
use crate::games::tictactoe::TicTacToeGame;
use crate::Game;
use std::fmt;
use std::str::FromStr;

/// Identifiers for the playable game variants - the launcher's entire
/// command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    Othello,
    ConnectFour,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::TicTacToe, GameKind::Othello, GameKind::ConnectFour];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::Othello => "Othello",
            GameKind::ConnectFour => "Connect Four",
        }
    }

    /// Creates a fresh game of this kind. A seed makes the computer
    /// opponent reproducible; Othello's greedy policy is deterministic
    /// either way.
    pub fn create(self, seed: Option<u64>) -> GameWrapper {
        match self {
            GameKind::TicTacToe => GameWrapper::TicTacToe(match seed {
                Some(s) => TicTacToeGame::seeded(s),
                None => TicTacToeGame::new(),
            }),
            GameKind::Othello => GameWrapper::Othello(OthelloGame::new()),
            GameKind::ConnectFour => GameWrapper::ConnectFour(match seed {
                Some(s) => ConnectFourGame::seeded(s),
                None => ConnectFourGame::new(),
            }),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tictactoe" | "tic-tac-toe" | "ttt" => Ok(GameKind::TicTacToe),
            "othello" | "reversi" => Ok(GameKind::Othello),
            "connect4" | "connectfour" | "connect-four" => Ok(GameKind::ConnectFour),
            other => Err(format!(
                "Unknown game type: {} (expected tictactoe, othello or connect4)",
                other
            )),
        }
    }
}

/// Wrapper enum over all game variants.
///
/// The launcher owns at most one of these at a time and discards it fully
/// when the session ends.
pub enum GameWrapper {
    TicTacToe(TicTacToeGame),
    Othello(OthelloGame),
    ConnectFour(ConnectFourGame),
}

macro_rules! impl_game_dispatch {
    ($($variant:ident),*) => {
        impl GameWrapper {
            pub fn handle_player_move(&mut self, row: usize, col: usize) {
                match self {
                    $(GameWrapper::$variant(g) => g.handle_player_move(row, col),)*
                }
            }

            pub fn computer_move(&mut self) {
                match self {
                    $(GameWrapper::$variant(g) => g.computer_move(),)*
                }
            }

            pub fn status(&self) -> &str {
                match self {
                    $(GameWrapper::$variant(g) => g.status(),)*
                }
            }

            pub fn is_terminal(&self) -> bool {
                match self {
                    $(GameWrapper::$variant(g) => g.is_terminal(),)*
                }
            }

            pub fn rows(&self) -> usize {
                match self {
                    $(GameWrapper::$variant(g) => g.grid().rows(),)*
                }
            }

            pub fn cols(&self) -> usize {
                match self {
                    $(GameWrapper::$variant(g) => g.grid().cols(),)*
                }
            }
        }
    };
}

impl_game_dispatch!(TicTacToe, Othello, ConnectFour);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("othello".parse::<GameKind>(), Ok(GameKind::Othello));
        assert_eq!("Connect4".parse::<GameKind>(), Ok(GameKind::ConnectFour));
        assert_eq!("TTT".parse::<GameKind>(), Ok(GameKind::TicTacToe));
        assert!("chess".parse::<GameKind>().is_err());
    }

    #[test]
    fn test_create_dimensions() {
        assert_eq!(GameKind::TicTacToe.create(Some(1)).rows(), 3);
        assert_eq!(GameKind::Othello.create(None).rows(), 8);
        let c4 = GameKind::ConnectFour.create(Some(1));
        assert_eq!(c4.rows(), 6);
        assert_eq!(c4.cols(), 7);
    }

    #[test]
    fn test_dispatch_smoke() {
        let mut game = GameKind::TicTacToe.create(Some(5));
        assert!(!game.is_terminal());
        game.handle_player_move(0, 0);
        assert!(!game.status().is_empty());
    }
}

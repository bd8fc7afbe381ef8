//! # Game Implementations Module
//!
//! This module contains the rule engines for all games offered by the
//! portal. Each game implements the [`crate::Game`] trait to provide a
//! consistent interface for the presentation layer and the launcher.
//!
//! ## Supported Games
//! - **Tic Tac Toe**: 3x3 placement game, computer plays randomly
//! - **Othello (Reversi)**: Classic 8x8 piece-flipping strategy game,
//!   computer plays a greedy most-flips policy
//! - **Connect Four**: Gravity-based connection game on a 6x7 grid,
//!   computer drops into a random open column
//!
//! ## Adding New Games
//! To add a new game, create a new module and implement:
//! 1. A player identifier enum tagged with a human/computer role
//! 2. A game state type with the `Game` trait
//! 3. Status messages and move logging for the console boundary

pub mod connect4;
pub mod othello;
pub mod tictactoe;

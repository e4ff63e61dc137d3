//! Core Connect Four game logic: board representation, player identity,
//! four-in-a-row detection and the turn/round state machine.

mod board;
pub mod detector;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::{Player, PlayerId};
pub use state::{Game, GameStatus};

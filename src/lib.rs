//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 grid, played from the terminal one line
//! of input per move.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, win detection, state machine
//! - [`ui`]: Text rendering, input parsing and the game loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`logging`]: Tracing setup

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

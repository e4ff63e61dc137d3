//! Terminal front end: full-screen text frames, line-based input parsing and
//! the game loop that ties them to the game state.

mod app;
pub mod input;
pub mod render;

pub use app::{App, Outcome};

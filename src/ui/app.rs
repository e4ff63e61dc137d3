use std::io::{self, Write};
use std::time::Duration;

use crate::game::{Game, GameStatus, PlayerId};

use super::input::{self, Command, LineSource};
use super::render;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(PlayerId),
    Draw,
    Quit,
}

/// Turn-by-turn loop: draw, read, validate, play, advance.
pub struct App<L, W> {
    game: Game,
    input: L,
    out: W,
    error_pause: Duration,
}

impl<L: LineSource, W: Write> App<L, W> {
    pub fn new(game: Game, input: L, out: W, error_pause: Duration) -> Self {
        App {
            game,
            input,
            out,
            error_pause,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the app, handing back the output writer
    pub fn into_output(self) -> W {
        self.out
    }

    /// Main application loop
    pub fn run(&mut self) -> io::Result<Outcome> {
        tracing::info!(first = self.game.current_player().name(), "session started");

        let outcome = loop {
            // Win is scanned before the draw check
            match self.game.evaluate() {
                GameStatus::Won(player) => break Outcome::Won(player),
                GameStatus::Draw => break Outcome::Draw,
                GameStatus::AwaitingMove(_) => {}
            }

            render::draw(&mut self.out, &self.game)?;
            render::prompt(&mut self.out)?;

            match input::read_command(&mut self.input, self.game.board())? {
                Ok(Command::Move(col)) => {
                    self.game.play(col);
                    self.game.change_turn();
                }
                Ok(Command::Quit) => {
                    tracing::info!(round = self.game.round(), "player quit");
                    render::end(&mut self.out, &self.game)?;
                    return Ok(Outcome::Quit);
                }
                Err(err) => {
                    tracing::debug!(%err, round = self.game.round(), "input rejected");
                    write!(self.out, "{}", render::error_message(err))?;
                    self.out.flush()?;
                    std::thread::sleep(self.error_pause);
                }
            }
        };

        tracing::info!(?outcome, round = self.game.round(), "game over");
        render::draw(&mut self.out, &self.game)?;
        render::end(&mut self.out, &self.game)?;
        Ok(outcome)
    }
}
